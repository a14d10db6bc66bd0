//! # Seed Catalog
//!
//! The fixed items written to the database at startup.

use crate::types::NewItem;

/// `(name, price, quantity)` for each seeded item, in insertion order.
pub const SEED_ITEMS: &[(&str, f64, f64)] = &[
    ("Adam", 9.99, 5.0),
    ("Eve", 14.99, 3.0),
    ("John", 7.49, 10.0),
];

/// Builds the unsaved items for one seeding run.
pub fn seed_items() -> Vec<NewItem> {
    SEED_ITEMS
        .iter()
        .map(|&(name, price, quantity)| NewItem::new(name, price, quantity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_items_match_catalog() {
        let items = seed_items();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0], NewItem::new("Adam", 9.99, 5.0));
        assert_eq!(items[1], NewItem::new("Eve", 14.99, 3.0));
        assert_eq!(items[2], NewItem::new("John", 7.49, 10.0));
    }
}
