//! # Domain Types
//!
//! The single entity stored by Stockroom.
//!
//! ## Identity Split
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐      save / save_all      ┌─────────────────┐     │
//! │  │    NewItem      │ ────────────────────────► │      Item       │     │
//! │  │  ─────────────  │                           │  ─────────────  │     │
//! │  │  name           │                           │  id (assigned)  │     │
//! │  │  price          │                           │  name           │     │
//! │  │  quantity       │                           │  price          │     │
//! │  └─────────────────┘                           │  quantity       │     │
//! │                                                └─────────────────┘     │
//! │                                                                         │
//! │  The id only exists once the database has assigned it, so callers     │
//! │  cannot choose one.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// NewItem
// =============================================================================

/// An item that has not been stored yet.
///
/// No validation is applied: negative prices and fractional or negative
/// quantities are accepted as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    /// Display label. Not unique.
    pub name: String,

    /// Unit price. No currency or precision is implied.
    pub price: f64,

    /// Quantity on hand. Stored as a float.
    pub quantity: f64,
}

impl NewItem {
    /// Creates an unsaved item.
    pub fn new(name: impl Into<String>, price: f64, quantity: f64) -> Self {
        NewItem {
            name: name.into(),
            price,
            quantity,
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A stored item, as returned by the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Row id assigned by the database on insert.
    pub id: i64,

    /// Display label. Not unique.
    pub name: String,

    /// Unit price as stored.
    pub price: f64,

    /// Quantity on hand as stored.
    pub quantity: f64,
}

impl Item {
    /// Attaches a database-assigned id to an unsaved item.
    pub fn from_new(id: i64, item: NewItem) -> Self {
        Item {
            id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }

    /// Returns the `(name, price, quantity)` triple, ignoring identity.
    pub fn values(&self) -> (&str, f64, f64) {
        (&self.name, self.price, self.quantity)
    }
}

/// Console form used by the seeder: `Item(id=1, name=Adam, price=9.99, quantity=5.0)`.
///
/// Floats use `{:?}` so whole numbers keep their `.0`.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item(id={}, name={}, price={:?}, quantity={:?})",
            self.id, self.name, self.price, self.quantity
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_accepts_any_values() {
        let item = NewItem::new("Refund", -4.5, -0.25);
        assert_eq!(item.price, -4.5);
        assert_eq!(item.quantity, -0.25);
    }

    #[test]
    fn test_from_new_keeps_values() {
        let item = Item::from_new(7, NewItem::new("Eve", 14.99, 3.0));
        assert_eq!(item.id, 7);
        assert_eq!(item.values(), ("Eve", 14.99, 3.0));
    }

    #[test]
    fn test_display() {
        let item = Item::from_new(1, NewItem::new("Adam", 9.99, 5.0));
        assert_eq!(
            item.to_string(),
            "Item(id=1, name=Adam, price=9.99, quantity=5.0)"
        );

        let item = Item::from_new(3, NewItem::new("John", 7.49, 10.0));
        assert_eq!(
            item.to_string(),
            "Item(id=3, name=John, price=7.49, quantity=10.0)"
        );
    }

    #[test]
    fn test_json_shape() {
        let item = Item::from_new(2, NewItem::new("Eve", 14.99, 3.0));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], 2);
        assert_eq!(json["name"], "Eve");
        assert_eq!(json["price"], 14.99);
        assert_eq!(json["quantity"], 3.0);
    }
}
