//! # Startup Seeder
//!
//! Writes the seed catalog to an [`ItemStore`], reads everything back and
//! prints one line per stored item.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  seed_items()  ──►  store.save_all(3 items)  ──►  store.find_all()     │
//! │                                                         │               │
//! │                                                         ▼               │
//! │                                        one line per item ──► out       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Runs once per process. There is no dedup: a second run against the same
//! store adds another three rows.

use std::io::Write;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::SeedError;
use crate::repository::ItemStore;
use stockroom_core::{seed_items, Item};

/// How each item line is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Item(id=1, name=Adam, price=9.99, quantity=5.0)`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Seeds the store and prints its full contents.
///
/// ## Arguments
/// * `store` - Where the catalog is saved and read back from
/// * `out` - Line sink, usually locked stdout
/// * `format` - Line rendering
///
/// ## Returns
/// The items returned by `find_all`, in the order they were printed.
/// Any failure is returned as-is; nothing is written if the insert fails.
pub async fn seed<S, W>(
    store: &S,
    out: &mut W,
    format: OutputFormat,
) -> Result<Vec<Item>, SeedError>
where
    S: ItemStore + ?Sized,
    W: Write,
{
    let batch = seed_items();
    info!(count = batch.len(), "Seeding items");

    let saved = store.save_all(batch).await?;
    debug!(ids = ?saved.iter().map(|i| i.id).collect::<Vec<_>>(), "Seed batch stored");

    let items = store.find_all().await?;
    for item in &items {
        write_item(out, item, format)?;
    }
    out.flush()?;

    info!(count = items.len(), "Printed stored items");
    Ok(items)
}

fn write_item<W: Write>(
    out: &mut W,
    item: &Item,
    format: OutputFormat,
) -> Result<(), SeedError> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", item)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, item)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DbError, DbResult};
    use crate::{Database, DbConfig};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use stockroom_core::NewItem;

    /// Store that fails every insert.
    struct OfflineStore;

    #[async_trait]
    impl ItemStore for OfflineStore {
        async fn save_all(&self, _items: Vec<NewItem>) -> DbResult<Vec<Item>> {
            Err(DbError::ConnectionFailed("store offline".to_string()))
        }

        async fn find_all(&self) -> DbResult<Vec<Item>> {
            Ok(Vec::new())
        }
    }

    /// Store that returns rows newest-first and records call order.
    #[derive(Default)]
    struct ReversingStore {
        rows: Mutex<Vec<Item>>,
        calls: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl ItemStore for ReversingStore {
        async fn save_all(&self, items: Vec<NewItem>) -> DbResult<Vec<Item>> {
            self.calls.lock().unwrap().push("save_all");
            let mut rows = self.rows.lock().unwrap();
            let mut saved = Vec::new();
            for item in items {
                let item = Item::from_new(rows.len() as i64 + 100, item);
                rows.push(item.clone());
                saved.push(item);
            }
            Ok(saved)
        }

        async fn find_all(&self) -> DbResult<Vec<Item>> {
            self.calls.lock().unwrap().push("find_all");
            Ok(self.rows.lock().unwrap().iter().rev().cloned().collect())
        }
    }

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert_eq!(" JSON ".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[tokio::test]
    async fn test_seed_prints_each_stored_item() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut out: Vec<u8> = Vec::new();

        let items = seed(&db.items(), &mut out, OutputFormat::Text).await.unwrap();

        assert_eq!(items.len(), 3);
        let expected: Vec<String> = items.iter().map(Item::to_string).collect();
        assert_eq!(lines(&out), expected);
        assert_eq!(
            lines(&out)[0],
            format!("Item(id={}, name=Adam, price=9.99, quantity=5.0)", items[0].id)
        );
    }

    #[tokio::test]
    async fn test_seed_saves_before_reading_and_keeps_store_order() {
        let store = ReversingStore::default();
        let mut out: Vec<u8> = Vec::new();

        let items = seed(&store, &mut out, OutputFormat::Text).await.unwrap();

        assert_eq!(*store.calls.lock().unwrap(), vec!["save_all", "find_all"]);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["John", "Eve", "Adam"]);
        assert!(lines(&out)[0].contains("name=John"));
    }

    #[tokio::test]
    async fn test_seed_insert_failure_aborts_without_output() {
        let mut out: Vec<u8> = Vec::new();

        let result = seed(&OfflineStore, &mut out, OutputFormat::Text).await;

        assert!(matches!(
            result,
            Err(SeedError::Store(DbError::ConnectionFailed(_)))
        ));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_seed_json_lines() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut out: Vec<u8> = Vec::new();

        seed(&db.items(), &mut out, OutputFormat::Json).await.unwrap();

        let parsed: Vec<Item> = lines(&out)
            .iter()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[1].values(), ("Eve", 14.99, 3.0));
    }

    #[tokio::test]
    async fn test_seed_through_trait_object() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.items();
        let store: &dyn ItemStore = &repo;
        let mut out: Vec<u8> = Vec::new();

        let items = seed(store, &mut out, OutputFormat::Text).await.unwrap();

        assert_eq!(items.len(), 3);
    }
}
