//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  seed(&store, ...)                                                     │
//! │       │                                                                 │
//! │       │  store.save_all(items) / store.find_all()                      │
//! │       ▼                                                                 │
//! │  dyn ItemStore  ◄── the only surface the seeder sees                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ItemRepository                                                        │
//! │  ├── save(&self, item)                                                 │
//! │  ├── save_all(&self, items)   (one transaction)                        │
//! │  ├── find_all(&self)                                                   │
//! │  ├── find_by_id(&self, id)                                             │
//! │  ├── count(&self)                                                      │
//! │  └── delete_all(&self)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ItemRepository`](item::ItemRepository) - Item persistence

pub mod item;

use async_trait::async_trait;
use stockroom_core::{Item, NewItem};

use crate::error::DbResult;

/// Bulk persistence operations the startup seeder depends on.
///
/// Implemented by [`ItemRepository`](item::ItemRepository); tests substitute
/// their own stores to observe or break the seeder.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Stores every item and returns them with their assigned ids, in input order.
    async fn save_all(&self, items: Vec<NewItem>) -> DbResult<Vec<Item>>;

    /// Returns every stored item, in the store's own order.
    async fn find_all(&self) -> DbResult<Vec<Item>>;
}
