//! # stockroom-core: Domain Types for Stockroom
//!
//! The Item entity and the fixed catalog the startup seeder writes. No I/O
//! lives here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/stockroom (main)                        │   │
//! │  │        init tracing ──► load config ──► open db ──► seed        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Database Layer)                   │   │
//! │  │          SQLite pool, migrations, ItemRepository, seeder        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │        ┌───────────┐                  ┌───────────┐            │   │
//! │  │        │   types   │                  │  catalog  │            │   │
//! │  │        │  NewItem  │                  │ SEED_ITEMS│            │   │
//! │  │        │   Item    │                  │           │            │   │
//! │  │        └───────────┘                  └───────────┘            │   │
//! │  │                                                                 │   │
//! │  │              NO I/O • NO DATABASE • NO NETWORK                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `NewItem` (unsaved) and `Item` (stored)
//! - [`catalog`] - The three items written at startup
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::NewItem;
//!
//! let item = NewItem::new("Adam", 9.99, 5.0);
//! assert_eq!(item.name, "Adam");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{seed_items, SEED_ITEMS};
pub use types::{Item, NewItem};
