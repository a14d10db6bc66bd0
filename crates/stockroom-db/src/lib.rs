//! # stockroom-db: Database Layer for Stockroom
//!
//! This crate provides database access for Stockroom and the startup seeder
//! that runs against it. It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  main (apps/stockroom)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │   (item.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ItemRepository│    │ 001_create_  │  │   │
//! │  │   │               │    │ impl ItemStore│    │   items.sql  │  │   │
//! │  │   └───────────────┘    └───────▲───────┘    └──────────────┘  │   │
//! │  │                                │                                │   │
//! │  │                        ┌───────┴───────┐                       │   │
//! │  │                        │    seeder     │                       │   │
//! │  │                        └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (./stockroom.db or in-memory)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database and seeder error types
//! - [`repository`] - `ItemStore` trait and `ItemRepository`
//! - [`seeder`] - Startup seeding routine
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{seed, Database, DbConfig, OutputFormat};
//!
//! let db = Database::new(DbConfig::new("./stockroom.db")).await?;
//! let mut out = std::io::stdout().lock();
//! seed(&db.items(), &mut out, OutputFormat::Text).await?;
//! db.close().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seeder;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult, SeedError};
pub use pool::{Database, DbConfig};
pub use repository::item::ItemRepository;
pub use repository::ItemStore;
pub use seeder::{seed, OutputFormat};
