//! # Item Repository
//!
//! Database operations for items.
//!
//! ## Key Operations
//! - Single and batch inserts (ids assigned by SQLite)
//! - Full reads in insertion order
//! - Lookup by id, count, bulk delete

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::ItemStore;
use stockroom_core::{Item, NewItem};

const INSERT_ITEM: &str = "INSERT INTO items (name, price, quantity) VALUES (?1, ?2, ?3)";

/// Repository for item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ItemRepository::new(pool);
///
/// let saved = repo.save_all(seed_items()).await?;
/// let all = repo.find_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    /// Creates a new ItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ItemRepository { pool }
    }

    /// Inserts a single item.
    ///
    /// ## Returns
    /// * `Ok(Item)` - The item with its database-assigned id
    pub async fn save(&self, item: &NewItem) -> DbResult<Item> {
        debug!(name = %item.name, "Inserting item");

        let result = sqlx::query(INSERT_ITEM)
            .bind(&item.name)
            .bind(item.price)
            .bind(item.quantity)
            .execute(&self.pool)
            .await?;

        Ok(Item::from_new(result.last_insert_rowid(), item.clone()))
    }

    /// Inserts all items in one transaction.
    ///
    /// If any insert fails the transaction is dropped without commit, so
    /// none of the batch is stored.
    ///
    /// ## Returns
    /// * `Ok(Vec<Item>)` - Saved items in input order, with assigned ids
    pub async fn save_all(&self, items: Vec<NewItem>) -> DbResult<Vec<Item>> {
        debug!(count = items.len(), "Inserting item batch");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let mut saved = Vec::with_capacity(items.len());
        for item in items {
            let result = sqlx::query(INSERT_ITEM)
                .bind(&item.name)
                .bind(item.price)
                .bind(item.quantity)
                .execute(&mut *tx)
                .await?;

            saved.push(Item::from_new(result.last_insert_rowid(), item));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        debug!(count = saved.len(), "Item batch committed");
        Ok(saved)
    }

    /// Lists every item, ordered by id (insertion order).
    pub async fn find_all(&self) -> DbResult<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, price, quantity
            FROM items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Loaded items");
        Ok(items)
    }

    /// Gets an item by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Item))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Item>> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, price, quantity
            FROM items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Gets an item by its id, failing when it does not exist.
    pub async fn get(&self, id: i64) -> DbResult<Item> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::not_found("Item", id))
    }

    /// Counts stored items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Deletes every item. Returns the number of rows removed.
    pub async fn delete_all(&self) -> DbResult<u64> {
        debug!("Deleting all items");

        let result = sqlx::query("DELETE FROM items")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ItemStore for ItemRepository {
    async fn save_all(&self, items: Vec<NewItem>) -> DbResult<Vec<Item>> {
        ItemRepository::save_all(self, items).await
    }

    async fn find_all(&self) -> DbResult<Vec<Item>> {
        ItemRepository::find_all(self).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
