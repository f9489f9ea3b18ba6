//! Store Module
//!
//! Data-access layer for fuel records. Each operation maps to exactly one
//! SQL statement on the PostgreSQL backend.

mod memory;
mod postgres;

#[cfg(test)]
mod property_tests;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{FuelInput, FuelRecord};

// Re-export public types
pub use memory::MemoryStore;
pub use postgres::{create_pool, PgStore};

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Persistence operations for fuel records.
#[async_trait]
pub trait FuelStore: Send + Sync + 'static {
    /// Inserts a record and returns the storage-assigned id.
    async fn insert(&self, input: FuelInput) -> StoreResult<i64>;

    /// Looks up one record by id.
    async fn get(&self, id: i64) -> StoreResult<Option<FuelRecord>>;

    /// Returns every record in storage order.
    async fn list(&self) -> StoreResult<Vec<FuelRecord>>;

    /// Rewrites all quantity fields of `id`, returning rows affected.
    async fn update(&self, id: i64, input: FuelInput) -> StoreResult<u64>;

    /// Deletes `id`, returning rows affected.
    async fn delete(&self, id: i64) -> StoreResult<u64>;

    /// Releases backend resources during shutdown.
    async fn close(&self) {}
}
