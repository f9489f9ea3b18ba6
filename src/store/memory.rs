//! In-memory store
//!
//! Process-local fuel store used for local runs and tests. Ids are handed
//! out sequentially starting at 1, so storage order is insertion order.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{FuelStore, StoreResult};
use crate::models::{FuelInput, FuelRecord};

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<i64, FuelRecord>,
    next_id: i64,
}

// == Memory Store ==
/// Fuel store kept behind a tokio RwLock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl FuelStore for MemoryStore {
    async fn insert(&self, input: FuelInput) -> StoreResult<i64> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.records.insert(id, FuelRecord::from_input(id, &input));

        info!("Inserted a single record {}", id);
        Ok(id)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<FuelRecord>> {
        Ok(self.inner.read().await.records.get(&id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<FuelRecord>> {
        Ok(self.inner.read().await.records.values().cloned().collect())
    }

    async fn update(&self, id: i64, input: FuelInput) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        let rows = match inner.records.get_mut(&id) {
            Some(record) => {
                *record = FuelRecord::from_input(id, &input);
                1
            }
            None => 0,
        };

        debug!("Total rows/records affected {}", rows);
        Ok(rows)
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let removed = self.inner.write().await.records.remove(&id);
        let rows = u64::from(removed.is_some());

        debug!("Total rows/records affected {}", rows);
        Ok(rows)
    }
}
