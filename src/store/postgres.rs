//! PostgreSQL store
//!
//! Backs the fuel store with the `bbms` table through a shared `PgPool`.
//! Reads cast columns to `BIGINT`/`DOUBLE PRECISION` so `SERIAL` and
//! `NUMERIC` columns decode into the record's types.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{debug, info};

use super::{FuelStore, StoreResult};
use crate::models::{FuelInput, FuelRecord};

const SELECT_COLUMNS: &str = "SELECT bbmid::BIGINT AS id, \
     jumlah_liter::DOUBLE PRECISION AS jumlah_liter, \
     premium::DOUBLE PRECISION AS premium, \
     pertalite::DOUBLE PRECISION AS pertalite \
     FROM bbms";

/// Create a PostgreSQL connection pool.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
///
/// # Errors
///
/// Returns an error if the initial connection fails.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

// == Pg Store ==
/// Fuel store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Wraps an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a new pool and wraps it.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = create_pool(database_url, max_connections).await?;
        info!("Connected to PostgreSQL (max_connections={})", max_connections);
        Ok(Self::new(pool))
    }

    /// Underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl FuelStore for PgStore {
    async fn insert(&self, input: FuelInput) -> StoreResult<i64> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO bbms (jumlah_liter, premium, pertalite) \
             VALUES ($1, $2, $3) RETURNING bbmid::BIGINT",
        )
        .bind(input.jumlah_liter)
        .bind(input.premium)
        .bind(input.pertalite)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted a single record {}", id);
        Ok(id)
    }

    async fn get(&self, id: i64) -> StoreResult<Option<FuelRecord>> {
        let record = sqlx::query_as::<_, FuelRecord>(&format!("{} WHERE bbmid = $1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        if record.is_none() {
            debug!("No rows were returned for bbmid {}", id);
        }
        Ok(record)
    }

    async fn list(&self) -> StoreResult<Vec<FuelRecord>> {
        let records = sqlx::query_as::<_, FuelRecord>(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn update(&self, id: i64, input: FuelInput) -> StoreResult<u64> {
        let rows = sqlx::query(
            "UPDATE bbms SET jumlah_liter = $2, premium = $3, pertalite = $4 WHERE bbmid = $1",
        )
        .bind(id)
        .bind(input.jumlah_liter)
        .bind(input.premium)
        .bind(input.pertalite)
        .execute(&self.pool)
        .await?
        .rows_affected();

        info!("Total rows/records affected {}", rows);
        Ok(rows)
    }

    async fn delete(&self, id: i64) -> StoreResult<u64> {
        let rows = sqlx::query("DELETE FROM bbms WHERE bbmid = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        info!("Total rows/records affected {}", rows);
        Ok(rows)
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL pool closed");
    }
}
