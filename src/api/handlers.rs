//! API Handlers
//!
//! HTTP request handlers for each bbm endpoint. Body and path extraction
//! failures are turned into 400 responses here instead of axum's defaults.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::debug;

use crate::config::{Config, StorageBackend};
use crate::error::{ApiError, Result};
use crate::models::{FuelInput, FuelRecord, MutationResponse};
use crate::store::{FuelStore, MemoryStore, PgStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Data-access layer
    pub store: Arc<dyn FuelStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: impl FuelStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Connects the PostgreSQL pool when that backend is selected. A missing
    /// connection string surfaces as a [`ConfigError`](crate::config::ConfigError).
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        match config.storage {
            StorageBackend::Memory => Ok(Self::new(MemoryStore::new())),
            StorageBackend::Postgres => {
                let url = config.require_database_url()?;
                let store = PgStore::connect(url, config.max_connections).await?;
                Ok(Self::new(store))
            }
        }
    }
}

fn body_input(body: std::result::Result<Json<FuelInput>, JsonRejection>) -> Result<FuelInput> {
    body.map(|Json(input)| input).map_err(|e| {
        ApiError::InvalidRequest(format!(
            "Unable to decode the request body: {}",
            e.body_text()
        ))
    })
}

fn path_id(id: std::result::Result<Path<i64>, PathRejection>) -> Result<i64> {
    id.map(|Path(id)| id)
        .map_err(|e| ApiError::InvalidRequest(format!("Unable to parse id: {}", e.body_text())))
}

/// Handler for POST /api/newbbm
///
/// Inserts a new record; storage assigns the id.
pub async fn create_handler(
    State(state): State<AppState>,
    body: std::result::Result<Json<FuelInput>, JsonRejection>,
) -> Result<Json<MutationResponse>> {
    let input = body_input(body)?;
    let id = state.store.insert(input).await?;

    Ok(Json(MutationResponse::created(id)))
}

/// Handler for GET /api/bbm/:id
///
/// Returns 404 when no record has the id.
pub async fn get_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<FuelRecord>> {
    let id = path_id(id)?;
    let record = state.store.get(id).await?.ok_or(ApiError::NotFound(id))?;

    Ok(Json(record))
}

/// Handler for GET /api/bbm
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<FuelRecord>>> {
    let records = state.store.list().await?;
    debug!("Listing {} records", records.len());

    Ok(Json(records))
}

/// Handler for PUT /api/bbm/:id
///
/// Rewrites every quantity field. An unknown id affects zero rows and is
/// still a success.
pub async fn update_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    body: std::result::Result<Json<FuelInput>, JsonRejection>,
) -> Result<Json<MutationResponse>> {
    let id = path_id(id)?;
    let input = body_input(body)?;
    let rows = state.store.update(id, input).await?;

    Ok(Json(MutationResponse::updated(id, rows)))
}

/// Handler for DELETE /api/bbm/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<MutationResponse>> {
    let id = path_id(id)?;
    let rows = state.store.delete(id).await?;

    Ok(Json(MutationResponse::deleted(id, rows)))
}
