//! bbm API - A small HTTP CRUD service for fuel records
//!
//! Exposes create/read/update/delete routes for one resource backed by a
//! PostgreSQL table.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
