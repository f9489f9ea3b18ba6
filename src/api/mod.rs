//! API Module
//!
//! HTTP handlers and routing for the bbm REST API.
//!
//! # Endpoints
//! - `POST /api/newbbm` - Create a record
//! - `GET /api/bbm/:id` - Fetch one record
//! - `GET /api/bbm` - List all records
//! - `PUT /api/bbm/:id` - Update a record
//! - `DELETE /api/bbm/:id` - Delete a record

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
