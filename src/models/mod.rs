//! Domain record and request/response models for the bbm API
//!
//! This module defines the fuel record itself plus the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod record;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use record::FuelRecord;
pub use requests::FuelInput;
pub use responses::MutationResponse;
