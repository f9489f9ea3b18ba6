//! Request DTOs for the bbm API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for create (POST /api/newbbm) and update (PUT /api/bbm/:id)
///
/// An `id` key in the body is ignored; the id comes from storage on create
/// and from the path on update. Missing quantities default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct FuelInput {
    /// Total liters
    #[serde(default)]
    pub jumlah_liter: f64,
    /// Quantity of the premium grade
    #[serde(default)]
    pub premium: f64,
    /// Quantity of the pertalite grade
    #[serde(default)]
    pub pertalite: f64,
}

impl FuelInput {
    /// Creates a new FuelInput
    pub fn new(jumlah_liter: f64, premium: f64, pertalite: f64) -> Self {
        Self {
            jumlah_liter,
            premium,
            pertalite,
        }
    }
}
