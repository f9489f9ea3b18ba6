//! Fuel record model
//!
//! One row of the `bbms` table.

use serde::{Deserialize, Serialize, Serializer};

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Writes whole quantities as JSON integers (`10`, not `10.0`) so clients
/// decoding into integer fields accept them; fractions stay floats.
fn serialize_quantity<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// A stored fuel record.
///
/// `id` is assigned by storage on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FuelRecord {
    /// Primary key (`bbmid` column)
    pub id: i64,
    /// Total liters
    #[serde(serialize_with = "serialize_quantity")]
    pub jumlah_liter: f64,
    /// Quantity of the premium grade
    #[serde(serialize_with = "serialize_quantity")]
    pub premium: f64,
    /// Quantity of the pertalite grade
    #[serde(serialize_with = "serialize_quantity")]
    pub pertalite: f64,
}

impl FuelRecord {
    /// Builds a record from a storage-assigned id and the submitted values.
    pub fn from_input(id: i64, input: &crate::models::FuelInput) -> Self {
        Self {
            id,
            jumlah_liter: input.jumlah_liter,
            premium: input.premium,
            pertalite: input.pertalite,
        }
    }
}
