//! Response DTOs for the bbm API
//!
//! Defines the structure of outgoing HTTP response bodies. Records are
//! returned as [`FuelRecord`](crate::models::FuelRecord) directly.

use serde::{Deserialize, Serialize};

/// Response body for create, update and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Id of the created or targeted record
    pub id: i64,
    /// Human readable outcome
    pub message: String,
}

impl MutationResponse {
    /// Response for a freshly inserted record.
    pub fn created(id: i64) -> Self {
        Self {
            id,
            message: "Created Succesfully".to_string(),
        }
    }

    /// Response for an update, reporting rows affected.
    pub fn updated(id: i64, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "BBM updated successfully. total rows/records affected {}",
                rows_affected
            ),
        }
    }

    /// Response for a delete, reporting rows affected.
    pub fn deleted(id: i64, rows_affected: u64) -> Self {
        Self {
            id,
            message: format!(
                "BBM deleted successfully. total rows/records affected {}",
                rows_affected
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_serialize() {
        let json = serde_json::to_string(&MutationResponse::created(1)).unwrap();
        assert_eq!(json, r#"{"id":1,"message":"Created Succesfully"}"#);
    }

    #[test]
    fn test_updated_response_reports_rows() {
        let resp = MutationResponse::updated(3, 0);
        assert_eq!(resp.id, 3);
        assert!(resp.message.ends_with("affected 0"));
    }

    #[test]
    fn test_deleted_response_reports_rows() {
        let resp = MutationResponse::deleted(4, 1);
        assert!(resp.message.contains("deleted"));
        assert!(resp.message.ends_with("affected 1"));
    }
}
