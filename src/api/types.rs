// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FillResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Whether the password was part of the submission and got stored
    pub filled: bool,
    /// Stored credential (only present when filled)
    pub value: Option<String>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}
