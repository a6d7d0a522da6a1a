use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when an operation without a resource body succeeds
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OkDto {
    pub ok: bool,
}
