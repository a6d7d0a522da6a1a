//! Startup seeding errors.

use std::path::PathBuf;

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Failures that abort startup seeding.
#[derive(Error, Debug)]
pub enum SeedError {
    /// The launch history provider responded with a non-200 status
    #[error("Launch data download failed with status {0}")]
    LaunchHistoryStatus(u16),
    /// The planet catalog file couldn't be opened
    #[error("Failed to open planet catalog at {path:?}: {source}")]
    CatalogUnreadable {
        /// Configured catalog path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for SeedError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
