//! Error types for the Mission Control server.
//!
//! This module provides the error handling system with specialized error types for each
//! concern (configuration, launch scheduling, startup seeding). All errors implement
//! `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic error definitions
//! with automatic `Display` and `Error` trait implementations.

pub mod config;
pub mod launch;
pub mod seed;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, launch::LaunchError, seed::SeedError},
};

/// Main error type for the Mission Control server.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Launch errors (validation, unknown planet, unknown or unchanged launch)
/// - Seeding errors (launch history download, planet catalog source)
/// - External library errors (database, HTTP client, CSV parsing, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Launch domain error (validation, referential checks, abort outcome).
    #[error(transparent)]
    LaunchError(#[from] LaunchError),
    /// Startup seeding error (launch history download, catalog source).
    #[error(transparent)]
    SeedError(#[from] SeedError),
    /// Request body rejected before reaching a handler (not JSON, wrong field types).
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client error (launch history request or response decoding).
    #[error(transparent)]
    HttpError(#[from] reqwest::Error),
    /// Planet catalog parse error (malformed row, invalid field value).
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Most errors are treated as internal server errors (500) with logging, while `LaunchError`
/// carries its own client-facing mapping.
///
/// # Returns
/// - 400 Bad Request - For malformed request bodies, invalid launch submissions and launches
///   that could not be aborted
/// - 404 Not Found - For launches that do not exist
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::LaunchError(err) => err.into_response(),
            Self::SeedError(err) => err.into_response(),
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Invalid request body".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
