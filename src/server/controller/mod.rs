//! HTTP controller endpoints for the Mission Control API.
//!
//! Axum handlers for planets and launches. Controllers validate inputs, call into the
//! service layer and map outcomes to HTTP responses. Every handler is documented with
//! utoipa for the OpenAPI specification.

pub mod launch;
pub mod planet;
