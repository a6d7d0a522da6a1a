//! Launch request errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Failures of launch scheduling and abort requests
#[derive(Error, Debug)]
pub enum LaunchError {
    /// A required property is absent or blank, 400
    #[error("Launch submission is missing one of mission, rocket, launchDate or target")]
    MissingProperty,
    /// The launch date matches no accepted format, 400
    #[error("Launch date {0:?} could not be parsed")]
    InvalidLaunchDate(String),
    /// The target isn't a stored habitable planet, 400
    #[error("No planet named {0:?} exists to target")]
    PlanetNotFound(String),
    /// No launch has the requested flight number, 404
    #[error("No launch exists with flight number {0:?}")]
    NotFound(String),
    /// The launch was already aborted, 400
    #[error("Launch with flight number {0} was not modified by abort")]
    NotAborted(i64),
    /// Every attempt to claim a flight number collided, 500
    #[error("Failed to allocate a flight number after {0} attempts due to concurrent launches")]
    FlightNumberContention(usize),
}

impl LaunchError {
    fn bad_request(message: &str) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for LaunchError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingProperty => {
                tracing::debug!("{}", self);

                Self::bad_request("Missing required launch property")
            }
            Self::InvalidLaunchDate(_) => {
                tracing::debug!("{}", self);

                Self::bad_request("Invalid launch date")
            }
            Self::PlanetNotFound(_) => {
                tracing::debug!("{}", self);

                Self::bad_request("No matching planet found")
            }
            Self::NotFound(_) => {
                tracing::debug!("{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Launch not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotAborted(flight_number) => {
                tracing::debug!(flight_number = %flight_number, "{}", self);

                Self::bad_request("Launch not aborted")
            }
            Self::FlightNumberContention(_) => InternalServerError(self).into_response(),
        }
    }
}
