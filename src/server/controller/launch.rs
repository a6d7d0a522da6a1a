//! Launch listing, scheduling and abort endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, OkDto},
        launch::{CreateLaunchDto, LaunchDto},
    },
    server::{
        error::{launch::LaunchError, Error},
        model::app::AppState,
        service::launch::{LaunchService, NewLaunch},
        util::{pagination::paginate, time::parse_launch_date},
    },
};

/// OpenAPI tag of the launch endpoints
pub static LAUNCH_TAG: &str = "launch";

/// Raw pagination query, normalized by [`paginate`]
#[derive(Deserialize, utoipa::IntoParams)]
pub struct PaginationParams {
    /// Page number starting at 1
    pub page: Option<String>,
    /// Launches per page, 0 or none returns every launch
    pub limit: Option<String>,
}

/// Get launches ordered by flight number
///
/// Invalid page or limit values fall back to the first page without a limit.
#[utoipa::path(
    get,
    path = "/v1/launches",
    tag = LAUNCH_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Success when retrieving launches", body = Vec<LaunchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_launches(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, Error> {
    let launch_service = LaunchService::new(&state.db);

    let pagination = paginate(params.page.as_deref(), params.limit.as_deref());
    let launches = launch_service.list(pagination).await?;

    Ok((StatusCode::OK, Json(launches)))
}

/// Schedule a new launch to a habitable planet
///
/// The launch receives the next flight number and is upcoming until aborted.
///
/// # Responses
/// - 201 (Created): The scheduled launch
/// - 400 (Bad Request): The body isn't a JSON launch submission, a property is missing, the
///   launch date is invalid or no habitable planet matches the target
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    post,
    path = "/v1/launches",
    tag = LAUNCH_TAG,
    request_body = CreateLaunchDto,
    responses(
        (status = 201, description = "Launch scheduled", body = LaunchDto),
        (status = 400, description = "Missing property, invalid launch date or unknown target", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_launch(
    State(state): State<AppState>,
    payload: Result<Json<CreateLaunchDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let launch_service = LaunchService::new(&state.db);

    let Json(payload) = payload?;
    let new_launch = validate_launch(payload)?;
    let launch = launch_service.schedule(new_launch).await?;

    Ok((StatusCode::CREATED, Json(launch)))
}

/// Abort a launch by flight number
///
/// # Responses
/// - 200 (OK): The launch was aborted
/// - 400 (Bad Request): The launch was already aborted
/// - 404 (Not Found): No launch has this flight number
/// - 500 (Internal Server Error): A database error occurred
#[utoipa::path(
    delete,
    path = "/v1/launches/{id}",
    tag = LAUNCH_TAG,
    params(
        ("id" = String, Path, description = "Flight number of the launch")
    ),
    responses(
        (status = 200, description = "Launch aborted", body = OkDto),
        (status = 400, description = "Launch not aborted", body = ErrorDto),
        (status = 404, description = "Launch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_launch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let launch_service = LaunchService::new(&state.db);

    // A flight number that doesn't parse can't exist
    let Ok(flight_number) = id.trim().parse::<i64>() else {
        return Err(LaunchError::NotFound(id).into());
    };

    if !launch_service.exists(flight_number).await? {
        return Err(LaunchError::NotFound(id).into());
    }

    if !launch_service.abort(flight_number).await? {
        return Err(LaunchError::NotAborted(flight_number).into());
    }

    Ok((StatusCode::OK, Json(OkDto { ok: true })))
}

/// Checks every required property is present and non-empty, then parses the launch date
fn validate_launch(payload: CreateLaunchDto) -> Result<NewLaunch, LaunchError> {
    fn required(value: Option<String>) -> Result<String, LaunchError> {
        value
            .filter(|v| !v.trim().is_empty())
            .ok_or(LaunchError::MissingProperty)
    }

    let mission = required(payload.mission)?;
    let rocket = required(payload.rocket)?;
    let launch_date = required(payload.launch_date)?;
    let target = required(payload.target)?;

    let launch_date = parse_launch_date(&launch_date)?;

    Ok(NewLaunch {
        mission,
        rocket,
        launch_date,
        target,
    })
}
