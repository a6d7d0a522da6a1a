//! Habitable planet endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{error::Error, model::app::AppState, service::planet::PlanetService},
};

/// OpenAPI tag of the planet endpoints
pub static PLANET_TAG: &str = "planet";

/// Get every habitable planet
#[utoipa::path(
    get,
    path = "/v1/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving habitable planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planets = planet_service.get_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}
