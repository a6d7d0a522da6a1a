//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI specification. Swagger UI is
//! served at `/v1/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the API router with all endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /v1/planets` - List habitable planets
/// - `GET /v1/launches` - List launches, optionally paginated
/// - `POST /v1/launches` - Schedule a launch
/// - `DELETE /v1/launches/{id}` - Abort a launch
///
/// The OpenAPI specification is available at `/v1/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Mission Control", description = "Mission Control API"), tags(
        (name = controller::planet::PLANET_TAG, description = "Habitable planet API routes"),
        (name = controller::launch::LAUNCH_TAG, description = "Launch scheduling API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(
            controller::launch::get_launches,
            controller::launch::post_launch
        ))
        .routes(routes!(controller::launch::delete_launch))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/v1/docs").url("/v1/docs/openapi.json", api))
}
