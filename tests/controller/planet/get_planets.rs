use axum::{extract::State, http::StatusCode};
use mission_control::server::controller::planet::get_planets;
use serde_json::json;

use super::*;

/// Expect 200 with every stored planet by Kepler name
#[tokio::test]
async fn returns_stored_planets() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .with_mock_planet("Kepler-62 f")
        .with_mock_planet("Kepler-442 b")
        .build()
        .await?;

    let result = get_planets(State(test.app_state())).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "keplerName": "Kepler-62 f" }, { "keplerName": "Kepler-442 b" }])
    );

    Ok(())
}

/// Expect 200 with an empty array when no planets are stored
#[tokio::test]
async fn returns_empty_array_without_planets() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Planet)?;

    let result = get_planets(State(test.app_state())).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    Ok(())
}

/// Expect 500 when the planet table is missing
#[tokio::test]
async fn fails_without_table() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_planets(State(test.app_state())).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Internal server error" }));

    Ok(())
}
