use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use mission_control::server::{controller::launch::delete_launch, data::launch::LaunchRepository};
use serde_json::json;

use super::*;

/// Expect 200 and an aborted launch for an upcoming launch
#[tokio::test]
async fn aborts_upcoming_launch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .with_mock_launch(101)
        .build()
        .await?;

    let result = delete_launch(State(test.app_state()), Path("101".to_string())).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let launch = LaunchRepository::new(&test.db)
        .find_by_flight_number(101)
        .await?
        .unwrap();
    assert!(!launch.upcoming);
    assert!(!launch.success);

    Ok(())
}

/// Expect 400 when aborting an already aborted launch
#[tokio::test]
async fn rejects_second_abort() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Launch)
        .with_mock_launch(101)
        .build()
        .await?;

    let first = delete_launch(State(test.app_state()), Path("101".to_string())).await;
    let second = delete_launch(State(test.app_state()), Path("101".to_string())).await;

    let (status, _) = read_json(into_response(first)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = read_json(into_response(second)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Launch not aborted" }));

    Ok(())
}

/// Expect 404 for an unknown flight number
#[tokio::test]
async fn returns_not_found_for_unknown_launch() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Launch)?;

    let result = delete_launch(State(test.app_state()), Path("999".to_string())).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Launch not found" }));

    Ok(())
}

/// Expect 404 when the id isn't a number
#[tokio::test]
async fn returns_not_found_for_non_numeric_id() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Launch)?;

    let result = delete_launch(State(test.app_state()), Path("abc".to_string())).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Launch not found" }));

    Ok(())
}
