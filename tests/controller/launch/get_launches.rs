use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use mission_control::server::controller::launch::{get_launches, PaginationParams};
use serde_json::Value;

use super::*;

async fn setup_launches() -> Result<TestContext, TestError> {
    let mut builder = TestBuilder::new().with_table(entity::prelude::Launch);
    for flight_number in [105, 101, 103, 102, 104] {
        builder = builder.with_mock_launch(flight_number);
    }

    builder.build().await
}

fn params(page: Option<&str>, limit: Option<&str>) -> Query<PaginationParams> {
    Query(PaginationParams {
        page: page.map(str::to_string),
        limit: limit.map(str::to_string),
    })
}

fn flight_numbers(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|launch| launch["flightNumber"].as_i64().unwrap())
        .collect()
}

/// Expect every launch in ascending flight number order without pagination
#[tokio::test]
async fn returns_all_launches_in_order() -> Result<(), TestError> {
    let test = setup_launches().await?;

    let result = get_launches(State(test.app_state()), params(None, None)).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flight_numbers(&body), vec![101, 102, 103, 104, 105]);

    Ok(())
}

/// Expect page 2 with limit 2 to return the third and fourth launch
#[tokio::test]
async fn returns_requested_page() -> Result<(), TestError> {
    let test = setup_launches().await?;

    let result = get_launches(State(test.app_state()), params(Some("2"), Some("2"))).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flight_numbers(&body), vec![103, 104]);

    Ok(())
}

/// Expect negative values to be used as their absolute value
#[tokio::test]
async fn uses_absolute_values() -> Result<(), TestError> {
    let test = setup_launches().await?;

    let result = get_launches(State(test.app_state()), params(Some("-2"), Some("-3"))).await;

    let (_, body) = read_json(into_response(result)).await;
    assert_eq!(flight_numbers(&body), vec![104, 105]);

    Ok(())
}

/// Expect unusable values to fall back to every launch
#[tokio::test]
async fn ignores_invalid_values() -> Result<(), TestError> {
    let test = setup_launches().await?;

    let result = get_launches(State(test.app_state()), params(Some("abc"), Some(""))).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flight_numbers(&body).len(), 5);

    Ok(())
}
