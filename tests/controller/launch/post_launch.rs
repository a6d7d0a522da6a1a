use axum::{extract::State, http::StatusCode, Json};
use mission_control::{
    model::launch::CreateLaunchDto,
    server::{controller::launch::post_launch, data::launch::LaunchRepository, util::pagination::Pagination},
};
use serde_json::json;

use super::*;

fn enterprise() -> CreateLaunchDto {
    CreateLaunchDto {
        mission: Some("USS Enterprise".to_string()),
        rocket: Some("NCC 1701-D".to_string()),
        launch_date: Some("January 17, 2030".to_string()),
        target: Some("Kepler-62 f".to_string()),
    }
}

/// Expect 201 with the scheduled launch for a valid submission
#[tokio::test]
async fn schedules_launch() -> Result<(), TestError> {
    let test = setup().await?;

    let result = post_launch(State(test.app_state()), Ok(Json(enterprise()))).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "flightNumber": 101,
            "launchDate": "2030-01-17T00:00:00Z",
            "mission": "USS Enterprise",
            "rocket": "NCC 1701-D",
            "target": "Kepler-62 f",
            "customers": ["Zero to Mastery", "NASA"],
            "upcoming": true,
            "success": true
        })
    );

    Ok(())
}

/// Expect the next submission to receive the following flight number
#[tokio::test]
async fn assigns_sequential_flight_numbers() -> Result<(), TestError> {
    let test = setup().await?;

    let first = post_launch(State(test.app_state()), Ok(Json(enterprise()))).await;
    let second = post_launch(State(test.app_state()), Ok(Json(enterprise()))).await;

    let (_, first) = read_json(into_response(first)).await;
    let (_, second) = read_json(into_response(second)).await;
    assert_eq!(first["flightNumber"], 101);
    assert_eq!(second["flightNumber"], 102);

    Ok(())
}

/// Expect 400 and nothing stored when a required property is missing
#[tokio::test]
async fn rejects_missing_property() -> Result<(), TestError> {
    let test = setup().await?;

    for payload in [
        CreateLaunchDto {
            mission: None,
            ..enterprise()
        },
        CreateLaunchDto {
            rocket: Some(String::new()),
            ..enterprise()
        },
        CreateLaunchDto {
            launch_date: None,
            ..enterprise()
        },
        CreateLaunchDto {
            target: None,
            ..enterprise()
        },
    ] {
        let result = post_launch(State(test.app_state()), Ok(Json(payload))).await;

        let (status, body) = read_json(into_response(result)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing required launch property" }));
    }

    let launch_repo = LaunchRepository::new(&test.db);
    assert!(launch_repo.get_page(Pagination::default()).await?.is_empty());

    Ok(())
}

/// Expect 400 and nothing stored when the launch date can't be parsed
#[tokio::test]
async fn rejects_invalid_launch_date() -> Result<(), TestError> {
    let test = setup().await?;

    let payload = CreateLaunchDto {
        launch_date: Some("zoot".to_string()),
        ..enterprise()
    };
    let result = post_launch(State(test.app_state()), Ok(Json(payload))).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid launch date" }));

    let launch_repo = LaunchRepository::new(&test.db);
    assert!(launch_repo.get_page(Pagination::default()).await?.is_empty());

    Ok(())
}

/// Expect 400 when the target isn't a habitable planet
#[tokio::test]
async fn rejects_unknown_target() -> Result<(), TestError> {
    let test = setup().await?;

    let payload = CreateLaunchDto {
        target: Some("Kepler-186 f".to_string()),
        ..enterprise()
    };
    let result = post_launch(State(test.app_state()), Ok(Json(payload))).await;

    let (status, body) = read_json(into_response(result)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "No matching planet found" }));

    Ok(())
}
