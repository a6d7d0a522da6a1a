//! Factories for mock launches, planets and launch history documents.

use chrono::{DateTime, TimeZone, Utc};
use sea_orm::ActiveValue;
use serde_json::{json, Value};

/// Launch date used by every mock launch, 2030-12-27 00:00 UTC
pub fn mock_launch_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 12, 27, 0, 0, 0).unwrap()
}

/// An upcoming launch to a habitable planet
pub fn mock_launch(flight_number: i64) -> entity::launch::ActiveModel {
    entity::launch::ActiveModel {
        flight_number: ActiveValue::Set(flight_number),
        launch_date: ActiveValue::Set(mock_launch_date()),
        mission: ActiveValue::Set(format!("Kepler Exploration {}", flight_number)),
        rocket: ActiveValue::Set("Explorer IS1".to_string()),
        target: ActiveValue::Set(Some("Kepler-442 b".to_string())),
        customers: ActiveValue::Set(entity::launch::Customers(vec![
            "Zero to Mastery".to_string(),
            "NASA".to_string(),
        ])),
        upcoming: ActiveValue::Set(true),
        success: ActiveValue::Set(true),
        ..Default::default()
    }
}

/// The first historical launch, whose presence marks launch history as imported
pub fn mock_sentinel_launch() -> entity::launch::ActiveModel {
    entity::launch::ActiveModel {
        flight_number: ActiveValue::Set(1),
        launch_date: ActiveValue::Set(Utc.with_ymd_and_hms(2006, 3, 24, 22, 30, 0).unwrap()),
        mission: ActiveValue::Set("FalconSat".to_string()),
        rocket: ActiveValue::Set("Falcon 1".to_string()),
        target: ActiveValue::Set(None),
        customers: ActiveValue::Set(entity::launch::Customers(vec!["DARPA".to_string()])),
        upcoming: ActiveValue::Set(false),
        success: ActiveValue::Set(false),
        ..Default::default()
    }
}

/// A launch document in the shape returned by the launch history provider
pub fn mock_launch_doc(flight_number: i64, mission: &str, rocket: &str) -> Value {
    json!({
        "flight_number": flight_number,
        "name": mission,
        "rocket": { "name": rocket, "id": "5e9d0d95eda69955f709d1eb" },
        "date_local": "2006-03-25T10:30:00+12:00",
        "upcoming": false,
        "success": true,
        "payloads": [
            { "customers": ["DARPA"], "id": "5eb0e4b5b6c3bb0006eeb1e1" },
            { "customers": ["NASA", "SpaceX"], "id": "5eb0e4b5b6c3bb0006eeb1e2" }
        ],
        "id": format!("5eb87cd9ffd86e000604b3{:02}", flight_number % 100)
    })
}

/// The launch history document for the sentinel launch
pub fn mock_sentinel_launch_doc() -> Value {
    mock_launch_doc(1, "FalconSat", "Falcon 1")
}
