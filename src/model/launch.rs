use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A launch as exposed by the API, keyed by its flight number
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LaunchDto {
    pub flight_number: i64,
    pub launch_date: DateTime<Utc>,
    pub mission: String,
    pub rocket: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub customers: Vec<String>,
    pub upcoming: bool,
    pub success: bool,
}

/// Request body for scheduling a new launch
///
/// Every field is optional at the deserialization level so that missing
/// properties are reported with a domain error rather than a JSON rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLaunchDto {
    pub mission: Option<String>,
    pub rocket: Option<String>,
    /// Launch date, e.g. `2028-01-04` or `January 4, 2028`
    pub launch_date: Option<String>,
    /// Kepler name of the destination planet
    pub target: Option<String>,
}
