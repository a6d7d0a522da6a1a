//! Launch history provider client.

use chrono::{DateTime, FixedOffset};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use crate::server::error::{seed::SeedError, Error};

/// Client for the launch history provider's bulk query endpoint.
///
/// The endpoint accepts a query document and returns a page of launch documents. The
/// client always requests every record in a single page with the rocket and payload
/// relations populated, so a single request yields the complete history.
#[derive(Clone)]
pub struct LaunchHistoryClient {
    http: reqwest::Client,
    url: String,
}

/// A page of results returned by the bulk query endpoint
#[derive(Debug, Deserialize)]
pub struct LaunchQueryPage {
    /// Launch documents of the page
    pub docs: Vec<LaunchDoc>,
}

/// A launch document as returned by the provider
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchDoc {
    /// Sequential flight number, unique per launch
    pub flight_number: i64,
    /// Mission name
    pub name: String,
    /// Rocket that flew the mission
    pub rocket: RocketDoc,
    /// Launch time at the launch site, with its offset
    pub date_local: DateTime<FixedOffset>,
    /// Whether the launch has yet to happen
    pub upcoming: bool,
    /// Null for launches that haven't happened yet
    pub success: Option<bool>,
    /// Payloads carried, empty when none are listed
    #[serde(default)]
    pub payloads: Vec<PayloadDoc>,
}

/// Populated rocket relation, only the name is selected
#[derive(Debug, Clone, Deserialize)]
pub struct RocketDoc {
    /// Rocket name
    pub name: String,
}

/// Populated payload relation, only the customers are selected
#[derive(Debug, Clone, Deserialize)]
pub struct PayloadDoc {
    /// Customers of the payload
    #[serde(default)]
    pub customers: Vec<String>,
}

impl LaunchHistoryClient {
    /// Creates a new instance of [`LaunchHistoryClient`]
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `url` - Full URL of the bulk query endpoint
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Fetches every launch the provider knows about in a single unpaginated request
    ///
    /// # Returns
    /// - `Ok(Vec<LaunchDoc>)` - Launch documents in the provider's order
    /// - `Err(Error::SeedError)` - Provider responded with a non-200 status
    /// - `Err(Error::HttpError)` - Request failed or the response body could not be decoded
    pub async fn query_all(&self) -> Result<Vec<LaunchDoc>, Error> {
        let query = json!({
            "query": {},
            "options": {
                "pagination": false,
                "populate": [
                    { "path": "rocket", "select": { "name": 1 } },
                    { "path": "payloads", "select": { "customers": 1 } }
                ]
            }
        });

        let response = self.http.post(&self.url).json(&query).send().await?;

        if response.status() != StatusCode::OK {
            return Err(SeedError::LaunchHistoryStatus(response.status().as_u16()).into());
        }

        let page: LaunchQueryPage = response.json().await?;

        Ok(page.docs)
    }
}

impl LaunchDoc {
    /// Customers of every payload flattened into one list, payload order preserved
    pub fn customers(&self) -> Vec<String> {
        self.payloads
            .iter()
            .flat_map(|payload| payload.customers.iter().cloned())
            .collect()
    }
}
