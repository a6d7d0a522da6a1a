use mockito::Mock;
use sea_orm::ActiveModelTrait;
use serde_json::{json, Value};

use crate::{
    constant::LAUNCH_QUERY_PATH,
    fixtures::{factory, LaunchFixtures},
    TestError,
};

impl<'a> LaunchFixtures<'a> {
    /// Insert an upcoming mock launch with the provided flight number.
    pub async fn insert_mock_launch(
        &self,
        flight_number: i64,
    ) -> Result<entity::launch::Model, TestError> {
        self.insert_launch(factory::mock_launch(flight_number)).await
    }

    /// Insert an arbitrary launch.
    pub async fn insert_launch(
        &self,
        launch: entity::launch::ActiveModel,
    ) -> Result<entity::launch::Model, TestError> {
        Ok(launch.insert(&self.setup.db).await?)
    }

    /// Create a mock HTTP endpoint for the launch history bulk query.
    ///
    /// Sets up a mock POST endpoint at [`LAUNCH_QUERY_PATH`] that returns the provided
    /// documents as a single page. The mock verifies it was called exactly
    /// `expected_requests` times.
    ///
    /// # Arguments
    /// - `docs` - Launch documents to return, see [`factory::mock_launch_doc`]
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_launch_history_endpoint(
        &mut self,
        docs: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let total = docs.len();
        let body = json!({
            "docs": docs,
            "totalDocs": total,
            "offset": 0,
            "limit": total,
            "totalPages": 1,
            "page": 1,
            "pagingCounter": 1,
            "hasPrevPage": false,
            "hasNextPage": false,
            "prevPage": null,
            "nextPage": null
        });

        self.setup
            .server
            .mock("POST", LAUNCH_QUERY_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint for the launch history bulk query that fails.
    ///
    /// # Arguments
    /// - `status` - HTTP status code to respond with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_launch_history_failure_endpoint(
        &mut self,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", LAUNCH_QUERY_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "Service unavailable" }).to_string())
            .expect(expected_requests)
            .create()
    }
}
