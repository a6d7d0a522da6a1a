//! Declarative test builder.
//!
//! Queues tables, fixtures and mock endpoints, then creates all of them in `build()`.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,

    // Database fixtures to insert
    planets: Vec<String>,
    launches: Vec<entity::launch::ActiveModel>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
    launch_history_endpoints: Vec<(Vec<Value>, usize)>, // (docs, expected_requests)
    launch_history_failures: Vec<(usize, usize)>,       // (status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with nothing configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            planets: Vec::new(),
            launches: Vec::new(),
            mock_builders: Vec::new(),
            launch_history_endpoints: Vec::new(),
            launch_history_failures: Vec::new(),
        }
    }

    /// Add an entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mission_control_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), mission_control_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .with_table(Launch)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a habitable planet into the database.
    pub fn with_mock_planet(mut self, kepler_name: &str) -> Self {
        self.planets.push(kepler_name.to_string());
        self
    }

    /// Insert an upcoming launch built by [`factory::mock_launch`](crate::fixtures::factory::mock_launch).
    pub fn with_mock_launch(mut self, flight_number: i64) -> Self {
        self.launches
            .push(crate::fixtures::factory::mock_launch(flight_number));
        self
    }

    /// Insert an arbitrary launch.
    pub fn with_launch(mut self, launch: entity::launch::ActiveModel) -> Self {
        self.launches.push(launch);
        self
    }

    /// Add a mock launch history query endpoint returning the provided documents.
    ///
    /// # Arguments
    /// - `docs` - Launch documents returned as a single page
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_launch_history_endpoint(mut self, docs: Vec<Value>, expected_requests: usize) -> Self {
        self.launch_history_endpoints.push((docs, expected_requests));
        self
    }

    /// Add a mock launch history query endpoint responding with an error status.
    pub fn with_launch_history_failure(mut self, status: usize, expected_requests: usize) -> Self {
        self.launch_history_failures.push((status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mock server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables
    /// 2. Inserts planets, then launches
    /// 3. Creates mock HTTP endpoints
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::HttpError)` - HTTP client failed to build
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        setup.with_tables(self.tables).await?;

        for kepler_name in self.planets {
            setup.planet().insert_mock_planet(&kepler_name).await?;
        }

        for launch in self.launches {
            setup.launch().insert_launch(launch).await?;
        }

        // Custom endpoints first so mockito matches them ahead of the shortcuts
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (docs, expected) in self.launch_history_endpoints {
            mocks.push(setup.launch().create_launch_history_endpoint(docs, expected));
        }

        for (status, expected) in self.launch_history_failures {
            mocks.push(
                setup
                    .launch()
                    .create_launch_history_failure_endpoint(status, expected),
            );
        }

        // Keep mocks alive for the duration of the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_builder_creates_tables() {
        let result = TestBuilder::new()
            .with_table(entity::prelude::Planet)
            .with_table(entity::prelude::Launch)
            .build()
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_chains_fixtures() {
        let result = TestBuilder::new()
            .with_table(entity::prelude::Planet)
            .with_table(entity::prelude::Launch)
            .with_mock_planet("Kepler-442 b")
            .with_mock_launch(101)
            .with_launch(crate::fixtures::factory::mock_sentinel_launch())
            .with_launch_history_endpoint(Vec::new(), 0)
            .build()
            .await;
        assert!(result.is_ok());
    }
}
