mod delete_launch;
mod get_launches;
mod post_launch;

use super::*;

/// Builds a context with the planet and launch tables and one habitable planet
async fn setup() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_table(entity::prelude::Planet)
        .with_table(entity::prelude::Launch)
        .with_mock_planet("Kepler-62 f")
        .build()
        .await
}
