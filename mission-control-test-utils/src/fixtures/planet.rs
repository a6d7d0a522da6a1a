use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{fixtures::PlanetFixtures, TestError};

impl<'a> PlanetFixtures<'a> {
    /// Insert a planet with the provided Kepler name.
    pub async fn insert_mock_planet(
        &self,
        kepler_name: &str,
    ) -> Result<entity::planet::Model, TestError> {
        let planet = entity::planet::ActiveModel {
            kepler_name: ActiveValue::Set(kepler_name.to_string()),
            ..Default::default()
        };

        Ok(planet.insert(&self.setup.db).await?)
    }
}
