//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, plus their conversions into API representations. Internal
//! row identifiers never leave this layer.

use crate::model::{launch::LaunchDto, planet::PlanetDto};

/// Type alias for the planet database model.
///
/// # Fields (from `entity::planet::Model`)
/// - `id` - Primary key, internal identifier
/// - `kepler_name` - Kepler catalog name of the planet (unique)
pub type PlanetModel = entity::planet::Model;

/// Type alias for the launch database model.
///
/// # Fields (from `entity::launch::Model`)
/// - `id` - Primary key, internal identifier
/// - `flight_number` - Externally visible flight number (unique)
/// - `launch_date` - Scheduled or historical launch date in UTC
/// - `mission` - Mission name
/// - `rocket` - Rocket name
/// - `target` - Kepler name of the destination planet (nullable)
/// - `customers` - Ordered customer names
/// - `upcoming` - Whether the launch has yet to happen
/// - `success` - Whether the launch succeeded or is expected to
pub type LaunchModel = entity::launch::Model;

impl From<PlanetModel> for PlanetDto {
    fn from(planet: PlanetModel) -> Self {
        Self {
            kepler_name: planet.kepler_name,
        }
    }
}

impl From<LaunchModel> for LaunchDto {
    fn from(launch: LaunchModel) -> Self {
        Self {
            flight_number: launch.flight_number,
            launch_date: launch.launch_date,
            mission: launch.mission,
            rocket: launch.rocket,
            target: launch.target,
            customers: launch.customers.0,
            upcoming: launch.upcoming,
            success: launch.success,
        }
    }
}
