//! Launch scheduling and launch history import.

mod import;

#[cfg(test)]
mod tests;

pub use import::SeedOutcome;

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::launch::LaunchDto,
    server::{
        data::{launch::LaunchRepository, planet::PlanetRepository},
        error::{launch::LaunchError, Error},
        util::pagination::Pagination,
    },
};

/// Flight number treated as the latest when no launches are stored
pub static DEFAULT_FLIGHT_NUMBER: i64 = 100;
/// Customers of every newly scheduled launch
pub static DEFAULT_CUSTOMERS: [&str; 2] = ["Zero to Mastery", "NASA"];
/// Attempts at claiming a flight number before giving up
pub static MAX_SCHEDULE_ATTEMPTS: usize = 5;

/// A validated request to schedule a launch
#[derive(Clone, Debug)]
pub struct NewLaunch {
    /// Mission name
    pub mission: String,
    /// Rocket name
    pub rocket: String,
    /// Scheduled launch time
    pub launch_date: DateTime<Utc>,
    /// Kepler name of the destination planet
    pub target: String,
}

/// Launch scheduling, abort and history import
pub struct LaunchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LaunchService<'a> {
    /// Creates a new instance of [`LaunchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether a launch is stored under the flight number
    pub async fn exists(&self, flight_number: i64) -> Result<bool, Error> {
        let launch_repo = LaunchRepository::new(self.db);

        let launch = launch_repo.find_by_flight_number(flight_number).await?;

        Ok(launch.is_some())
    }

    /// Launches ordered by flight number, see [`Pagination`] for paging rules
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<LaunchDto>, Error> {
        let launch_repo = LaunchRepository::new(self.db);

        let launches = launch_repo.get_page(pagination).await?;

        Ok(launches.into_iter().map(LaunchDto::from).collect())
    }

    /// Schedules a launch under the next free flight number
    ///
    /// The flight number is the latest stored one plus one. If a concurrent request claims
    /// the same number first, the unique index rejects the insert and the latest number is
    /// read again.
    ///
    /// # Returns
    /// - `Ok(LaunchDto)` - The stored launch, upcoming with the default customers
    /// - `Err(Error::LaunchError(LaunchError::PlanetNotFound))` - No planet matches the target
    /// - `Err(Error::LaunchError(LaunchError::FlightNumberContention))` - Every attempt
    ///   collided with another launch
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn schedule(&self, launch: NewLaunch) -> Result<LaunchDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);
        let launch_repo = LaunchRepository::new(self.db);

        if planet_repo
            .find_by_kepler_name(&launch.target)
            .await?
            .is_none()
        {
            return Err(LaunchError::PlanetNotFound(launch.target).into());
        }

        for attempt in 1..=MAX_SCHEDULE_ATTEMPTS {
            let latest = launch_repo
                .get_latest_flight_number()
                .await?
                .unwrap_or(DEFAULT_FLIGHT_NUMBER);
            let flight_number = latest + 1;

            let new_launch = LaunchDto {
                flight_number,
                launch_date: launch.launch_date,
                mission: launch.mission.clone(),
                rocket: launch.rocket.clone(),
                target: Some(launch.target.clone()),
                customers: DEFAULT_CUSTOMERS.iter().map(|c| c.to_string()).collect(),
                upcoming: true,
                success: true,
            };

            match launch_repo.create(new_launch).await {
                Ok(created) => {
                    tracing::info!(
                        flight_number = %created.flight_number,
                        mission = %created.mission,
                        "Scheduled launch"
                    );

                    return Ok(created.into());
                }
                Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                    tracing::warn!(
                        flight_number = %flight_number,
                        attempt = %attempt,
                        "Flight number claimed by another launch, retrying"
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(LaunchError::FlightNumberContention(MAX_SCHEDULE_ATTEMPTS).into())
    }

    /// Marks a launch as aborted
    ///
    /// # Returns
    /// - `Ok(true)` - The launch was modified
    /// - `Ok(false)` - No launch matched or it was already aborted
    pub async fn abort(&self, flight_number: i64) -> Result<bool, Error> {
        let launch_repo = LaunchRepository::new(self.db);

        let modified = launch_repo.abort(flight_number).await?;

        Ok(modified == 1)
    }
}
