use crate::{
    model::launch::LaunchDto,
    server::{
        data::launch::LaunchRepository,
        error::Error,
        provider::launch_history::{LaunchDoc, LaunchHistoryClient},
        service::launch::LaunchService,
    },
};

/// The first historical launch, stored once launch history has been imported
static SENTINEL_FLIGHT_NUMBER: i64 = 1;
static SENTINEL_ROCKET: &str = "Falcon 1";
static SENTINEL_MISSION: &str = "FalconSat";

/// Result of [`LaunchService::ensure_seeded`]
#[derive(Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Launch history was already stored, nothing was requested
    AlreadySeeded,
    /// Launch history was downloaded and this many launches were stored
    Imported(usize),
}

impl<'a> LaunchService<'a> {
    /// Imports the full launch history unless it was imported before
    ///
    /// Each launch is upserted by flight number in the provider's order. A launch that
    /// fails to save is logged and skipped.
    ///
    /// # Returns
    /// - `Ok(SeedOutcome)` - Whether launch history was imported and how many launches
    /// - `Err(Error::SeedError)` - The provider responded with a non-200 status
    /// - `Err(Error::HttpError)` - The request failed or its body could not be decoded
    /// - `Err(Error::DbErr)` - The sentinel launch lookup failed
    pub async fn ensure_seeded(&self, client: &LaunchHistoryClient) -> Result<SeedOutcome, Error> {
        let launch_repo = LaunchRepository::new(self.db);

        if launch_repo
            .find_one(SENTINEL_FLIGHT_NUMBER, SENTINEL_ROCKET, SENTINEL_MISSION)
            .await?
            .is_some()
        {
            tracing::info!("Launch data already loaded");

            return Ok(SeedOutcome::AlreadySeeded);
        }

        tracing::info!("Downloading launch data");
        let docs = client.query_all().await?;

        let mut imported = 0;
        for doc in docs {
            let launch = normalize_launch(doc);
            let flight_number = launch.flight_number;

            match launch_repo.upsert(launch).await {
                Ok(stored) => {
                    tracing::debug!(
                        flight_number = %stored.flight_number,
                        mission = %stored.mission,
                        "Imported launch"
                    );
                    imported += 1;
                }
                Err(e) => {
                    tracing::error!(
                        flight_number = %flight_number,
                        "Could not save imported launch: {}",
                        e
                    );
                }
            }
        }

        tracing::info!("Imported {} launches", imported);

        Ok(SeedOutcome::Imported(imported))
    }
}

/// Converts a provider document into a launch, a missing outcome counts as a success
fn normalize_launch(doc: LaunchDoc) -> LaunchDto {
    let customers = doc.customers();

    LaunchDto {
        flight_number: doc.flight_number,
        launch_date: doc.date_local.to_utc(),
        mission: doc.name,
        rocket: doc.rocket.name,
        target: None,
        customers,
        upcoming: doc.upcoming,
        success: doc.success.unwrap_or(true),
    }
}
