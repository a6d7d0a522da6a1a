//! Habitable planet catalog.

use std::{fs::File, io::Read, path::Path};

use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::{
    model::planet::PlanetDto,
    server::{
        data::planet::PlanetRepository,
        error::{seed::SeedError, Error},
    },
};

/// Lower bound of stellar flux, exclusive, relative to Earth
static MIN_INSOLATION: f64 = 0.36;
/// Upper bound of stellar flux, exclusive, relative to Earth
static MAX_INSOLATION: f64 = 1.11;
/// Upper bound of planetary radius, exclusive, in Earth radii
static MAX_RADIUS: f64 = 1.6;

/// A row of the Kepler objects of interest catalog
///
/// Only the columns used by the habitability check are read, the catalog has many more.
#[derive(Debug, Deserialize)]
pub struct KeplerObservation {
    /// Kepler name, empty for objects never confirmed as planets
    #[serde(default)]
    pub kepler_name: String,
    /// Archive disposition, e.g. `CONFIRMED` or `FALSE POSITIVE`
    pub koi_disposition: String,
    /// Insolation flux, empty when not measured
    pub koi_insol: Option<f64>,
    /// Planetary radius, empty when not measured
    pub koi_prad: Option<f64>,
}

impl KeplerObservation {
    /// Confirmed planet receiving Earth-like stellar flux with a rocky radius
    pub fn is_habitable(&self) -> bool {
        let (Some(insol), Some(prad)) = (self.koi_insol, self.koi_prad) else {
            return false;
        };

        self.koi_disposition == "CONFIRMED"
            && insol > MIN_INSOLATION
            && insol < MAX_INSOLATION
            && prad < MAX_RADIUS
    }
}

/// Planet catalog loading and planet queries
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens the catalog at `path` and loads it with [`Self::load_catalog`]
    pub async fn load_catalog_from_path(&self, path: &Path) -> Result<u64, Error> {
        let file = File::open(path).map_err(|source| SeedError::CatalogUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        self.load_catalog(file).await
    }

    /// Stores every habitable planet of a Kepler catalog
    ///
    /// Lines starting with `#` are skipped and the first remaining line names the columns.
    /// Planets already stored are left as they are, so loading the same catalog again
    /// changes nothing. A planet that fails to save is logged and skipped.
    ///
    /// The reader is consumed synchronously on the calling task. This only runs during
    /// startup seeding, before the listener is bound.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of planets stored after the load
    /// - `Err(Error::CsvError)` - A row could not be parsed, the load stops at that row
    /// - `Err(Error::DbErr)` - Planets could not be counted
    pub async fn load_catalog<R: Read>(&self, reader: R) -> Result<u64, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let mut catalog = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        for observation in catalog.deserialize::<KeplerObservation>() {
            let observation = observation?;

            if !observation.is_habitable() {
                continue;
            }

            if observation.kepler_name.is_empty() {
                tracing::warn!("Skipping habitable observation without a Kepler name");
                continue;
            }

            if let Err(e) = planet_repo.upsert(observation.kepler_name.clone()).await {
                tracing::error!(
                    kepler_name = %observation.kepler_name,
                    "Could not save planet: {}",
                    e
                );
            }
        }

        let count = planet_repo.count().await?;
        tracing::info!("{} habitable planets found", count);

        Ok(count)
    }

    /// Every stored habitable planet in load order
    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo.get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }
}
