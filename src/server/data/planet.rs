//! Planet repository.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::db::PlanetModel;

/// Planet persistence keyed by Kepler name
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a planet by Kepler name, leaving an existing planet of the same name untouched
    pub async fn upsert(&self, kepler_name: String) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            kepler_name: ActiveValue::Set(kepler_name),
            ..Default::default()
        };

        // Updating the key column with itself turns the conflict into a no-op that still
        // returns the stored row
        entity::prelude::Planet::insert(planet)
            .on_conflict(
                OnConflict::column(entity::planet::Column::KeplerName)
                    .update_column(entity::planet::Column::KeplerName)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Finds a planet by its exact Kepler name
    pub async fn find_by_kepler_name(
        &self,
        kepler_name: &str,
    ) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .filter(entity::planet::Column::KeplerName.eq(kepler_name))
            .one(self.db)
            .await
    }

    /// Every stored planet in insertion order
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Number of stored planets
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Planet::find().count(self.db).await
    }
}
