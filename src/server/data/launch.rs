//! Launch repository.

use entity::launch::Customers;
use migration::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::launch::LaunchDto,
    server::{model::db::LaunchModel, util::pagination::Pagination},
};

/// Launch persistence keyed by flight number
pub struct LaunchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LaunchRepository<'a, C> {
    /// Creates a new instance of [`LaunchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a launch, failing with a unique constraint violation if its flight number is taken
    pub async fn create(&self, launch: LaunchDto) -> Result<LaunchModel, DbErr> {
        into_active_model(launch).insert(self.db).await
    }

    /// Inserts a launch or overwrites the launch stored under the same flight number
    ///
    /// The target of an existing launch is kept.
    pub async fn upsert(&self, launch: LaunchDto) -> Result<LaunchModel, DbErr> {
        entity::prelude::Launch::insert(into_active_model(launch))
            .on_conflict(
                OnConflict::column(entity::launch::Column::FlightNumber)
                    .update_columns([
                        entity::launch::Column::LaunchDate,
                        entity::launch::Column::Mission,
                        entity::launch::Column::Rocket,
                        entity::launch::Column::Customers,
                        entity::launch::Column::Upcoming,
                        entity::launch::Column::Success,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Finds the launch stored under a flight number
    pub async fn find_by_flight_number(
        &self,
        flight_number: i64,
    ) -> Result<Option<LaunchModel>, DbErr> {
        entity::prelude::Launch::find()
            .filter(entity::launch::Column::FlightNumber.eq(flight_number))
            .one(self.db)
            .await
    }

    /// Finds a launch matching flight number, rocket and mission exactly
    pub async fn find_one(
        &self,
        flight_number: i64,
        rocket: &str,
        mission: &str,
    ) -> Result<Option<LaunchModel>, DbErr> {
        entity::prelude::Launch::find()
            .filter(entity::launch::Column::FlightNumber.eq(flight_number))
            .filter(entity::launch::Column::Rocket.eq(rocket))
            .filter(entity::launch::Column::Mission.eq(mission))
            .one(self.db)
            .await
    }

    /// Highest flight number stored, `None` when there are no launches
    pub async fn get_latest_flight_number(&self) -> Result<Option<i64>, DbErr> {
        let latest = entity::prelude::Launch::find()
            .order_by_desc(entity::launch::Column::FlightNumber)
            .one(self.db)
            .await?;

        Ok(latest.map(|launch| launch.flight_number))
    }

    /// Launches ordered by ascending flight number
    ///
    /// # Arguments
    /// - `pagination`: Records to skip and maximum to return, a limit of 0 returns all records
    pub async fn get_page(&self, pagination: Pagination) -> Result<Vec<LaunchModel>, DbErr> {
        let skip = (pagination.skip > 0).then_some(pagination.skip);
        let limit = (pagination.limit > 0).then_some(pagination.limit);

        entity::prelude::Launch::find()
            .order_by_asc(entity::launch::Column::FlightNumber)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Marks a launch as no longer upcoming and unsuccessful
    ///
    /// Only rows where at least one of the fields actually changes are counted, so aborting
    /// an already aborted launch reports 0.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of launches modified, 0 or 1 due to the unique flight number
    pub async fn abort(&self, flight_number: i64) -> Result<u64, DbErr> {
        let result = entity::prelude::Launch::update_many()
            .col_expr(entity::launch::Column::Upcoming, Expr::value(false))
            .col_expr(entity::launch::Column::Success, Expr::value(false))
            .filter(entity::launch::Column::FlightNumber.eq(flight_number))
            .filter(
                Condition::any()
                    .add(entity::launch::Column::Upcoming.eq(true))
                    .add(entity::launch::Column::Success.eq(true)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

fn into_active_model(launch: LaunchDto) -> entity::launch::ActiveModel {
    entity::launch::ActiveModel {
        flight_number: ActiveValue::Set(launch.flight_number),
        launch_date: ActiveValue::Set(launch.launch_date),
        mission: ActiveValue::Set(launch.mission),
        rocket: ActiveValue::Set(launch.rocket),
        target: ActiveValue::Set(launch.target),
        customers: ActiveValue::Set(Customers(launch.customers)),
        upcoming: ActiveValue::Set(launch.upcoming),
        success: ActiveValue::Set(launch.success),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use mission_control_test_utils::prelude::*;
    use sea_orm::SqlErr;

    use super::LaunchRepository;
    use crate::{
        model::launch::LaunchDto,
        server::util::pagination::{paginate, Pagination},
    };

    fn launch_dto(flight_number: i64) -> LaunchDto {
        LaunchDto {
            flight_number,
            launch_date: factory::mock_launch_date(),
            mission: format!("Mission {}", flight_number),
            rocket: "Explorer IS1".to_string(),
            target: Some("Kepler-442 b".to_string()),
            customers: vec!["NASA".to_string(), "NOAA".to_string()],
            upcoming: true,
            success: true,
        }
    }

    mod create_tests {
        use super::*;

        /// Expect the stored launch to carry every submitted field
        #[tokio::test]
        async fn creates_launch() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Launch)?;
            let launch_repo = LaunchRepository::new(&test.db);

            let created = launch_repo.create(launch_dto(101)).await?;

            assert_eq!(created.flight_number, 101);
            assert_eq!(created.mission, "Mission 101");
            assert_eq!(created.target.as_deref(), Some("Kepler-442 b"));
            assert_eq!(created.customers.0, vec!["NASA", "NOAA"]);
            assert!(created.upcoming);
            assert!(created.success);

            Ok(())
        }

        /// Expect a unique constraint violation when the flight number is already taken
        #[tokio::test]
        async fn fails_for_taken_flight_number() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::Launch)
                .with_mock_launch(101)
                .build()
                .await?;
            let launch_repo = LaunchRepository::new(&test.db);

            let result = launch_repo.create(launch_dto(101)).await;

            assert!(matches!(
                result.unwrap_err().sql_err(),
                Some(SqlErr::UniqueConstraintViolation(_))
            ));

            Ok(())
        }
    }

    mod upsert_tests {
        use super::*;

        /// Expect upsert of an existing flight number to overwrite it in place
        #[tokio::test]
        async fn overwrites_existing_launch() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::Launch)
                .with_mock_launch(1)
                .build()
                .await?;
            let launch_repo = LaunchRepository::new(&test.db);

            let mut launch = launch_dto(1);
            launch.mission = "FalconSat".to_string();
            launch.upcoming = false;
            let updated = launch_repo.upsert(launch).await?;

            assert_eq!(updated.mission, "FalconSat");
            assert!(!updated.upcoming);
            assert_eq!(launch_repo.get_page(Pagination::default()).await?.len(), 1);

            Ok(())
        }

        /// Expect upsert of an unknown flight number to insert it
        #[tokio::test]
        async fn inserts_missing_launch() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Launch)?;
            let launch_repo = LaunchRepository::new(&test.db);

            launch_repo.upsert(launch_dto(5)).await?;
            launch_repo.upsert(launch_dto(5)).await?;

            let launches = launch_repo.get_page(Pagination::default()).await?;
            assert_eq!(launches.len(), 1);
            assert_eq!(launches[0].flight_number, 5);

            Ok(())
        }
    }

    mod get_latest_flight_number_tests {
        use super::*;

        /// Expect the highest flight number regardless of insertion order
        #[tokio::test]
        async fn returns_highest_flight_number() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::Launch)
                .with_mock_launch(7)
                .with_mock_launch(120)
                .with_mock_launch(13)
                .build()
                .await?;
            let launch_repo = LaunchRepository::new(&test.db);

            assert_eq!(launch_repo.get_latest_flight_number().await?, Some(120));

            Ok(())
        }

        /// Expect None for an empty table
        #[tokio::test]
        async fn returns_none_when_empty() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Launch)?;
            let launch_repo = LaunchRepository::new(&test.db);

            assert_eq!(launch_repo.get_latest_flight_number().await?, None);

            Ok(())
        }
    }

    mod get_page_tests {
        use super::*;

        async fn setup() -> Result<TestContext, TestError> {
            let mut builder = TestBuilder::new().with_table(entity::prelude::Launch);
            for flight_number in [4, 2, 5, 1, 3] {
                builder = builder.with_mock_launch(flight_number);
            }

            builder.build().await
        }

        fn flight_numbers(launches: Vec<entity::launch::Model>) -> Vec<i64> {
            launches.into_iter().map(|l| l.flight_number).collect()
        }

        /// Expect all launches sorted by flight number without a limit
        #[tokio::test]
        async fn returns_all_sorted_without_limit() -> Result<(), TestError> {
            let test = setup().await?;
            let launch_repo = LaunchRepository::new(&test.db);

            let launches = launch_repo.get_page(Pagination { skip: 0, limit: 0 }).await?;

            assert_eq!(flight_numbers(launches), vec![1, 2, 3, 4, 5]);

            Ok(())
        }

        /// Expect skip and limit to select a window of the sorted launches
        #[tokio::test]
        async fn returns_requested_window() -> Result<(), TestError> {
            let test = setup().await?;
            let launch_repo = LaunchRepository::new(&test.db);

            let launches = launch_repo.get_page(Pagination { skip: 2, limit: 2 }).await?;

            assert_eq!(flight_numbers(launches), vec![3, 4]);

            Ok(())
        }

        /// Expect a limit parsed from a huge value to return every launch
        #[tokio::test]
        async fn accepts_huge_limit() -> Result<(), TestError> {
            let test = setup().await?;
            let launch_repo = LaunchRepository::new(&test.db);

            let launches = launch_repo
                .get_page(paginate(Some("1"), Some("1e30")))
                .await?;

            assert_eq!(flight_numbers(launches), vec![1, 2, 3, 4, 5]);

            Ok(())
        }

        /// Expect a skip past the signed 64-bit range to return an empty page
        #[tokio::test]
        async fn accepts_huge_skip() -> Result<(), TestError> {
            let test = setup().await?;
            let launch_repo = LaunchRepository::new(&test.db);

            let launches = launch_repo
                .get_page(paginate(Some("3"), Some("5e18")))
                .await?;

            assert!(launches.is_empty());

            Ok(())
        }

        /// Expect an empty page past the last launch
        #[tokio::test]
        async fn returns_empty_page_past_end() -> Result<(), TestError> {
            let test = setup().await?;
            let launch_repo = LaunchRepository::new(&test.db);

            let launches = launch_repo.get_page(Pagination { skip: 10, limit: 5 }).await?;

            assert!(launches.is_empty());

            Ok(())
        }
    }

    mod abort_tests {
        use super::*;

        /// Expect an upcoming launch to be modified and resolved as unsuccessful
        #[tokio::test]
        async fn aborts_upcoming_launch() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::Launch)
                .with_mock_launch(101)
                .build()
                .await?;
            let launch_repo = LaunchRepository::new(&test.db);

            let modified = launch_repo.abort(101).await?;
            let launch = launch_repo.find_by_flight_number(101).await?.unwrap();

            assert_eq!(modified, 1);
            assert!(!launch.upcoming);
            assert!(!launch.success);

            Ok(())
        }

        /// Expect no modification for an already aborted launch
        #[tokio::test]
        async fn reports_unmodified_for_aborted_launch() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_table(entity::prelude::Launch)
                .with_mock_launch(101)
                .build()
                .await?;
            let launch_repo = LaunchRepository::new(&test.db);

            launch_repo.abort(101).await?;
            let modified = launch_repo.abort(101).await?;

            assert_eq!(modified, 0);

            Ok(())
        }

        /// Expect no modification and no insert for an unknown flight number
        #[tokio::test]
        async fn does_not_insert_unknown_launch() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::Launch)?;
            let launch_repo = LaunchRepository::new(&test.db);

            let modified = launch_repo.abort(42).await?;

            assert_eq!(modified, 0);
            assert!(launch_repo.find_by_flight_number(42).await?.is_none());

            Ok(())
        }
    }
}
