use sea_orm_migration::{prelude::*, schema::*};

static IDX_LAUNCH_TARGET: &str = "idx-launch-target";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Launch::Table)
                    .if_not_exists()
                    .col(pk_auto(Launch::Id))
                    .col(big_integer_uniq(Launch::FlightNumber))
                    .col(timestamp_with_time_zone(Launch::LaunchDate))
                    .col(string(Launch::Mission))
                    .col(string(Launch::Rocket))
                    .col(string_null(Launch::Target))
                    .col(json(Launch::Customers))
                    .col(boolean(Launch::Upcoming))
                    .col(boolean(Launch::Success).default(true))
                    .to_owned(),
            )
            .await?;

        // Lookup index only, imported launches have no target
        manager
            .create_index(
                Index::create()
                    .name(IDX_LAUNCH_TARGET)
                    .table(Launch::Table)
                    .col(Launch::Target)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LAUNCH_TARGET)
                    .table(Launch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Launch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Launch {
    Table,
    Id,
    FlightNumber,
    LaunchDate,
    Mission,
    Rocket,
    Target,
    Customers,
    Upcoming,
    Success,
}
