use sea_orm_migration::{prelude::*, schema::*};

use super::m20250115_000002_create_seat_types::SeatType;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// A seating chart is a header row plus one seat-group row per run of
/// same-typed seats; the header is what showrooms reference, so a
/// chart with several groups is addressable as a whole.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeatingChart::Table)
                    .if_not_exists()
                    .col(pk_auto(SeatingChart::Id))
                    .col(
                        timestamp_with_time_zone(SeatingChart::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SeatGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(SeatGroup::Id))
                    .col(integer(SeatGroup::SeatingChartId).not_null())
                    .col(integer(SeatGroup::SeatTypeId).not_null())
                    .col(text(SeatGroup::Coordinates).not_null())
                    .col(integer(SeatGroup::Quantity).not_null())
                    .col(
                        timestamp_with_time_zone(SeatGroup::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_group_seating_chart")
                            .from(SeatGroup::Table, SeatGroup::SeatingChartId)
                            .to(SeatingChart::Table, SeatingChart::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_group_seat_type")
                            .from(SeatGroup::Table, SeatGroup::SeatTypeId)
                            .to(SeatType::Table, SeatType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeatGroup::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SeatingChart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeatingChart {
    #[sea_orm(iden = "seating_charts")]
    Table,
    Id,
    CreatedAt,
}

#[derive(DeriveIden)]
pub enum SeatGroup {
    #[sea_orm(iden = "seat_groups")]
    Table,
    Id,
    SeatingChartId,
    SeatTypeId,
    Coordinates,
    Quantity,
    CreatedAt,
}
