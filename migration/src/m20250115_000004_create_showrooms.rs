use sea_orm_migration::{prelude::*, schema::*};

use super::m20250115_000003_create_seating_charts::SeatingChart;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Showroom::Table)
                    .if_not_exists()
                    .col(pk_auto(Showroom::Id))
                    .col(string(Showroom::Title).not_null())
                    .col(integer(Showroom::SeatingChartId).not_null())
                    .col(
                        timestamp_with_time_zone(Showroom::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showroom_seating_chart")
                            .from(Showroom::Table, Showroom::SeatingChartId)
                            .to(SeatingChart::Table, SeatingChart::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Showroom::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Showroom {
    #[sea_orm(iden = "showrooms")]
    Table,
    Id,
    Title,
    SeatingChartId,
    CreatedAt,
}
