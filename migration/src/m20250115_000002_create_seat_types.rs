use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeatType::Table)
                    .if_not_exists()
                    .col(pk_auto(SeatType::Id))
                    .col(string(SeatType::Label).not_null())
                    .col(
                        timestamp_with_time_zone(SeatType::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeatType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeatType {
    #[sea_orm(iden = "seat_types")]
    Table,
    Id,
    Label,
    CreatedAt,
}
