use sea_orm_migration::{prelude::*, schema::*};

use super::m20250115_000002_create_seat_types::SeatType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeatTypePremium::Table)
                    .if_not_exists()
                    .col(pk_auto(SeatTypePremium::Id))
                    .col(integer(SeatTypePremium::SeatTypeId).not_null())
                    .col(integer(SeatTypePremium::PremiumPercentage).not_null())
                    .col(
                        timestamp_with_time_zone(SeatTypePremium::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_seat_type_premium_seat_type")
                            .from(SeatTypePremium::Table, SeatTypePremium::SeatTypeId)
                            .to(SeatType::Table, SeatType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SeatTypePremium::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SeatTypePremium {
    #[sea_orm(iden = "seat_type_percentage_premiums")]
    Table,
    Id,
    SeatTypeId,
    PremiumPercentage,
    CreatedAt,
}
