use sea_orm_migration::{prelude::*, schema::*};

use super::m20250115_000002_create_seat_types::SeatType;
use super::m20250115_000005_create_movie_shows::MovieShow;
use super::m20250115_000007_create_users::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::MovieShowId).not_null())
                    .col(integer(Booking::SeatTypeId).not_null())
                    .col(string(Booking::SeatRef).not_null())
                    .col(integer(Booking::UserId).not_null())
                    .col(decimal_len(Booking::Price, 9, 3).not_null())
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_movie_show")
                            .from(Booking::Table, Booking::MovieShowId)
                            .to(MovieShow::Table, MovieShow::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_seat_type")
                            .from(Booking::Table, Booking::SeatTypeId)
                            .to(SeatType::Table, SeatType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // The storage-level guarantee that a seat is sold at most once
        // per show. Concurrent bookings race on this index, not on an
        // application-level read-then-write check.
        manager
            .create_index(
                Index::create()
                    .name("uq_booking_show_seat")
                    .table(Booking::Table)
                    .col(Booking::MovieShowId)
                    .col(Booking::SeatRef)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    #[sea_orm(iden = "movie_show_bookings")]
    Table,
    Id,
    MovieShowId,
    SeatTypeId,
    SeatRef,
    UserId,
    Price,
    CreatedAt,
}
