use sea_orm_migration::{prelude::*, schema::*};

use super::m20250115_000001_create_movies::Movie;
use super::m20250115_000004_create_showrooms::Showroom;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MovieShow::Table)
                    .if_not_exists()
                    .col(pk_auto(MovieShow::Id))
                    .col(integer(MovieShow::MovieId).not_null())
                    .col(integer(MovieShow::ShowroomId).not_null())
                    .col(decimal_len(MovieShow::Price, 9, 3).not_null())
                    .col(timestamp_with_time_zone(MovieShow::Showtime).not_null())
                    .col(
                        timestamp_with_time_zone(MovieShow::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_show_movie")
                            .from(MovieShow::Table, MovieShow::MovieId)
                            .to(Movie::Table, Movie::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_movie_show_showroom")
                            .from(MovieShow::Table, MovieShow::ShowroomId)
                            .to(Showroom::Table, Showroom::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Overlap checks scan a showroom's shows by time.
        manager
            .create_index(
                Index::create()
                    .name("idx_movie_show_showroom_showtime")
                    .table(MovieShow::Table)
                    .col(MovieShow::ShowroomId)
                    .col(MovieShow::Showtime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MovieShow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MovieShow {
    #[sea_orm(iden = "movie_shows")]
    Table,
    Id,
    MovieId,
    ShowroomId,
    Price,
    Showtime,
    CreatedAt,
}
