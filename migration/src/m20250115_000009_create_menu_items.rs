use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // parent_id is a plain nullable integer, not a foreign key: the
        // tree is assembled by indexing rows on parent_id, so orphaned
        // subtrees stay queryable instead of failing a constraint.
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(string(MenuItem::Name).not_null())
                    .col(string(MenuItem::Url).not_null())
                    .col(integer_null(MenuItem::ParentId))
                    .col(
                        timestamp_with_time_zone(MenuItem::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    #[sea_orm(iden = "menu_items")]
    Table,
    Id,
    Name,
    Url,
    ParentId,
    CreatedAt,
}
