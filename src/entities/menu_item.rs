use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Navigation menu entry. The tree is stored flat: each row carries an
/// optional parent id and children are found by indexing on it, so no
/// row ever embeds a reference to another.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub url: String,
    pub parent_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
