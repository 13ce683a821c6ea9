use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_show::Entity")]
    MovieShows,
}

impl Related<super::movie_show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieShows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
