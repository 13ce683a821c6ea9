use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seat_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub label: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seat_type_premium::Entity")]
    Premiums,
    #[sea_orm(has_many = "super::seat_group::Entity")]
    SeatGroups,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
}

impl Related<super::seat_type_premium::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Premiums.def()
    }
}

impl Related<super::seat_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatGroups.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
