use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Chart header; the actual seat runs live in `seat_group` rows.
/// Charts are immutable after creation, so a resolved layout can be
/// cached keyed by chart id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seating_charts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::seat_group::Entity")]
    SeatGroups,
    #[sea_orm(has_many = "super::showroom::Entity")]
    Showrooms,
}

impl Related<super::seat_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatGroups.def()
    }
}

impl Related<super::showroom::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Showrooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
