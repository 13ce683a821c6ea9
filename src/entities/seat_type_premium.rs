use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Percentage surcharge for one seat type. A seat type may accumulate
/// several rows over time; the latest one is authoritative.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seat_type_percentage_premiums")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seat_type_id: i32,
    pub premium_percentage: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seat_type::Entity",
        from = "Column::SeatTypeId",
        to = "super::seat_type::Column::Id"
    )]
    SeatType,
}

impl Related<super::seat_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
