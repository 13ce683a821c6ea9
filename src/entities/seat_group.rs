use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One run of same-typed seats in a chart: `coordinates` names the row
/// and starting column (e.g. "A1"), `quantity` how many seats the run
/// expands to.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seat_groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub seating_chart_id: i32,
    pub seat_type_id: i32,
    pub coordinates: String,
    pub quantity: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::seating_chart::Entity",
        from = "Column::SeatingChartId",
        to = "super::seating_chart::Column::Id"
    )]
    SeatingChart,
    #[sea_orm(
        belongs_to = "super::seat_type::Entity",
        from = "Column::SeatTypeId",
        to = "super::seat_type::Column::Id"
    )]
    SeatType,
}

impl Related<super::seating_chart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatingChart.def()
    }
}

impl Related<super::seat_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
