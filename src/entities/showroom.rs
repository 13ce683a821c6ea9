use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A showroom references (does not own) its seating chart; the chart is
/// fixed at creation since swapping it would invalidate the seat refs
/// of past bookings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "showrooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub seating_chart_id: i32,
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
    #[sea_orm(has_many = "super::movie_show::Entity")]
    MovieShows,
}

impl Related<super::seating_chart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatingChart.def()
    }
}

impl Related<super::movie_show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieShows.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
