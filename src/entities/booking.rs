use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A committed seat sale. `(movie_show_id, seat_ref)` is unique at the
/// storage level; `price` is the final price captured at booking time
/// so later base-price edits cannot drift past tickets. Bookings are
/// append-only.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movie_show_bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub movie_show_id: i32,
    pub seat_type_id: i32,
    pub seat_ref: String,
    pub user_id: i32,
    pub price: Decimal,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie_show::Entity",
        from = "Column::MovieShowId",
        to = "super::movie_show::Column::Id"
    )]
    MovieShow,
    #[sea_orm(
        belongs_to = "super::seat_type::Entity",
        from = "Column::SeatTypeId",
        to = "super::seat_type::Column::Id"
    )]
    SeatType,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::movie_show::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieShow.def()
    }
}

impl Related<super::seat_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeatType.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
