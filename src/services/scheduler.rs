//! Show scheduler: attaches a movie and a showroom to a showtime,
//! enforcing that no two shows overlap in the same showroom.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{movie, movie_show, showroom};
use crate::error::{AppError, AppResult};

/// Schedule a show.
///
/// The schema carries no movie runtime, so every show occupies a fixed
/// configured slot: the half-open interval `[showtime, showtime + slot)`.
/// Two shows in one showroom conflict when those intervals intersect;
/// back-to-back shows share a boundary instant and do not.
pub async fn create_show(
    db: &DatabaseConnection,
    movie_id: i32,
    showroom_id: i32,
    price: Decimal,
    showtime: DateTime<Utc>,
    slot: Duration,
) -> AppResult<movie_show::Model> {
    if price <= Decimal::ZERO {
        return Err(AppError::Validation(
            "Show price must be strictly positive".to_string(),
        ));
    }

    movie::Entity::find_by_id(movie_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie not found".to_string()))?;

    showroom::Entity::find_by_id(showroom_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Showroom not found".to_string()))?;

    // [a, a+slot) and [b, b+slot) intersect iff |a - b| < slot, so the
    // strict bounds make back-to-back shows legal. Bounds are bound as
    // DateTimeWithTimeZone to match the column representation exactly.
    let window_start: sea_orm::prelude::DateTimeWithTimeZone = (showtime - slot).into();
    let window_end: sea_orm::prelude::DateTimeWithTimeZone = (showtime + slot).into();
    let conflicting = movie_show::Entity::find()
        .filter(movie_show::Column::ShowroomId.eq(showroom_id))
        .filter(movie_show::Column::Showtime.gt(window_start))
        .filter(movie_show::Column::Showtime.lt(window_end))
        .one(db)
        .await?;

    if let Some(existing) = conflicting {
        return Err(AppError::Conflict(format!(
            "Showroom is already occupied by a show at {}",
            existing.showtime
        )));
    }

    let new_show = movie_show::ActiveModel {
        movie_id: Set(movie_id),
        showroom_id: Set(showroom_id),
        price: Set(price),
        showtime: Set(showtime.into()),
        ..Default::default()
    };

    Ok(new_show.insert(db).await?)
}

pub async fn list_shows(db: &DatabaseConnection) -> AppResult<Vec<movie_show::Model>> {
    Ok(movie_show::Entity::find()
        .order_by_asc(movie_show::Column::Showtime)
        .all(db)
        .await?)
}
