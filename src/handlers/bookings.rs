use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Deserialize;

use crate::entities::{booking as booking_entity, user};
use crate::error::{AppError, AppResult};
use crate::services::booking;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub movie_show_id: i32,
    pub seat_ref: String,
    pub user_id: i32,
}

pub async fn create_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBookingRequest>,
) -> AppResult<Json<booking_entity::Model>> {
    let created = booking::book_seat(
        &state.db,
        payload.movie_show_id,
        &payload.seat_ref,
        payload.user_id,
    )
    .await?;
    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct CreateBatchBookingRequest {
    pub movie_show_id: i32,
    pub seat_refs: Vec<String>,
    pub user_id: i32,
}

/// Group purchase: every requested seat is booked or none is.
pub async fn create_batch_booking(
    State(state): State<AppState>,
    Json(payload): Json<CreateBatchBookingRequest>,
) -> AppResult<Json<Vec<booking_entity::Model>>> {
    let created = booking::book_seats(
        &state.db,
        payload.movie_show_id,
        &payload.seat_refs,
        payload.user_id,
    )
    .await?;
    Ok(Json(created))
}

pub async fn user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<booking_entity::Model>>> {
    user::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let bookings = booking_entity::Entity::find()
        .filter(booking_entity::Column::UserId.eq(user_id))
        .all(&state.db)
        .await?;

    Ok(Json(bookings))
}
