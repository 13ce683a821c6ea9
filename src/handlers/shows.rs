use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};

use crate::entities::{movie, movie_show, showroom};
use crate::error::AppResult;
use crate::services::{booking, scheduler};
use crate::services::booking::AvailableSeat;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateShowRequest {
    pub movie_id: i32,
    pub showroom_id: i32,
    pub price: Decimal,
    pub showtime: DateTime<Utc>,
}

pub async fn create_show(
    State(state): State<AppState>,
    Json(payload): Json<CreateShowRequest>,
) -> AppResult<Json<movie_show::Model>> {
    let slot = Duration::minutes(state.config.show_duration_minutes);
    let show = scheduler::create_show(
        &state.db,
        payload.movie_id,
        payload.showroom_id,
        payload.price,
        payload.showtime,
        slot,
    )
    .await?;
    Ok(Json(show))
}

#[derive(Debug, Serialize)]
pub struct ShowResponse {
    pub id: i32,
    pub movie_title: String,
    pub showroom_title: String,
    pub price: Decimal,
    pub showtime: DateTime<Utc>,
}

/// List scheduled shows with their movie and showroom titles.
pub async fn list_shows(State(state): State<AppState>) -> AppResult<Json<Vec<ShowResponse>>> {
    let shows = scheduler::list_shows(&state.db).await?;
    let movies = movie::Entity::find().all(&state.db).await?;
    let showrooms = showroom::Entity::find().all(&state.db).await?;

    let responses: Vec<ShowResponse> = shows
        .into_iter()
        .map(|s| {
            let movie_title = movies
                .iter()
                .find(|m| m.id == s.movie_id)
                .map(|m| m.title.clone())
                .unwrap_or_default();
            let showroom_title = showrooms
                .iter()
                .find(|r| r.id == s.showroom_id)
                .map(|r| r.title.clone())
                .unwrap_or_default();

            ShowResponse {
                id: s.id,
                movie_title,
                showroom_title,
                price: s.price,
                showtime: s.showtime.with_timezone(&Utc),
            }
        })
        .collect();

    Ok(Json(responses))
}

/// Seats still free for a show, priced per seat type.
pub async fn list_available_seats(
    State(state): State<AppState>,
    Path(show_id): Path<i32>,
) -> AppResult<Json<Vec<AvailableSeat>>> {
    let seats = booking::list_available_seats(&state.db, show_id).await?;
    Ok(Json(seats))
}
