use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::entities::{movie, seat_group, seat_type, seat_type_premium, showroom, user};
use crate::error::AppResult;
use crate::services::catalog::{self, SeatGroupSpec};
use crate::AppState;

// ============ Movies ============

#[derive(Debug, Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<CreateMovieRequest>,
) -> AppResult<Json<movie::Model>> {
    let movie = catalog::create_movie(&state.db, payload.title).await?;
    Ok(Json(movie))
}

pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<movie::Model>>> {
    let movies = catalog::list_movies(&state.db).await?;
    Ok(Json(movies))
}

// ============ Seat types & premiums ============

#[derive(Debug, Deserialize)]
pub struct CreateSeatTypeRequest {
    pub label: String,
}

pub async fn create_seat_type(
    State(state): State<AppState>,
    Json(payload): Json<CreateSeatTypeRequest>,
) -> AppResult<Json<seat_type::Model>> {
    let seat_type = catalog::create_seat_type(&state.db, payload.label).await?;
    Ok(Json(seat_type))
}

#[derive(Debug, Deserialize)]
pub struct SetPremiumRequest {
    pub premium_percentage: i32,
}

pub async fn set_premium(
    State(state): State<AppState>,
    Path(seat_type_id): Path<i32>,
    Json(payload): Json<SetPremiumRequest>,
) -> AppResult<Json<seat_type_premium::Model>> {
    let premium =
        catalog::set_seat_type_premium(&state.db, seat_type_id, payload.premium_percentage).await?;
    Ok(Json(premium))
}

// ============ Seating charts & showrooms ============

#[derive(Debug, Deserialize)]
pub struct CreateSeatingChartRequest {
    pub seat_groups: Vec<SeatGroupSpec>,
}

#[derive(Debug, Serialize)]
pub struct SeatingChartResponse {
    pub id: i32,
    pub seat_groups: Vec<seat_group::Model>,
}

pub async fn create_seating_chart(
    State(state): State<AppState>,
    Json(payload): Json<CreateSeatingChartRequest>,
) -> AppResult<Json<SeatingChartResponse>> {
    let (chart, seat_groups) = catalog::create_seating_chart(&state.db, payload.seat_groups).await?;
    Ok(Json(SeatingChartResponse {
        id: chart.id,
        seat_groups,
    }))
}

#[derive(Debug, Deserialize)]
pub struct CreateShowroomRequest {
    pub title: String,
    pub seating_chart_id: i32,
}

pub async fn create_showroom(
    State(state): State<AppState>,
    Json(payload): Json<CreateShowroomRequest>,
) -> AppResult<Json<showroom::Model>> {
    let showroom =
        catalog::create_showroom(&state.db, payload.title, payload.seating_chart_id).await?;
    Ok(Json(showroom))
}

// ============ Users ============

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<Json<user::Model>> {
    let user = catalog::create_user(&state.db, payload.name, payload.email).await?;
    Ok(Json(user))
}
