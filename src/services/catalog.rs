//! Catalog store: movies, seat types, premiums, seating charts,
//! showrooms, users. All reference data here is read-mostly after
//! creation; relations are resolved by explicit id lookups.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr, TransactionTrait,
};
use serde::Deserialize;

use crate::entities::{movie, seat_group, seat_type, seat_type_premium, seating_chart, showroom, user};
use crate::error::{AppError, AppResult};
use crate::utils::layout;

pub async fn create_movie(db: &DatabaseConnection, title: String) -> AppResult<movie::Model> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("Movie title must not be empty".to_string()));
    }

    let new_movie = movie::ActiveModel {
        title: Set(title),
        ..Default::default()
    };

    Ok(new_movie.insert(db).await?)
}

pub async fn create_seat_type(db: &DatabaseConnection, label: String) -> AppResult<seat_type::Model> {
    if label.trim().is_empty() {
        return Err(AppError::Validation("Seat type label must not be empty".to_string()));
    }

    let new_type = seat_type::ActiveModel {
        label: Set(label),
        ..Default::default()
    };

    Ok(new_type.insert(db).await?)
}

/// Record a percentage premium for a seat type. Premiums are
/// versioned by insertion; the latest row wins, so "updating" a
/// premium is just inserting a new one.
pub async fn set_seat_type_premium(
    db: &DatabaseConnection,
    seat_type_id: i32,
    premium_percentage: i32,
) -> AppResult<seat_type_premium::Model> {
    if premium_percentage < 0 {
        return Err(AppError::Validation(
            "Premium percentage must not be negative".to_string(),
        ));
    }

    seat_type::Entity::find_by_id(seat_type_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Seat type not found".to_string()))?;

    let new_premium = seat_type_premium::ActiveModel {
        seat_type_id: Set(seat_type_id),
        premium_percentage: Set(premium_percentage),
        ..Default::default()
    };

    Ok(new_premium.insert(db).await?)
}

/// Latest premium percentage per seat type, defaulting to absent (no
/// surcharge) for types that never had one.
pub async fn latest_premiums<C: ConnectionTrait>(
    conn: &C,
    seat_type_ids: &[i32],
) -> AppResult<HashMap<i32, i32>> {
    let rows = seat_type_premium::Entity::find()
        .filter(seat_type_premium::Column::SeatTypeId.is_in(seat_type_ids.to_vec()))
        .order_by_asc(seat_type_premium::Column::Id)
        .all(conn)
        .await?;

    // Ascending id order, so later rows overwrite earlier ones.
    let mut premiums = HashMap::new();
    for row in rows {
        premiums.insert(row.seat_type_id, row.premium_percentage);
    }

    Ok(premiums)
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeatGroupSpec {
    pub seat_type_id: i32,
    pub coordinates: String,
    pub quantity: i32,
}

/// Create a seating chart from its seat groups. The full layout is
/// expanded up front so malformed coordinates or overlapping groups are
/// rejected here, before anything is persisted; header and group rows
/// then go in atomically.
pub async fn create_seating_chart(
    db: &DatabaseConnection,
    groups: Vec<SeatGroupSpec>,
) -> AppResult<(seating_chart::Model, Vec<seat_group::Model>)> {
    if groups.is_empty() {
        return Err(AppError::Validation(
            "A seating chart needs at least one seat group".to_string(),
        ));
    }

    for spec in &groups {
        seat_type::Entity::find_by_id(spec.seat_type_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Seat type not found".to_string()))?;
    }

    // Dry-run expansion over unsaved models; resolve_layout rejects
    // duplicate seat refs across groups.
    let probe: Vec<seat_group::Model> = groups
        .iter()
        .map(|spec| seat_group::Model {
            id: 0,
            seating_chart_id: 0,
            seat_type_id: spec.seat_type_id,
            coordinates: spec.coordinates.clone(),
            quantity: spec.quantity,
            created_at: chrono::Utc::now().fixed_offset(),
        })
        .collect();
    layout::resolve_layout(&probe)?;

    let txn = db.begin().await?;

    // The header row has no payload columns, so set the timestamp
    // explicitly instead of issuing a value-less insert.
    let chart = seating_chart::ActiveModel {
        created_at: Set(chrono::Utc::now().fixed_offset()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut saved_groups = Vec::with_capacity(groups.len());
    for spec in groups {
        let group = seat_group::ActiveModel {
            seating_chart_id: Set(chart.id),
            seat_type_id: Set(spec.seat_type_id),
            coordinates: Set(spec.coordinates),
            quantity: Set(spec.quantity),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        saved_groups.push(group);
    }

    txn.commit().await?;

    Ok((chart, saved_groups))
}

/// Seat groups of a chart in chart order (insertion order).
pub async fn chart_groups<C: ConnectionTrait>(
    conn: &C,
    seating_chart_id: i32,
) -> AppResult<Vec<seat_group::Model>> {
    Ok(seat_group::Entity::find()
        .filter(seat_group::Column::SeatingChartId.eq(seating_chart_id))
        .order_by_asc(seat_group::Column::Id)
        .all(conn)
        .await?)
}

pub async fn create_showroom(
    db: &DatabaseConnection,
    title: String,
    seating_chart_id: i32,
) -> AppResult<showroom::Model> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("Showroom title must not be empty".to_string()));
    }

    seating_chart::Entity::find_by_id(seating_chart_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Seating chart not found".to_string()))?;

    let new_showroom = showroom::ActiveModel {
        title: Set(title),
        seating_chart_id: Set(seating_chart_id),
        ..Default::default()
    };

    Ok(new_showroom.insert(db).await?)
}

pub async fn create_user(
    db: &DatabaseConnection,
    name: String,
    email: String,
) -> AppResult<user::Model> {
    if !email.contains('@') {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }

    let new_user = user::ActiveModel {
        name: Set(name),
        email: Set(email.clone()),
        ..Default::default()
    };

    match new_user.insert(db).await {
        Ok(created) => Ok(created),
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::Conflict(format!(
                "Email '{}' is already registered",
                email
            ))),
            _ => Err(err.into()),
        },
    }
}

pub async fn list_movies(db: &DatabaseConnection) -> AppResult<Vec<movie::Model>> {
    Ok(movie::Entity::find()
        .order_by_asc(movie::Column::Id)
        .all(db)
        .await?)
}
