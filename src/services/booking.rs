//! Availability & booking engine.
//!
//! The available seat set for a show is the resolved layout of its
//! showroom minus the seat refs of committed bookings. Availability
//! reads are snapshots: a seat seen free here may be gone by the time a
//! booking is attempted, and that race is resolved by the booking
//! insert hitting the unique `(movie_show_id, seat_ref)` index, never
//! by a read-then-write check.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set, SqlErr, TransactionTrait,
};
use serde::Serialize;

use crate::entities::{booking, movie_show, showroom, user};
use crate::error::{AppError, AppResult};
use crate::services::catalog;
use crate::utils::layout::{self, Seat};
use crate::utils::pricing;

#[derive(Debug, Clone, Serialize)]
pub struct AvailableSeat {
    pub seat_ref: String,
    pub seat_type_id: i32,
    pub price: Decimal,
}

struct ShowContext {
    show: movie_show::Model,
    seats: Vec<Seat>,
    premiums: HashMap<i32, i32>,
}

impl ShowContext {
    fn seat(&self, seat_ref: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.seat_ref == seat_ref)
    }

    fn price_for(&self, seat: &Seat) -> Decimal {
        let premium = self.premiums.get(&seat.seat_type_id).copied().unwrap_or(0);
        pricing::final_price(self.show.price, premium)
    }
}

/// Show, resolved layout of its showroom, and the premiums in effect.
async fn load_show_context<C: ConnectionTrait>(conn: &C, show_id: i32) -> AppResult<ShowContext> {
    let show = movie_show::Entity::find_by_id(show_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound("Movie show not found".to_string()))?;

    let room = showroom::Entity::find_by_id(show.showroom_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::Internal("Show references a missing showroom".to_string()))?;

    let groups = catalog::chart_groups(conn, room.seating_chart_id).await?;
    let seats = layout::resolve_layout(&groups)?;

    let seat_type_ids: Vec<i32> = seats.iter().map(|s| s.seat_type_id).collect();
    let premiums = catalog::latest_premiums(conn, &seat_type_ids).await?;

    Ok(ShowContext {
        show,
        seats,
        premiums,
    })
}

async fn booked_seat_refs<C: ConnectionTrait>(
    conn: &C,
    show_id: i32,
) -> AppResult<HashSet<String>> {
    Ok(booking::Entity::find()
        .filter(booking::Column::MovieShowId.eq(show_id))
        .all(conn)
        .await?
        .into_iter()
        .map(|b| b.seat_ref)
        .collect())
}

/// Seats of the show still free, each priced from the show's base
/// price and the seat type's premium. Layout order is preserved.
pub async fn list_available_seats(
    db: &DatabaseConnection,
    show_id: i32,
) -> AppResult<Vec<AvailableSeat>> {
    let ctx = load_show_context(db, show_id).await?;
    let booked = booked_seat_refs(db, show_id).await?;

    Ok(ctx
        .seats
        .iter()
        .filter(|seat| !booked.contains(&seat.seat_ref))
        .map(|seat| AvailableSeat {
            seat_ref: seat.seat_ref.clone(),
            seat_type_id: seat.seat_type_id,
            price: ctx.price_for(seat),
        })
        .collect())
}

/// Insert one booking row. The unique `(movie_show_id, seat_ref)` index
/// is the serialization point: of any number of concurrent attempts on
/// the same seat exactly one insert lands, the rest surface `Conflict`.
async fn insert_booking<C: ConnectionTrait>(
    conn: &C,
    ctx: &ShowContext,
    seat: &Seat,
    user_id: i32,
) -> AppResult<booking::Model> {
    let new_booking = booking::ActiveModel {
        movie_show_id: Set(ctx.show.id),
        seat_type_id: Set(seat.seat_type_id),
        seat_ref: Set(seat.seat_ref.clone()),
        user_id: Set(user_id),
        price: Set(ctx.price_for(seat)),
        ..Default::default()
    };

    match new_booking.insert(conn).await {
        Ok(created) => Ok(created),
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::Conflict(format!(
                "Seat {} is already taken for this show",
                seat.seat_ref
            ))),
            _ => Err(err.into()),
        },
    }
}

async fn find_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> AppResult<user::Model> {
    user::Entity::find_by_id(user_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))
}

/// Book a single seat. The final price is computed and stored on the
/// booking row, so later base-price edits never touch sold tickets.
pub async fn book_seat(
    db: &DatabaseConnection,
    show_id: i32,
    seat_ref: &str,
    user_id: i32,
) -> AppResult<booking::Model> {
    let ctx = load_show_context(db, show_id).await?;
    find_user(db, user_id).await?;

    let seat = ctx.seat(seat_ref).ok_or_else(|| {
        AppError::Validation(format!(
            "Seat {} is not part of this showroom's layout",
            seat_ref
        ))
    })?;

    insert_booking(db, &ctx, seat, user_id).await
}

/// Book several seats for one show, all or nothing. Every insert runs
/// inside one transaction; the first invalid or taken seat aborts the
/// batch and the rollback leaves no partial purchase behind.
pub async fn book_seats(
    db: &DatabaseConnection,
    show_id: i32,
    seat_refs: &[String],
    user_id: i32,
) -> AppResult<Vec<booking::Model>> {
    if seat_refs.is_empty() {
        return Err(AppError::Validation(
            "A batch booking needs at least one seat".to_string(),
        ));
    }

    let distinct: HashSet<&String> = seat_refs.iter().collect();
    if distinct.len() != seat_refs.len() {
        return Err(AppError::Validation(
            "Duplicate seats in batch booking".to_string(),
        ));
    }

    let ctx = load_show_context(db, show_id).await?;
    find_user(db, user_id).await?;

    let txn = db.begin().await?;

    match insert_batch(&txn, &ctx, seat_refs, user_id).await {
        Ok(bookings) => {
            txn.commit().await?;
            Ok(bookings)
        }
        Err(err) => {
            // Undo every insert of the batch before surfacing the error.
            txn.rollback().await?;
            Err(err)
        }
    }
}

async fn insert_batch<C: ConnectionTrait>(
    conn: &C,
    ctx: &ShowContext,
    seat_refs: &[String],
    user_id: i32,
) -> AppResult<Vec<booking::Model>> {
    let mut bookings = Vec::with_capacity(seat_refs.len());
    for seat_ref in seat_refs {
        let seat = ctx.seat(seat_ref).ok_or_else(|| {
            AppError::Validation(format!(
                "Seat {} is not part of this showroom's layout",
                seat_ref
            ))
        })?;
        bookings.push(insert_booking(conn, ctx, seat, user_id).await?);
    }
    Ok(bookings)
}
