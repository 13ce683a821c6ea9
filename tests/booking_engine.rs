//! Engine-level tests running the real migrations against an in-memory
//! SQLite database (single pooled connection, so every task sees the
//! same database).

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal_macros::dec;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use cinema_booking_backend::error::AppError;
use cinema_booking_backend::services::catalog::{self, SeatGroupSpec};
use cinema_booking_backend::services::{booking, menu, scheduler};

async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("connect sqlite");
    migration::Migrator::up(&db, None).await.expect("migrate");
    db
}

fn showtime(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
}

struct Fixture {
    standard_type_id: i32,
    vip_type_id: i32,
    showroom_id: i32,
    movie_id: i32,
    user_id: i32,
}

/// Movie "M", showroom "R" with 5 standard seats (A1..A5) and 2 vip
/// seats (B1..B2, 50% premium), and one user.
async fn seed_cinema(db: &DatabaseConnection) -> Fixture {
    let movie = catalog::create_movie(db, "M".to_string()).await.unwrap();
    let standard = catalog::create_seat_type(db, "standard".to_string())
        .await
        .unwrap();
    let vip = catalog::create_seat_type(db, "vip".to_string()).await.unwrap();
    catalog::set_seat_type_premium(db, vip.id, 50).await.unwrap();

    let (chart, _groups) = catalog::create_seating_chart(
        db,
        vec![
            SeatGroupSpec {
                seat_type_id: standard.id,
                coordinates: "A1".to_string(),
                quantity: 5,
            },
            SeatGroupSpec {
                seat_type_id: vip.id,
                coordinates: "B1".to_string(),
                quantity: 2,
            },
        ],
    )
    .await
    .unwrap();

    let room = catalog::create_showroom(db, "R".to_string(), chart.id)
        .await
        .unwrap();
    let user = catalog::create_user(db, "Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();

    Fixture {
        standard_type_id: standard.id,
        vip_type_id: vip.id,
        showroom_id: room.id,
        movie_id: movie.id,
        user_id: user.id,
    }
}

async fn seed_show(db: &DatabaseConnection, fx: &Fixture) -> i32 {
    scheduler::create_show(
        db,
        fx.movie_id,
        fx.showroom_id,
        dec!(10.00),
        showtime(18),
        Duration::minutes(120),
    )
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn end_to_end_availability_pricing_and_double_booking() {
    let db = setup_db().await;
    let fx = seed_cinema(&db).await;
    let show_id = seed_show(&db, &fx).await;

    let seats = booking::list_available_seats(&db, show_id).await.unwrap();
    assert_eq!(seats.len(), 7);
    assert_eq!(
        seats
            .iter()
            .filter(|s| s.seat_type_id == fx.standard_type_id && s.price == dec!(10.00))
            .count(),
        5
    );
    assert_eq!(
        seats
            .iter()
            .filter(|s| s.seat_type_id == fx.vip_type_id && s.price == dec!(15.00))
            .count(),
        2
    );

    let ticket = booking::book_seat(&db, show_id, "B1", fx.user_id).await.unwrap();
    assert_eq!(ticket.seat_ref, "B1");
    assert_eq!(ticket.seat_type_id, fx.vip_type_id);
    assert_eq!(ticket.price, dec!(15.00));

    let seats = booking::list_available_seats(&db, show_id).await.unwrap();
    assert_eq!(seats.len(), 6);
    assert!(seats.iter().all(|s| s.seat_ref != "B1"));

    let err = booking::book_seat(&db, show_id, "B1", fx.user_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn availability_reads_are_idempotent() {
    let db = setup_db().await;
    let fx = seed_cinema(&db).await;
    let show_id = seed_show(&db, &fx).await;

    let first = booking::list_available_seats(&db, show_id).await.unwrap();
    let second = booking::list_available_seats(&db, show_id).await.unwrap();

    let refs =
        |seats: &[booking::AvailableSeat]| seats.iter().map(|s| s.seat_ref.clone()).collect::<Vec<_>>();
    assert_eq!(refs(&first), refs(&second));
}

#[tokio::test]
async fn availability_for_unknown_show_is_not_found() {
    let db = setup_db().await;
    seed_cinema(&db).await;

    let err = booking::list_available_seats(&db, 9999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn booking_a_seat_outside_the_layout_is_rejected() {
    let db = setup_db().await;
    let fx = seed_cinema(&db).await;
    let show_id = seed_show(&db, &fx).await;

    let err = booking::book_seat(&db, show_id, "Z9", fx.user_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn booking_for_unknown_user_is_not_found() {
    let db = setup_db().await;
    let fx = seed_cinema(&db).await;
    let show_id = seed_show(&db, &fx).await;

    let err = booking::book_seat(&db, show_id, "A1", 9999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn batch_booking_is_all_or_nothing() {
    let db = setup_db().await;
    let fx = seed_cinema(&db).await;
    let show_id = seed_show(&db, &fx).await;

    booking::book_seat(&db, show_id, "A1", fx.user_id).await.unwrap();

    // A1 is taken, so the whole batch must fail and persist nothing.
    let refs = vec!["A2".to_string(), "A1".to_string(), "A3".to_string()];
    let err = booking::book_seats(&db, show_id, &refs, fx.user_id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let seats = booking::list_available_seats(&db, show_id).await.unwrap();
    assert_eq!(seats.len(), 6);
    assert!(seats.iter().any(|s| s.seat_ref == "A2"));
    assert!(seats.iter().any(|s| s.seat_ref == "A3"));
}

#[tokio::test]
async fn batch_booking_commits_every_seat_on_success() {
    let db = setup_db().await;
    let fx = seed_cinema(&db).await;
    let show_id = seed_show(&db, &fx).await;

    let refs = vec!["A2".to_string(), "B2".to_string()];
    let tickets = booking::book_seats(&db, show_id, &refs, fx.user_id)
        .await
        .unwrap();

    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].price, dec!(10.00));
    assert_eq!(tickets[1].price, dec!(15.00));

    let seats = booking::list_available_seats(&db, show_id).await.unwrap();
    assert_eq!(seats.len(), 5);
}

#[tokio::test]
async fn concurrent_bookings_of_one_seat_have_a_single_winner() {
    let db = setup_db().await;
    let fx = seed_cinema(&db).await;
    let show_id = seed_show(&db, &fx).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let db = db.clone();
        let user_id = fx.user_id;
        handles.push(tokio::spawn(async move {
            booking::book_seat(&db, show_id, "A3", user_id).await
        }));
    }

    let mut wins = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => wins += 1,
            Err(AppError::Conflict(_)) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(wins, 1);
    assert_eq!(conflicts, 7);
}

#[tokio::test]
async fn overlapping_shows_in_one_showroom_are_rejected() {
    let db = setup_db().await;
    let fx = seed_cinema(&db).await;
    let slot = Duration::minutes(120);

    scheduler::create_show(&db, fx.movie_id, fx.showroom_id, dec!(10.00), showtime(18), slot)
        .await
        .unwrap();

    // 19:00 falls inside the 18:00-20:00 slot.
    let err = scheduler::create_show(&db, fx.movie_id, fx.showroom_id, dec!(10.00), showtime(19), slot)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    // Back-to-back at 20:00 is legal (half-open intervals).
    scheduler::create_show(&db, fx.movie_id, fx.showroom_id, dec!(10.00), showtime(20), slot)
        .await
        .unwrap();
}

#[tokio::test]
async fn show_price_must_be_positive() {
    let db = setup_db().await;
    let fx = seed_cinema(&db).await;
    let slot = Duration::minutes(120);

    for bad_price in [dec!(0.00), dec!(-1.00)] {
        let err = scheduler::create_show(&db, fx.movie_id, fx.showroom_id, bad_price, showtime(18), slot)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}

#[tokio::test]
async fn show_requires_existing_movie_and_showroom() {
    let db = setup_db().await;
    let fx = seed_cinema(&db).await;
    let slot = Duration::minutes(120);

    let err = scheduler::create_show(&db, 9999, fx.showroom_id, dec!(10.00), showtime(18), slot)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = scheduler::create_show(&db, fx.movie_id, 9999, dec!(10.00), showtime(18), slot)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn chart_with_overlapping_groups_is_rejected_at_creation() {
    let db = setup_db().await;
    let seat_type = catalog::create_seat_type(&db, "standard".to_string())
        .await
        .unwrap();

    // Both groups claim A3.
    let err = catalog::create_seating_chart(
        &db,
        vec![
            SeatGroupSpec {
                seat_type_id: seat_type.id,
                coordinates: "A1".to_string(),
                quantity: 5,
            },
            SeatGroupSpec {
                seat_type_id: seat_type.id,
                coordinates: "A3".to_string(),
                quantity: 2,
            },
        ],
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn duplicate_user_email_is_a_conflict() {
    let db = setup_db().await;

    catalog::create_user(&db, "Alice".to_string(), "alice@example.com".to_string())
        .await
        .unwrap();
    let err = catalog::create_user(&db, "Bob".to_string(), "alice@example.com".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn menu_tree_nests_children_under_parents() {
    let db = setup_db().await;

    let root = menu::create_menu_item(&db, "Home".to_string(), "/".to_string(), None)
        .await
        .unwrap();
    let child = menu::create_menu_item(&db, "Shows".to_string(), "/shows".to_string(), Some(root.id))
        .await
        .unwrap();
    menu::create_menu_item(
        &db,
        "Tickets".to_string(),
        "/tickets".to_string(),
        Some(child.id),
    )
    .await
    .unwrap();
    menu::create_menu_item(&db, "About".to_string(), "/about".to_string(), None)
        .await
        .unwrap();

    let tree = menu::menu_tree(&db).await.unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0].name, "Home");
    assert_eq!(tree[0].children.len(), 1);
    assert_eq!(tree[0].children[0].name, "Shows");
    assert_eq!(tree[0].children[0].children[0].name, "Tickets");
    assert!(tree[1].children.is_empty());
}

#[tokio::test]
async fn menu_item_with_unknown_parent_is_not_found() {
    let db = setup_db().await;

    let err = menu::create_menu_item(&db, "Lost".to_string(), "/lost".to_string(), Some(42))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
