pub use sea_orm_migration::prelude::*;

mod m20250115_000001_create_movies;
mod m20250115_000002_create_seat_types;
mod m20250115_000003_create_seating_charts;
mod m20250115_000004_create_showrooms;
mod m20250115_000005_create_movie_shows;
mod m20250115_000006_create_seat_type_premiums;
mod m20250115_000007_create_users;
mod m20250115_000008_create_bookings;
mod m20250115_000009_create_menu_items;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250115_000001_create_movies::Migration),
            Box::new(m20250115_000002_create_seat_types::Migration),
            Box::new(m20250115_000003_create_seating_charts::Migration),
            Box::new(m20250115_000004_create_showrooms::Migration),
            Box::new(m20250115_000005_create_movie_shows::Migration),
            Box::new(m20250115_000006_create_seat_type_premiums::Migration),
            Box::new(m20250115_000007_create_users::Migration),
            Box::new(m20250115_000008_create_bookings::Migration),
            Box::new(m20250115_000009_create_menu_items::Migration),
        ]
    }
}
