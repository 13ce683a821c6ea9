use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{bookings, catalog, menu, shows};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    // Catalog administration (movies, seat types, charts, rooms, users)
    let catalog_routes = Router::new()
        .route("/movies", post(catalog::create_movie))
        .route("/movies", get(catalog::list_movies))
        .route("/seat-types", post(catalog::create_seat_type))
        .route("/seat-types/{id}/premium", post(catalog::set_premium))
        .route("/seating-charts", post(catalog::create_seating_chart))
        .route("/showrooms", post(catalog::create_showroom))
        .route("/users", post(catalog::create_user))
        .route("/users/{id}/bookings", get(bookings::user_bookings));

    // Scheduling and availability
    let show_routes = Router::new()
        .route("/shows", post(shows::create_show))
        .route("/shows", get(shows::list_shows))
        .route("/shows/{id}/seats", get(shows::list_available_seats));

    // Booking engine
    let booking_routes = Router::new()
        .route("/bookings", post(bookings::create_booking))
        .route("/bookings/batch", post(bookings::create_batch_booking));

    // Navigation menu
    let menu_routes = Router::new()
        .route("/menu-items", post(menu::create_menu_item))
        .route("/menu-items", get(menu::menu_tree));

    let api = catalog_routes
        .merge(show_routes)
        .merge(booking_routes)
        .merge(menu_routes);

    Router::new().nest("/api", api).with_state(state)
}
