pub mod booking;
pub mod menu_item;
pub mod movie;
pub mod movie_show;
pub mod seat_group;
pub mod seat_type;
pub mod seat_type_premium;
pub mod seating_chart;
pub mod showroom;
pub mod user;
