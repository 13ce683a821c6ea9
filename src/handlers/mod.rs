pub mod bookings;
pub mod catalog;
pub mod menu;
pub mod shows;
