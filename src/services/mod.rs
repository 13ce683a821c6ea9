pub mod booking;
pub mod catalog;
pub mod menu;
pub mod scheduler;
