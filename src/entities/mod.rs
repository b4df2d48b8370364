pub mod booking;
pub mod booking_item;
pub mod movie;
pub mod review;
pub mod seat;
pub mod session;
pub mod showtime;
pub mod theater;
pub mod user;
