use serde::{Deserialize, Serialize};

use crate::entities::{booking, seat, showtime, theater};

#[derive(Debug, Deserialize)]
pub struct GenreQuery {
    pub genre: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// `?seats=1,2,3` on the checkout GET.
#[derive(Debug, Deserialize)]
pub struct SeatsQuery {
    pub seats: Option<String>,
}

/// The checkout POST body.
#[derive(Debug, Deserialize)]
pub struct CheckoutForm {
    pub seat_ids: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewFormData {
    pub rating: i32,
    pub comment: Option<String>,
}

/// Payload of the seat-availability JSON endpoint.
#[derive(Debug, Serialize)]
pub struct SeatAvailability {
    pub available_seats: i64,
    pub booked_seats: Vec<i32>,
}

/// One seat on the seat-selection map.
pub struct SeatStatus {
    pub seat: seat::Model,
    pub is_booked: bool,
}

/// Seats of one theater row, in column order.
pub struct SeatMapRow {
    pub row: String,
    pub seats: Vec<SeatStatus>,
}

/// A showtime with the theater it plays in, for the movie detail page.
pub struct ShowtimeListing {
    pub showtime: showtime::Model,
    pub theater: theater::Model,
}

/// One booking on the history/dashboard pages.
pub struct BookingSummary {
    pub booking: booking::Model,
    pub movie_title: String,
    pub theater_name: String,
    pub show_date: String,
    pub show_time: String,
    pub seat_numbers: Vec<String>,
}

pub struct DashboardStats {
    pub recent: Vec<BookingSummary>,
    pub total_bookings: u64,
    pub total_spent_cents: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_availability_wire_shape() {
        let payload = SeatAvailability { available_seats: 3, booked_seats: vec![7, 9] };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"available_seats": 3, "booked_seats": [7, 9]})
        );
    }
}
