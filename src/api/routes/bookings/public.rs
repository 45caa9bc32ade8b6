//! Public types for the bookings API
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct AttendeeRequest {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub event_type_id: i64,
    pub title: String,
    pub attendee: AttendeeRequest,
    // Arbitrary booking form answers keyed by field name
    #[serde(default)]
    pub responses: Option<Value>,
}

pub use crate::attendees::Attendee;
pub use crate::bookings::CreatedBooking;
