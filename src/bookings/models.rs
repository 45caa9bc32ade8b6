use serde::Serialize;
use serde_json::Value;

use crate::attendees::Attendee;
use crate::hosts::Host;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub id: i64,
    pub uid: String,
    pub event_type_id: i64,
    pub title: String,
    pub responses: Option<Value>,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub event_type_id: i64,
    pub title: String,
    pub attendee_name: String,
    pub attendee_email: String,
    pub responses: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedBooking {
    pub booking: Booking,
    pub attendee: Attendee,
    // Everyone who receives the invite, including hosts that don't
    // block availability
    pub hosts: Vec<Host>,
}
