//! API routes module

pub mod attendees;
pub mod bookings;
pub mod hosts;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Booking creation and attendee listing
        .nest("/bookings", bookings::router())
        // Attendee identity lookups
        .nest("/attendees", attendees::router())
        // Event type hosts
        .nest("/event-types", hosts::router())
}
