//! Router for the bookings API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::attendees::{AttendeeStore, SqliteAttendeeStore};
use crate::bookings::{NewBooking, create_booking, find_booking_by_id};

type SharedState = Arc<RwLock<AppState>>;

async fn create_booking_handler(
    State(state): State<SharedState>,
    Json(payload): Json<public::CreateBookingRequest>,
) -> Result<Json<public::CreatedBooking>, ApiError> {
    if payload.attendee.email.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Attendee email is required".to_string(),
        ));
    }

    let db = state.read().expect("Unable to read share state").db.clone();
    let request = NewBooking {
        event_type_id: payload.event_type_id,
        title: payload.title,
        attendee_name: payload.attendee.name,
        attendee_email: payload.attendee.email.trim().to_string(),
        responses: payload.responses,
    };
    let created = create_booking(&db, request).await?;

    Ok(Json(created))
}

async fn list_attendees_handler(
    State(state): State<SharedState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<Vec<public::Attendee>>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();

    if find_booking_by_id(&db, booking_id).await?.is_none() {
        return Err(ApiError::NotFound(format!(
            "Booking {} not found",
            booking_id
        )));
    }

    let store = SqliteAttendeeStore::new(db);
    let attendees = store.list_for_booking(booking_id).await?;

    Ok(Json(attendees))
}

/// Create the bookings router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(create_booking_handler))
        .route("/{id}/attendees", get(list_attendees_handler))
}
