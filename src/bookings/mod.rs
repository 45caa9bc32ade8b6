pub mod db;
pub mod models;

pub use db::*;
pub use models::*;

use anyhow::Result;
use tokio_rusqlite::Connection;

use crate::attendees::{FormResponses, SqliteAttendeeStore, create_booking_attendee};
use crate::hosts::{Host, find_hosts_for_event_type, invite_hosts};

/// Record a booking and its attendee. The attendee's email is
/// reconciled against earlier bookings that share a LinkedIn URL.
pub async fn create_booking(db: &Connection, request: NewBooking) -> Result<CreatedBooking> {
    let responses = request.responses.as_ref().and_then(FormResponses::from_json);
    let booking = insert_booking(db, &request).await?;

    let store = SqliteAttendeeStore::new(db.clone());
    let attendee = create_booking_attendee(
        &store,
        booking.id,
        &request.attendee_name,
        &request.attendee_email,
        responses.as_ref(),
    )
    .await?;

    let hosts = find_hosts_for_event_type(db, request.event_type_id).await?;
    let hosts: Vec<Host> = invite_hosts(&hosts).into_iter().cloned().collect();

    tracing::info!(
        "Created booking {} ({}) with attendee {}",
        booking.id,
        booking.uid,
        attendee.id
    );

    Ok(CreatedBooking {
        booking,
        attendee,
        hosts,
    })
}
