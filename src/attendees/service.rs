use anyhow::Result;

use super::models::{Attendee, NewAttendee};
use super::reconcile::reconcile_attendee_email;
use super::responses::{FormResponses, extract_linkedin_url};
use super::store::AttendeeStore;

/// Build the attendee record for a new booking.
///
/// The LinkedIn URL is pulled from the form responses and, when
/// present, used to reconcile the email with earlier bookings by the
/// same person. A failed lookup shouldn't block the booking so it is
/// logged and the submitted email is used unchanged.
pub async fn prepare_booking_attendee(
    store: &dyn AttendeeStore,
    booking_id: i64,
    name: &str,
    email: &str,
    responses: Option<&FormResponses>,
) -> NewAttendee {
    let linkedin_url = extract_linkedin_url(responses);

    let mut attendee = NewAttendee {
        booking_id,
        email: email.to_string(),
        name: name.to_string(),
        linkedin_url: linkedin_url.clone(),
        outreach_email: None,
    };

    let Some(url) = linkedin_url else {
        return attendee;
    };

    match reconcile_attendee_email(store, &url, email).await {
        Ok(Some(reconciled)) => {
            attendee.email = reconciled.email;
            attendee.outreach_email = reconciled.outreach_email;
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(
                "Failed to reconcile attendee {} for booking {}, using submitted email: {}",
                url,
                booking_id,
                e
            );
        }
    }

    attendee
}

/// Reconcile and persist the attendee for a booking.
pub async fn create_booking_attendee(
    store: &dyn AttendeeStore,
    booking_id: i64,
    name: &str,
    email: &str,
    responses: Option<&FormResponses>,
) -> Result<Attendee> {
    let attendee = prepare_booking_attendee(store, booking_id, name, email, responses).await;
    store.insert(attendee).await
}
