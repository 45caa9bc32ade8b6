use anyhow::Result;
use async_trait::async_trait;

use super::models::{Attendee, NewAttendee};

/// Data access for attendee records. Passed explicitly to everything
/// that reads or writes attendees so tests can swap in
/// `InMemoryAttendeeStore`.
#[async_trait]
pub trait AttendeeStore: Send + Sync {
    /// Earliest attendee (lowest id) whose stored profile URL equals
    /// `linkedin_url` exactly.
    async fn find_earliest_by_linkedin_url(&self, linkedin_url: &str)
    -> Result<Option<Attendee>>;

    /// Every attendee with a non-empty profile URL, ascending by id.
    async fn list_with_linkedin_url(&self) -> Result<Vec<Attendee>>;

    async fn list_for_booking(&self, booking_id: i64) -> Result<Vec<Attendee>>;

    async fn insert(&self, attendee: NewAttendee) -> Result<Attendee>;

    /// Replace an attendee's email and record the outreach email.
    /// Returns false when no attendee has that id.
    async fn update_email(
        &self,
        id: i64,
        email: &str,
        outreach_email: Option<&str>,
    ) -> Result<bool>;
}
