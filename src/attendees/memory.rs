//! In-memory attendee store used in tests.
use std::sync::RwLock;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use super::models::{Attendee, NewAttendee};
use super::store::AttendeeStore;

#[derive(Default)]
pub struct InMemoryAttendeeStore {
    attendees: RwLock<Vec<Attendee>>,
}

impl InMemoryAttendeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing rows. Ids are kept as given.
    pub fn with_attendees(attendees: Vec<Attendee>) -> Self {
        Self {
            attendees: RwLock::new(attendees),
        }
    }

    pub fn snapshot(&self) -> Vec<Attendee> {
        self.attendees
            .read()
            .map(|rows| rows.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AttendeeStore for InMemoryAttendeeStore {
    async fn find_earliest_by_linkedin_url(
        &self,
        linkedin_url: &str,
    ) -> Result<Option<Attendee>> {
        let rows = self.attendees.read().map_err(|e| anyhow!("{}", e))?;
        Ok(rows
            .iter()
            .filter(|a| a.linkedin_url.as_deref() == Some(linkedin_url))
            .min_by_key(|a| a.id)
            .cloned())
    }

    async fn list_with_linkedin_url(&self) -> Result<Vec<Attendee>> {
        let rows = self.attendees.read().map_err(|e| anyhow!("{}", e))?;
        let mut found: Vec<Attendee> = rows
            .iter()
            .filter(|a| a.linkedin_url.as_deref().is_some_and(|url| !url.is_empty()))
            .cloned()
            .collect();
        found.sort_by_key(|a| a.id);
        Ok(found)
    }

    async fn list_for_booking(&self, booking_id: i64) -> Result<Vec<Attendee>> {
        let rows = self.attendees.read().map_err(|e| anyhow!("{}", e))?;
        let mut found: Vec<Attendee> = rows
            .iter()
            .filter(|a| a.booking_id == booking_id)
            .cloned()
            .collect();
        found.sort_by_key(|a| a.id);
        Ok(found)
    }

    async fn insert(&self, attendee: NewAttendee) -> Result<Attendee> {
        let mut rows = self.attendees.write().map_err(|e| anyhow!("{}", e))?;
        let id = rows.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let inserted = Attendee {
            id,
            booking_id: attendee.booking_id,
            email: attendee.email,
            name: attendee.name,
            linkedin_url: attendee.linkedin_url,
            outreach_email: attendee.outreach_email,
        };
        rows.push(inserted.clone());
        Ok(inserted)
    }

    async fn update_email(
        &self,
        id: i64,
        email: &str,
        outreach_email: Option<&str>,
    ) -> Result<bool> {
        let mut rows = self.attendees.write().map_err(|e| anyhow!("{}", e))?;
        match rows.iter_mut().find(|a| a.id == id) {
            Some(attendee) => {
                attendee.email = email.to_string();
                attendee.outreach_email = outreach_email.map(|s| s.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
