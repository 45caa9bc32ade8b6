//! SQLite backed attendee store
use anyhow::Result;
use async_trait::async_trait;
use rusqlite::{OptionalExtension, Row, params};
use tokio_rusqlite::Connection;

use super::models::{Attendee, NewAttendee};
use super::store::AttendeeStore;

const ATTENDEE_COLUMNS: &str = "id, booking_id, email, name, linkedin_url, outreach_email";

fn attendee_from_row(row: &Row) -> rusqlite::Result<Attendee> {
    Ok(Attendee {
        id: row.get(0)?,
        booking_id: row.get(1)?,
        email: row.get(2)?,
        name: row.get(3)?,
        linkedin_url: row.get(4)?,
        outreach_email: row.get(5)?,
    })
}

#[derive(Clone)]
pub struct SqliteAttendeeStore {
    db: Connection,
}

impl SqliteAttendeeStore {
    pub fn new(db: Connection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AttendeeStore for SqliteAttendeeStore {
    async fn find_earliest_by_linkedin_url(
        &self,
        linkedin_url: &str,
    ) -> Result<Option<Attendee>> {
        let url = linkedin_url.to_owned();
        let attendee = self
            .db
            .call(move |conn| {
                let result = conn
                    .prepare(&format!(
                        "SELECT {} FROM attendee WHERE linkedin_url = ? ORDER BY id ASC LIMIT 1",
                        ATTENDEE_COLUMNS
                    ))?
                    .query_row([url], attendee_from_row)
                    .optional()?;
                Ok(result)
            })
            .await?;
        Ok(attendee)
    }

    async fn list_with_linkedin_url(&self) -> Result<Vec<Attendee>> {
        let attendees = self
            .db
            .call(|conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM attendee
                     WHERE linkedin_url IS NOT NULL AND linkedin_url != ''
                     ORDER BY id ASC",
                    ATTENDEE_COLUMNS
                ))?;
                let rows = stmt
                    .query_map([], attendee_from_row)?
                    .collect::<rusqlite::Result<Vec<Attendee>>>()?;
                Ok(rows)
            })
            .await?;
        Ok(attendees)
    }

    async fn list_for_booking(&self, booking_id: i64) -> Result<Vec<Attendee>> {
        let attendees = self
            .db
            .call(move |conn| {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM attendee WHERE booking_id = ? ORDER BY id ASC",
                    ATTENDEE_COLUMNS
                ))?;
                let rows = stmt
                    .query_map([booking_id], attendee_from_row)?
                    .collect::<rusqlite::Result<Vec<Attendee>>>()?;
                Ok(rows)
            })
            .await?;
        Ok(attendees)
    }

    async fn insert(&self, attendee: NewAttendee) -> Result<Attendee> {
        let inserted = self
            .db
            .call(move |conn| {
                conn.execute(
                    "INSERT INTO attendee (booking_id, email, name, linkedin_url, outreach_email)
                     VALUES (?, ?, ?, ?, ?)",
                    params![
                        attendee.booking_id,
                        attendee.email,
                        attendee.name,
                        attendee.linkedin_url,
                        attendee.outreach_email,
                    ],
                )?;
                Ok(Attendee {
                    id: conn.last_insert_rowid(),
                    booking_id: attendee.booking_id,
                    email: attendee.email,
                    name: attendee.name,
                    linkedin_url: attendee.linkedin_url,
                    outreach_email: attendee.outreach_email,
                })
            })
            .await?;
        Ok(inserted)
    }

    async fn update_email(
        &self,
        id: i64,
        email: &str,
        outreach_email: Option<&str>,
    ) -> Result<bool> {
        let email = email.to_owned();
        let outreach_email = outreach_email.map(|s| s.to_owned());
        let updated = self
            .db
            .call(move |conn| {
                let count = conn.execute(
                    "UPDATE attendee SET email = ?, outreach_email = ? WHERE id = ?",
                    params![email, outreach_email, id],
                )?;
                Ok(count)
            })
            .await?;
        Ok(updated > 0)
    }
}
