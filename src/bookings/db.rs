use anyhow::{Error, Result};
use chrono::Utc;
use rusqlite::{OptionalExtension, params};
use tokio_rusqlite::Connection;
use uuid::Uuid;

use super::models::{Booking, NewBooking};

pub async fn insert_booking(db: &Connection, booking: &NewBooking) -> Result<Booking, Error> {
    let uid = Uuid::new_v4().to_string();
    let created_at = Utc::now().to_rfc3339();
    let event_type_id = booking.event_type_id;
    let title = booking.title.clone();
    let responses = booking.responses.clone();
    let responses_json = responses.as_ref().map(|r| r.to_string());

    let inserted = db
        .call(move |conn| {
            conn.execute(
                "INSERT INTO booking (uid, event_type_id, title, responses, created_at)
                 VALUES (?, ?, ?, ?, ?)",
                params![uid, event_type_id, title, responses_json, created_at],
            )?;
            Ok(Booking {
                id: conn.last_insert_rowid(),
                uid,
                event_type_id,
                title,
                responses,
                created_at,
            })
        })
        .await?;

    Ok(inserted)
}

pub async fn find_booking_by_id(db: &Connection, id: i64) -> Result<Option<Booking>, Error> {
    let row = db
        .call(move |conn| {
            let result = conn
                .query_row(
                    "SELECT id, uid, event_type_id, title, responses, created_at
                     FROM booking WHERE id = ?",
                    [id],
                    |row| {
                        let responses: Option<String> = row.get(4)?;
                        Ok((
                            Booking {
                                id: row.get(0)?,
                                uid: row.get(1)?,
                                event_type_id: row.get(2)?,
                                title: row.get(3)?,
                                responses: None,
                                created_at: row.get(5)?,
                            },
                            responses,
                        ))
                    },
                )
                .optional()?;
            Ok(result)
        })
        .await?;

    let Some((mut booking, responses)) = row else {
        return Ok(None);
    };
    booking.responses = responses
        .map(|raw| serde_json::from_str(&raw))
        .transpose()?;
    Ok(Some(booking))
}
