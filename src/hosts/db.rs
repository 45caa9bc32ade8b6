use anyhow::{Error, Result};
use rusqlite::{OptionalExtension, Row, params};
use tokio_rusqlite::Connection;

use super::models::{Host, UpsertHost};

const HOST_COLUMNS: &str = "id, event_type_id, user_id, email, name, ignore_for_availability";

fn host_from_row(row: &Row) -> rusqlite::Result<Host> {
    Ok(Host {
        id: row.get(0)?,
        event_type_id: row.get(1)?,
        user_id: row.get(2)?,
        email: row.get(3)?,
        name: row.get(4)?,
        ignore_for_availability: row.get(5)?,
    })
}

pub async fn find_hosts_for_event_type(
    db: &Connection,
    event_type_id: i64,
) -> Result<Vec<Host>, Error> {
    let hosts = db
        .call(move |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM event_type_host WHERE event_type_id = ? ORDER BY id ASC",
                HOST_COLUMNS
            ))?;
            let rows = stmt
                .query_map([event_type_id], host_from_row)?
                .collect::<rusqlite::Result<Vec<Host>>>()?;
            Ok(rows)
        })
        .await?;
    Ok(hosts)
}

/// Insert a host or update the existing one for the same event type
/// and user. The flag defaults to false for new hosts.
pub async fn upsert_host(db: &Connection, host: UpsertHost) -> Result<Host, Error> {
    let saved = db
        .call(move |conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT INTO event_type_host (event_type_id, user_id, email, name, ignore_for_availability)
                 VALUES (?1, ?2, ?3, ?4, COALESCE(?5, 0))
                 ON CONFLICT(event_type_id, user_id) DO UPDATE SET
                   email = excluded.email,
                   name = excluded.name,
                   ignore_for_availability = COALESCE(?5, ignore_for_availability)",
                params![
                    host.event_type_id,
                    host.user_id,
                    host.email,
                    host.name,
                    host.ignore_for_availability,
                ],
            )?;
            let saved = tx.query_row(
                &format!(
                    "SELECT {} FROM event_type_host WHERE event_type_id = ? AND user_id = ?",
                    HOST_COLUMNS
                ),
                [host.event_type_id, host.user_id],
                host_from_row,
            )?;
            tx.commit()?;
            Ok(saved)
        })
        .await?;
    Ok(saved)
}

/// Update the flag on an existing host. Returns `None` when the host
/// isn't assigned to the event type.
pub async fn set_ignore_for_availability(
    db: &Connection,
    event_type_id: i64,
    user_id: i64,
    ignore_for_availability: bool,
) -> Result<Option<Host>, Error> {
    let host = db
        .call(move |conn| {
            let updated = conn.execute(
                "UPDATE event_type_host SET ignore_for_availability = ?
                 WHERE event_type_id = ? AND user_id = ?",
                params![ignore_for_availability, event_type_id, user_id],
            )?;
            if updated == 0 {
                return Ok(None);
            }
            let host = conn
                .query_row(
                    &format!(
                        "SELECT {} FROM event_type_host WHERE event_type_id = ? AND user_id = ?",
                        HOST_COLUMNS
                    ),
                    [event_type_id, user_id],
                    host_from_row,
                )
                .optional()?;
            Ok(host)
        })
        .await?;
    Ok(host)
}

pub async fn find_host(
    db: &Connection,
    event_type_id: i64,
    user_id: i64,
) -> Result<Option<Host>, Error> {
    let host = db
        .call(move |conn| {
            let host = conn
                .query_row(
                    &format!(
                        "SELECT {} FROM event_type_host WHERE event_type_id = ? AND user_id = ?",
                        HOST_COLUMNS
                    ),
                    [event_type_id, user_id],
                    host_from_row,
                )
                .optional()?;
            Ok(host)
        })
        .await?;
    Ok(host)
}
