use anyhow::Result;
use rusqlite::Connection as SyncConnection;
use tokio_rusqlite::Connection;

/// Ordered schema migrations. The index + 1 of each entry is the
/// `user_version` the database reports once it has been applied.
const MIGRATIONS: &[&str] = &[
    // 1: baseline tables
    r"
    CREATE TABLE IF NOT EXISTS booking (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        uid TEXT NOT NULL UNIQUE,
        event_type_id INTEGER NOT NULL,
        title TEXT NOT NULL,
        responses TEXT,
        created_at TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS attendee (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        booking_id INTEGER NOT NULL REFERENCES booking(id),
        email TEXT NOT NULL,
        name TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS attendee_booking_id_idx ON attendee(booking_id);
    CREATE TABLE IF NOT EXISTS event_type_host (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        event_type_id INTEGER NOT NULL,
        user_id INTEGER NOT NULL,
        email TEXT NOT NULL,
        name TEXT NOT NULL,
        UNIQUE(event_type_id, user_id)
    );
    ",
    // 2: profile url used to match attendees across bookings and the
    // address kept when an attendee's email is replaced
    r"
    ALTER TABLE attendee ADD COLUMN linkedin_url TEXT;
    ALTER TABLE attendee ADD COLUMN outreach_email TEXT;
    CREATE INDEX IF NOT EXISTS attendee_linkedin_url_idx ON attendee(linkedin_url);
    ",
    // 3: hosts that receive invites without blocking availability
    r"
    ALTER TABLE event_type_host ADD COLUMN ignore_for_availability BOOLEAN NOT NULL DEFAULT 0;
    ",
];

/// Open the async connection used by the server and CLI commands.
pub async fn async_db(db_path: &str) -> Result<Connection> {
    let db = Connection::open(db_path).await?;
    db.call(|conn| {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(())
    })
    .await?;
    Ok(db)
}

/// Create every table from scratch. Safe to call on an existing
/// database since it only applies migrations that haven't run.
pub fn initialize_db(conn: &mut SyncConnection) -> rusqlite::Result<usize> {
    migrate_db(conn)
}

/// Apply pending migrations in a single transaction. Returns the
/// number of migrations applied.
pub fn migrate_db(conn: &mut SyncConnection) -> rusqlite::Result<usize> {
    let current = schema_version(conn)?;
    let pending: Vec<&str> = MIGRATIONS.iter().skip(current).copied().collect();
    if pending.is_empty() {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    for sql in &pending {
        tx.execute_batch(sql)?;
    }
    tx.pragma_update(None, "user_version", MIGRATIONS.len() as i64)?;
    tx.commit()?;

    Ok(pending.len())
}

pub fn schema_version(conn: &SyncConnection) -> rusqlite::Result<usize> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version.max(0) as usize)
}

pub fn latest_schema_version() -> usize {
    MIGRATIONS.len()
}
