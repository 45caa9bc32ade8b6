use anyhow::Result;

use crate::attendees::{SqliteAttendeeStore, normalize_linkedin_url, reconcile_attendee_email};
use crate::core::AppConfig;
use crate::core::db::async_db;

pub async fn run(linkedin_url: &str, email: &str, config: &AppConfig) -> Result<()> {
    let db = async_db(&config.db_path).await?;
    let store = SqliteAttendeeStore::new(db);

    let url = normalize_linkedin_url(linkedin_url);
    match reconcile_attendee_email(&store, &url, email).await? {
        None => println!("No attendee with {}; {} would be used as is", url, email),
        Some(reconciled) => {
            println!("Canonical email: {}", reconciled.email);
            match reconciled.outreach_email {
                Some(outreach) => println!("Outreach email: {}", outreach),
                None => println!("Outreach email: (none, emails match)"),
            }
        }
    }

    Ok(())
}
