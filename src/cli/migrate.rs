use anyhow::Result;

use crate::core::AppConfig;
use crate::core::db::{async_db, migrate_db, schema_version};

pub async fn run(config: &AppConfig) -> Result<()> {
    println!("Migrating db...");
    let db = async_db(&config.db_path).await?;
    let (applied, version) = db
        .call(|conn| {
            let applied = migrate_db(conn)?;
            Ok((applied, schema_version(conn)?))
        })
        .await?;
    println!(
        "Finished migrating db: {} applied, schema version {}",
        applied, version
    );

    Ok(())
}
