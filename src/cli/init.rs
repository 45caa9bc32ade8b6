use anyhow::Result;
use std::fs;

use crate::core::AppConfig;
use crate::core::db::{async_db, initialize_db};

pub async fn run(config: &AppConfig) -> Result<()> {
    println!("Initializing db...");
    fs::create_dir_all(&config.db_dir)
        .unwrap_or_else(|err| println!("Ignoring db directory create failed: {}", err));

    let db = async_db(&config.db_path).await?;
    let applied = db
        .call(|conn| {
            let applied = initialize_db(conn)?;
            Ok(applied)
        })
        .await?;
    println!("Finished initializing db ({} migrations applied)", applied);

    Ok(())
}
