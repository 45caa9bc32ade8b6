//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use tempfile::TempDir;
use tokio_rusqlite::Connection;

use rollcall::api::AppState;
use rollcall::api::app;
use rollcall::core::AppConfig;
use rollcall::core::db::{async_db, initialize_db};

pub struct TestApp {
    pub router: Router,
    pub db: Connection,
    pub config: AppConfig,
    // Keeps the storage directory alive for the duration of the test
    _dir: TempDir,
}

/// Creates a migrated database in a fresh temp directory.
pub async fn test_db() -> (Connection, AppConfig, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = AppConfig::from_storage_path(dir.path().to_str().unwrap());
    std::fs::create_dir_all(&config.db_dir).expect("Failed to create db directory");

    let db = async_db(&config.db_path)
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to migrate db");
        Ok(())
    })
    .await
    .unwrap();

    (db, config, dir)
}

/// Creates a test application router backed by a temp database.
pub async fn test_app() -> TestApp {
    let (db, config, dir) = test_db().await;
    let app_state = AppState::new(db.clone(), config.clone());
    TestApp {
        router: app(Arc::new(RwLock::new(app_state))),
        db,
        config,
        _dir: dir,
    }
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).expect("Body is not json")
}
