use std::env;
use std::path::Path;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
    pub db_dir: String,
    pub db_path: String,
}

impl AppConfig {
    /// Build a config rooted at `storage_path`. Used by `Default` and
    /// by tests that point storage at a temp directory.
    pub fn from_storage_path(storage_path: &str) -> Self {
        let db_dir = Path::new(storage_path).join("db");
        let db_path = db_dir.join("rollcall.sqlite");
        Self {
            storage_path: storage_path.to_string(),
            db_dir: db_dir.display().to_string(),
            db_path: db_path.display().to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("ROLLCALL_STORAGE_PATH").unwrap_or("./".to_string());
        Self::from_storage_path(&storage_path)
    }
}
