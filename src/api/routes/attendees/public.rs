//! Public types for the attendees API
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ReconcileQuery {
    pub linkedin_url: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct ReconcileResponse {
    pub linkedin_url: String,
    pub email: String,
    pub outreach_email: Option<String>,
}
