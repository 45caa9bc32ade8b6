use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: i64,
    pub booking_id: i64,
    pub email: String,
    pub name: String,
    pub linkedin_url: Option<String>,
    // Original address kept after `email` was replaced by the canonical one
    pub outreach_email: Option<String>,
}

/// An attendee that hasn't been written yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendee {
    pub booking_id: i64,
    pub email: String,
    pub name: String,
    pub linkedin_url: Option<String>,
    pub outreach_email: Option<String>,
}

/// Outcome of matching a booking email against an existing attendee
/// with the same profile URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciledEmail {
    pub email: String,
    pub outreach_email: Option<String>,
}
