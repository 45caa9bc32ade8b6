use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub id: i64,
    pub event_type_id: i64,
    pub user_id: i64,
    pub email: String,
    pub name: String,
    pub ignore_for_availability: bool,
}

#[derive(Debug, Clone)]
pub struct UpsertHost {
    pub event_type_id: i64,
    pub user_id: i64,
    pub email: String,
    pub name: String,
    // Left unchanged on an existing host when `None`
    pub ignore_for_availability: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPurpose {
    #[default]
    All,
    Availability,
    Invites,
}
