//! Public types for the event type hosts API
use serde::Deserialize;

use crate::hosts::HostPurpose;

#[derive(Deserialize)]
pub struct HostsQuery {
    #[serde(default)]
    pub purpose: HostPurpose,
}

#[derive(Deserialize)]
pub struct CreateHostRequest {
    pub user_id: i64,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub ignore_for_availability: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateHostRequest {
    #[serde(default)]
    pub ignore_for_availability: Option<bool>,
}

pub use crate::hosts::Host;
