//! Attendee identity: LinkedIn profile matching, reconciliation at
//! booking time, and the duplicate merge backfill.

pub mod db;
pub mod memory;
pub mod merge;
pub mod models;
pub mod normalize;
pub mod reconcile;
pub mod responses;
pub mod service;
pub mod store;

pub use db::SqliteAttendeeStore;
pub use memory::InMemoryAttendeeStore;
pub use merge::{
    DuplicateMerge, MergeGroup, MergePlan, MergeReport, apply_merge_plan, merge_duplicate_attendees,
    plan_merges,
};
pub use models::*;
pub use normalize::normalize_linkedin_url;
pub use reconcile::reconcile_attendee_email;
pub use responses::{FormResponses, ResponseValue, extract_linkedin_url};
pub use service::{create_booking_attendee, prepare_booking_attendee};
pub use store::AttendeeStore;
