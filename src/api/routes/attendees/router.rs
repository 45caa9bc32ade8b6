//! Router for the attendees API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State, routing::get};
use axum_extra::extract::Query;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::attendees::{SqliteAttendeeStore, normalize_linkedin_url, reconcile_attendee_email};

type SharedState = Arc<RwLock<AppState>>;

// Preview how a booking with this LinkedIn URL and email would be
// stored. Never writes.
async fn reconcile_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::ReconcileQuery>,
) -> Result<Json<Option<public::ReconcileResponse>>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    let store = SqliteAttendeeStore::new(db);

    let linkedin_url = normalize_linkedin_url(&params.linkedin_url);
    let reconciled = reconcile_attendee_email(&store, &linkedin_url, &params.email).await?;

    Ok(Json(reconciled.map(|r| public::ReconcileResponse {
        linkedin_url,
        email: r.email,
        outreach_email: r.outreach_email,
    })))
}

/// Create the attendees router
pub fn router() -> Router<SharedState> {
    Router::new().route("/reconcile", get(reconcile_handler))
}
