//! Router for the event type hosts API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};
use axum_extra::extract::Query;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::hosts::{
    UpsertHost, find_host, find_hosts_for_event_type, hosts_for_purpose,
    set_ignore_for_availability, upsert_host,
};

type SharedState = Arc<RwLock<AppState>>;

async fn list_hosts_handler(
    State(state): State<SharedState>,
    Path(event_type_id): Path<i64>,
    Query(params): Query<public::HostsQuery>,
) -> Result<Json<Vec<public::Host>>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    let hosts = find_hosts_for_event_type(&db, event_type_id).await?;
    let selected: Vec<public::Host> = hosts_for_purpose(&hosts, params.purpose)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(selected))
}

async fn create_host_handler(
    State(state): State<SharedState>,
    Path(event_type_id): Path<i64>,
    Json(payload): Json<public::CreateHostRequest>,
) -> Result<Json<public::Host>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();
    let host = upsert_host(
        &db,
        UpsertHost {
            event_type_id,
            user_id: payload.user_id,
            email: payload.email,
            name: payload.name,
            ignore_for_availability: payload.ignore_for_availability,
        },
    )
    .await?;

    Ok(Json(host))
}

async fn update_host_handler(
    State(state): State<SharedState>,
    Path((event_type_id, user_id)): Path<(i64, i64)>,
    Json(payload): Json<public::UpdateHostRequest>,
) -> Result<Json<public::Host>, ApiError> {
    let db = state.read().expect("Unable to read share state").db.clone();

    let host = match payload.ignore_for_availability {
        Some(flag) => set_ignore_for_availability(&db, event_type_id, user_id, flag).await?,
        None => find_host(&db, event_type_id, user_id).await?,
    };

    host.map(Json).ok_or_else(|| {
        ApiError::NotFound(format!(
            "Host {} not found for event type {}",
            user_id, event_type_id
        ))
    })
}

/// Create the event type hosts router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/{event_type_id}/hosts",
            get(list_hosts_handler).post(create_host_handler),
        )
        .route("/{event_type_id}/hosts/{user_id}", patch(update_host_handler))
}
