use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

use super::DEFAULT_PARTICIPANT_COUNT;

// TODO: read the count from the CRM sheet once the intake script exposes a row count.
pub async fn get_participant_count(State(state): State<Arc<AppState>>) -> Json<Value> {
    let count = state
        .envy
        .participant_count
        .unwrap_or(DEFAULT_PARTICIPANT_COUNT);

    Json(json!({ "count": count }))
}
