use axum::Json;
use serde_json::{json, Value};

pub mod paypal;
pub mod stripe;

/// Fixed acknowledgment returned to payment providers once an event is verified.
pub fn acknowledgment() -> Json<Value> {
    Json(json!({ "received": true }))
}
