use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use bytes::Bytes;
use serde_json::Value;
use stripe::{Webhook, WebhookError};

use crate::{app::models::api_error::ApiError, webhooks, AppState};

use super::{errors::StripeApiError, service, STRIPE_SIGNATURE_HEADER};

pub async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let Some(signature) = headers
        .get(STRIPE_SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok())
    else {
        tracing::warn!("stripe webhook missing signature header");
        return Err(StripeApiError::MissingSignature.value());
    };

    let Ok(payload) = std::str::from_utf8(&body) else {
        tracing::warn!("stripe webhook body is not utf-8");
        return Err(StripeApiError::InvalidPayload.value());
    };

    match Webhook::construct_event(payload, signature, &state.envy.stripe_signing_secret) {
        Ok(event) => {
            tracing::info!(
                event_id = %event.id,
                event_type = %event.type_,
                livemode = event.livemode,
                "stripe event verified"
            );
            service::handle_event(event, &state).await;
        }
        // Decoding runs only after the signature and timestamp checks pass.
        Err(WebhookError::BadParse(e)) => {
            let event: Value = match serde_json::from_str(payload) {
                Ok(event) => event,
                Err(_) => {
                    tracing::warn!("signed stripe webhook is not json: {}", e);
                    return Err(StripeApiError::InvalidPayload.value());
                }
            };
            tracing::warn!("stripe event verified but not decodable as a typed event: {}", e);
            service::handle_untyped_event(&event, &state).await;
        }
        Err(e) => {
            tracing::warn!("stripe webhook signature verification failed: {}", e);
            return Err(StripeApiError::InvalidSignature(e).value());
        }
    }

    Ok(webhooks::acknowledgment())
}
