use std::{num::NonZeroU64, sync::Arc, time::Duration};

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, HeaderValue, Method, Request},
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::{app, giveaway, leads, mail, webhooks, AppState};

use super::errors::DefaultApiError;

pub static MAX_BODY_BYTES: usize = 1024 * 1024;
pub static DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 50;

pub fn create_router(state: Arc<AppState>) -> Router {
    let rate_limit = state
        .envy
        .rate_limit_per_second
        .map(NonZeroU64::get)
        .unwrap_or(DEFAULT_RATE_LIMIT_PER_SECOND);

    Router::new()
        .route("/", get(app::controller::get_root))
        // webhooks
        .route(
            "/api/stripe-webhook",
            post(webhooks::stripe::controller::handle_webhook),
        )
        .route(
            "/api/paypal-webhook",
            post(webhooks::paypal::controller::handle_webhook),
        )
        // landing page
        .route("/api/register-lead", post(leads::controller::register_lead))
        .route("/api/send-email", post(mail::controller::send_email))
        .route(
            "/api/get-participant-count",
            get(giveaway::controller::get_participant_count),
        )
        // layers
        .layer(cors_layer(state.envy.frontend_url.as_deref()))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!("request failed in middleware: {}", err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(rate_limit, Duration::from_secs(1))),
        )
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    request_id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .with_state(state)
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET]);

    match frontend_url.and_then(|url| url.parse::<HeaderValue>().ok()) {
        Some(origin) => cors.allow_origin(origin),
        None => cors.allow_origin(Any),
    }
}
