use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use tracing_subscriber::EnvFilter;

use crate::app::envy::Envy;

mod app;
mod crm;
mod giveaway;
mod leads;
mod mail;
mod purchases;
mod webhooks;

pub static DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(envy: Envy) -> Result<Self, reqwest::Error> {
        let timeout = envy
            .http_timeout_secs
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            envy: Arc::new(envy),
            http,
        })
    }
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("promo_webhooks=debug,tower_http=info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);

    if envy.resend_api_key.is_none() {
        tracing::warn!("RESEND_API_KEY not set, confirmation emails are disabled");
    }

    let state = AppState::new(envy).expect("failed to build http client");

    // app
    let app = app::router::create_router(Arc::new(state));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
