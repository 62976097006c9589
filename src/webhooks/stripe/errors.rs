use reqwest::StatusCode;
use stripe::WebhookError;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum StripeApiError {
    MissingSignature,
    InvalidPayload,
    InvalidSignature(WebhookError),
}

impl StripeApiError {
    pub fn value(&self) -> ApiError {
        let detail = match self {
            Self::MissingSignature => "missing stripe-signature header".to_string(),
            Self::InvalidPayload => "payload is not valid JSON".to_string(),
            Self::InvalidSignature(e) => e.to_string(),
        };

        ApiError {
            code: StatusCode::BAD_REQUEST,
            message: format!("Webhook Error: {}", detail),
        }
    }
}
