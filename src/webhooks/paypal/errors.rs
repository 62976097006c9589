use reqwest::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum PayPalApiError {
    InvalidJson,
    MissingHeaders,
    Misconfigured,
    AuthenticationFailed,
    VerificationUnavailable,
    InvalidSignature,
}

impl PayPalApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidJson => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid JSON".to_string(),
            },
            Self::MissingHeaders => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Missing PayPal transmission headers".to_string(),
            },
            Self::Misconfigured => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Server misconfiguration: PayPal env missing".to_string(),
            },
            Self::AuthenticationFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to get PayPal access token".to_string(),
            },
            Self::VerificationUnavailable => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to verify webhook signature with PayPal".to_string(),
            },
            Self::InvalidSignature => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid webhook signature".to_string(),
            },
        }
    }
}
