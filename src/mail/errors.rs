use reqwest::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum MailApiError {
    EmailRequired,
    NotConfigured,
    SendFailed,
}

impl MailApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::EmailRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Email is required".to_string(),
            },
            Self::NotConfigured => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Email sending is not configured.".to_string(),
            },
            Self::SendFailed => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to send email".to_string(),
            },
        }
    }
}
