use reqwest::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum LeadsApiError {
    EmailRequired,
    InvalidLead,
    SaveFailed,
}

impl LeadsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::EmailRequired => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Email is required".to_string(),
            },
            Self::InvalidLead => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid lead.".to_string(),
            },
            Self::SaveFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to save lead".to_string(),
            },
        }
    }
}
