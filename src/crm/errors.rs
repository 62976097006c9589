use reqwest::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum CrmApiError {
    Unreachable,
    Rejected(StatusCode),
}

impl CrmApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::Unreachable => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "CRM intake is unreachable.".to_string(),
            },
            Self::Rejected(status) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: format!("CRM intake responded with status {}.", status),
            },
        }
    }
}
