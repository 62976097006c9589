use bytes::Bytes;
use reqwest::{Client, StatusCode};

use crate::app::models::api_error::ApiError;

pub async fn get_bytes(client: &Client, url: &str) -> Result<Bytes, ApiError> {
    match client.get(url).send().await.and_then(|res| res.error_for_status()) {
        Ok(res) => match res.bytes().await {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                tracing::error!(%e);
                Err(ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Failed to get bytes from response.".to_string(),
                })
            }
        },
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to get url response.".to_string(),
            })
        }
    }
}
