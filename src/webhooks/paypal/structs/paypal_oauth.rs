use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PayPalAccessTokenResponse {
    pub access_token: String,
}
