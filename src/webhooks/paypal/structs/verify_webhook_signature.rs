use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

// https://developer.paypal.com/docs/api/webhooks/v1/#verify-webhook-signature_post
#[derive(Debug, Serialize)]
pub struct VerifyWebhookSignatureRequest<'a> {
    pub auth_algo: &'a str,
    pub cert_url: &'a str,
    pub transmission_id: &'a str,
    pub transmission_sig: &'a str,
    pub transmission_time: &'a str,
    pub webhook_id: &'a str,
    pub webhook_event: &'a RawValue,
}

#[derive(Debug, Deserialize)]
pub struct VerifyWebhookSignatureResponse {
    pub verification_status: String,
}
