use serde::{Deserialize, Serialize};

// https://resend.com/docs/api-reference/emails/send-email
#[derive(Debug, Clone, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<EmailAttachment>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailAttachment {
    pub filename: String,
    /// Base64 encoded file content.
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct SendEmailResponse {
    pub id: String,
}
