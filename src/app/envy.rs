use std::num::NonZeroU64;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub frontend_url: Option<String>,
    pub port: Option<u16>,

    pub stripe_signing_secret: String,

    pub paypal_client_id: Option<String>,
    pub paypal_secret: Option<String>,
    pub paypal_webhook_id: Option<String>,
    #[serde(default = "default_paypal_api_url")]
    pub paypal_api_url: String,

    pub apps_url: String,
    pub apps_api_key: String,

    pub resend_api_key: Option<String>,
    #[serde(default = "default_resend_api_url")]
    pub resend_api_url: String,
    #[serde(default = "default_mail_from")]
    pub mail_from: String,

    #[serde(default = "default_product_name")]
    pub product_name: String,
    #[serde(default = "default_pdf_download_link")]
    pub pdf_download_link: String,
    #[serde(default = "default_template_download_link")]
    pub template_download_link: String,

    pub participant_count: Option<u64>,
    pub http_timeout_secs: Option<u64>,
    pub rate_limit_per_second: Option<NonZeroU64>,
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_paypal_api_url() -> String {
    "https://api-m.paypal.com".to_string()
}

fn default_resend_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_mail_from() -> String {
    "El Próximo Hit <noreply@send.elproximohit.com>".to_string()
}

fn default_product_name() -> String {
    "Guía El Próximo Hit + Bonus".to_string()
}

fn default_pdf_download_link() -> String {
    "https://drive.google.com/uc?export=download&id=16FriG8rNgc-tRi-ff1w2rY0CDv2nZnUi".to_string()
}

fn default_template_download_link() -> String {
    "https://drive.google.com/uc?export=download&id=13V0yhcbtHBQLW2bGJ7cj1omzXbsScDaX".to_string()
}

#[cfg(test)]
impl Envy {
    /// Settings pointing every outbound integration at `mock_url`.
    pub fn for_tests(mock_url: &str) -> Self {
        Self {
            app_env: "test".to_string(),
            frontend_url: None,
            port: None,
            stripe_signing_secret: "whsec_test_secret".to_string(),
            paypal_client_id: Some("paypal-client".to_string()),
            paypal_secret: Some("paypal-secret".to_string()),
            paypal_webhook_id: Some("WH-TEST".to_string()),
            paypal_api_url: mock_url.to_string(),
            apps_url: format!("{}/crm", mock_url),
            apps_api_key: "apps-key".to_string(),
            resend_api_key: None,
            resend_api_url: mock_url.to_string(),
            mail_from: default_mail_from(),
            product_name: default_product_name(),
            pdf_download_link: format!("{}/files/guide.pdf", mock_url),
            template_download_link: format!("{}/files/template.ptx", mock_url),
            participant_count: None,
            http_timeout_secs: Some(5),
            rate_limit_per_second: None,
        }
    }
}
