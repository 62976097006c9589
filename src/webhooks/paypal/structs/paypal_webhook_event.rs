use serde::Deserialize;

// https://developer.paypal.com/api/rest/webhooks/event-names/
#[derive(Debug, Deserialize)]
pub struct PayPalWebhookEvent {
    #[serde(default)]
    pub event_type: String,
    pub resource: Option<PayPalResource>,
}

#[derive(Debug, Deserialize)]
pub struct PayPalResource {
    #[serde(default)]
    pub id: String,
    pub payer: Option<PayPalPayer>,
    pub amount: Option<PayPalAmount>,
    #[serde(default)]
    pub purchase_units: Vec<PayPalPurchaseUnit>,
}

#[derive(Debug, Deserialize)]
pub struct PayPalPayer {
    pub email_address: Option<String>,
    pub name: Option<PayPalName>,
}

#[derive(Debug, Deserialize)]
pub struct PayPalName {
    pub given_name: Option<String>,
    pub surname: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PayPalAmount {
    pub value: Option<String>,
    pub currency_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PayPalPurchaseUnit {
    pub amount: Option<PayPalAmount>,
}
