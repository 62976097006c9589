use crate::app::envy::Envy;

pub struct PayPalCredentials<'a> {
    pub client_id: &'a str,
    pub secret: &'a str,
    pub webhook_id: &'a str,
}

impl<'a> PayPalCredentials<'a> {
    /// All three settings must be present and non-empty.
    pub fn from_envy(envy: &'a Envy) -> Option<Self> {
        let present = |value: &'a Option<String>| value.as_deref().filter(|v| !v.is_empty());

        Some(Self {
            client_id: present(&envy.paypal_client_id)?,
            secret: present(&envy.paypal_secret)?,
            webhook_id: present(&envy.paypal_webhook_id)?,
        })
    }
}
