#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentProvider {
    Stripe,
    PayPal,
}

impl PaymentProvider {
    /// Payment method column value in the CRM sheet.
    pub fn value(&self) -> &str {
        match *self {
            Self::Stripe => "STRIPE",
            Self::PayPal => "PAYPAL",
        }
    }
}
