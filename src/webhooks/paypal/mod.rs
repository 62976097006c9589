pub mod client;
pub mod controller;
pub mod errors;
pub mod service;
pub mod structs;

pub static PLACEHOLDER_NAME: &str = "PayPal Customer";
pub static VERIFICATION_SUCCESS: &str = "SUCCESS";

#[non_exhaustive]
pub struct PayPalEventType;

impl PayPalEventType {
    pub const PAYMENT_CAPTURE_COMPLETED: &'static str = "PAYMENT.CAPTURE.COMPLETED";
    pub const CHECKOUT_ORDER_APPROVED: &'static str = "CHECKOUT.ORDER.APPROVED";
}

#[non_exhaustive]
pub struct PayPalHeader;

impl PayPalHeader {
    pub const AUTH_ALGO: &'static str = "paypal-auth-algo";
    pub const CERT_URL: &'static str = "paypal-cert-url";
    pub const TRANSMISSION_ID: &'static str = "paypal-transmission-id";
    pub const TRANSMISSION_SIG: &'static str = "paypal-transmission-sig";
    pub const TRANSMISSION_TIME: &'static str = "paypal-transmission-time";
}
