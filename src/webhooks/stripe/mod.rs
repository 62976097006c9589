pub mod controller;
pub mod errors;
pub mod service;

pub static STRIPE_SIGNATURE_HEADER: &str = "stripe-signature";
pub static CHECKOUT_SESSION_COMPLETED: &str = "checkout.session.completed";
pub static REPORTING_EVENT_PREFIX: &str = "reporting.";
pub static PLACEHOLDER_NAME: &str = "Stripe Customer";
