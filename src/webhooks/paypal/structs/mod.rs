pub mod paypal_credentials;
pub mod paypal_oauth;
pub mod paypal_webhook_event;
pub mod transmission_headers;
pub mod verify_webhook_signature;
