use serde_json::Value;
use stripe::{CheckoutSession, Event, EventObject, EventType};

use crate::{
    purchases::{
        self,
        enums::payment_provider::PaymentProvider,
        models::purchase_event::PurchaseEvent,
        util::{first_present, format_minor_units, normalize_currency},
    },
    AppState,
};

use super::{CHECKOUT_SESSION_COMPLETED, PLACEHOLDER_NAME, REPORTING_EVENT_PREFIX};

/// Fields of a completed checkout session that feed a purchase.
#[derive(Debug, Default)]
pub struct CheckoutFields<'a> {
    pub session_id: &'a str,
    pub details_email: Option<&'a str>,
    pub customer_email: Option<&'a str>,
    pub details_name: Option<&'a str>,
    pub amount_total: Option<i64>,
    pub currency: Option<&'a str>,
}

pub async fn handle_event(event: Event, state: &AppState) {
    match event.type_ {
        EventType::CheckoutSessionCompleted => match event.data.object {
            EventObject::CheckoutSession(session) => {
                let purchase = normalize_checkout_session(&session);
                purchases::service::fulfill(&purchase, state).await;
            }
            _ => tracing::error!("checkout event {} carried no checkout session", event.id),
        },
        event_type => log_unhandled(&event_type.to_string()),
    }
}

/// Handles a signed event whose body the typed Stripe models could not decode,
/// e.g. an object type or API version newer than the models.
pub async fn handle_untyped_event(event: &Value, state: &AppState) {
    let event_type = event["type"].as_str().unwrap_or_default();

    if event_type != CHECKOUT_SESSION_COMPLETED {
        log_unhandled(event_type);
        return;
    }

    let purchase = normalize_checkout_value(&event["data"]["object"]);
    purchases::service::fulfill(&purchase, state).await;
}

fn log_unhandled(event_type: &str) {
    if event_type.starts_with(REPORTING_EVENT_PREFIX) {
        tracing::info!("stripe report event received: {}", event_type);
    } else {
        tracing::info!("not handling stripe event type: {}", event_type);
    }
}

pub fn normalize_checkout_session(session: &CheckoutSession) -> PurchaseEvent {
    let details = session.customer_details.as_ref();
    let currency = session.currency.as_ref().map(ToString::to_string);

    checkout_purchase(CheckoutFields {
        session_id: session.id.as_str(),
        details_email: details.and_then(|d| d.email.as_deref()),
        customer_email: session.customer_email.as_deref(),
        details_name: details.and_then(|d| d.name.as_deref()),
        amount_total: session.amount_total,
        currency: currency.as_deref(),
    })
}

pub fn normalize_checkout_value(session: &Value) -> PurchaseEvent {
    let details = &session["customer_details"];

    checkout_purchase(CheckoutFields {
        session_id: session["id"].as_str().unwrap_or_default(),
        details_email: details["email"].as_str(),
        customer_email: session["customer_email"].as_str(),
        details_name: details["name"].as_str(),
        amount_total: session["amount_total"].as_i64(),
        currency: session["currency"].as_str(),
    })
}

pub fn checkout_purchase(fields: CheckoutFields) -> PurchaseEvent {
    PurchaseEvent {
        provider: PaymentProvider::Stripe,
        event_type: CHECKOUT_SESSION_COMPLETED.to_string(),
        transaction_id: fields.session_id.to_string(),
        email: first_present(&[fields.details_email, fields.customer_email]).unwrap_or_default(),
        name: first_present(&[fields.details_name])
            .unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
        amount: format_minor_units(fields.amount_total.unwrap_or(0)),
        currency: normalize_currency(fields.currency),
    }
}
