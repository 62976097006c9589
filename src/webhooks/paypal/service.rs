use serde_json::Value;

use crate::{
    purchases::{
        self,
        enums::payment_provider::PaymentProvider,
        models::purchase_event::PurchaseEvent,
        util::{first_present, normalize_currency, normalize_decimal},
    },
    AppState,
};

use super::{
    structs::paypal_webhook_event::{PayPalAmount, PayPalWebhookEvent},
    PayPalEventType, PLACEHOLDER_NAME,
};

pub async fn handle_event(event: Value, state: &AppState) {
    let event_type = event
        .get("event_type")
        .and_then(Value::as_str)
        .unwrap_or_default();

    match event_type {
        PayPalEventType::PAYMENT_CAPTURE_COMPLETED | PayPalEventType::CHECKOUT_ORDER_APPROVED => {
            match normalize_event(event) {
                Ok(purchase) => purchases::service::fulfill(&purchase, state).await,
                Err(e) => tracing::error!("handle_event could not read paypal resource: {}", e),
            }
        }
        _ => {
            tracing::info!("not handling paypal event type: {}", event_type);
        }
    }
}

pub fn normalize_event(event: Value) -> Result<PurchaseEvent, serde_json::Error> {
    let event: PayPalWebhookEvent = serde_json::from_value(event)?;

    let mut transaction_id = String::new();
    let mut email = String::new();
    let mut name = None;
    let mut amount: Option<PayPalAmount> = None;

    if let Some(resource) = event.resource {
        transaction_id = resource.id;

        if let Some(payer) = resource.payer {
            email = first_present(&[payer.email_address.as_deref()]).unwrap_or_default();
            name = payer.name.and_then(|n| {
                let full = format!(
                    "{} {}",
                    n.given_name.unwrap_or_default(),
                    n.surname.unwrap_or_default()
                );
                first_present(&[Some(full.as_str())])
            });
        }

        amount = resource.amount.or_else(|| {
            resource
                .purchase_units
                .into_iter()
                .next()
                .and_then(|unit| unit.amount)
        });
    }

    let (value, currency) = match amount {
        Some(amount) => (amount.value, amount.currency_code),
        None => (None, None),
    };

    Ok(PurchaseEvent {
        provider: PaymentProvider::PayPal,
        event_type: event.event_type,
        transaction_id,
        email,
        name: name.unwrap_or_else(|| PLACEHOLDER_NAME.to_string()),
        amount: normalize_decimal(value.as_deref()),
        currency: normalize_currency(currency.as_deref()),
    })
}
