use crate::{crm, mail, AppState};

use super::models::purchase_event::PurchaseEvent;

/// Records the purchase in the CRM and emails the customer. The payment already
/// succeeded, so failures here are logged and never reach the webhook response.
pub async fn fulfill(event: &PurchaseEvent, state: &AppState) {
    tracing::info!(
        provider = event.provider.value(),
        transaction_id = %event.transaction_id,
        "fulfilling purchase"
    );

    let record = crm::service::purchase_record(event, state);
    if let Err(e) = crm::service::forward_record(&record, state).await {
        tracing::error!(
            "fulfill failed to forward {} to crm: {}",
            event.transaction_id,
            e.message
        );
    }

    if state.envy.resend_api_key.is_none() {
        tracing::debug!("email dispatch disabled, skipping confirmation");
        return;
    }

    if event.email.is_empty() {
        tracing::warn!(
            "purchase {} has no customer email, skipping confirmation",
            event.transaction_id
        );
        return;
    }

    let email = mail::service::purchase_confirmation_email(event, state);
    match mail::service::send_mail(&email, state).await {
        Ok(id) => tracing::info!("confirmation email {} sent for {}", id, event.transaction_id),
        Err(e) => tracing::error!(
            "fulfill failed to send confirmation for {}: {}",
            event.transaction_id,
            e.message
        ),
    }
}
