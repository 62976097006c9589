use serde_json::json;

use crate::{
    app::{models::api_error::ApiError, util::time},
    purchases::models::purchase_event::PurchaseEvent,
    AppState,
};

use super::{errors::CrmApiError, structs::crm_record::CrmRecord, PAYMENT_STATUS_COMPLETED};

pub fn purchase_record(event: &PurchaseEvent, state: &AppState) -> CrmRecord {
    CrmRecord {
        api_key: state.envy.apps_api_key.to_owned(),
        name: event.name.to_owned(),
        email: event.email.to_owned(),
        phone: String::new(),
        transaction_id: event.transaction_id.to_owned(),
        tipo: event.provider.value().to_string(),
        amount: event.amount.to_owned(),
        currency: event.currency.to_owned(),
        productos: state.envy.product_name.to_owned(),
        estado_pago: PAYMENT_STATUS_COMPLETED.to_string(),
        nota: json!({ "event": event.event_type }).to_string(),
        timestamp: time::current_time_rfc3339(),
    }
}

/// Posts the record to the CRM intake and returns its response text.
pub async fn forward_record(record: &CrmRecord, state: &AppState) -> Result<String, ApiError> {
    let res = match state
        .http
        .post(&state.envy.apps_url)
        .json(record)
        .send()
        .await
    {
        Ok(res) => res,
        Err(e) => {
            tracing::error!("forward_record failed to reach crm: {}", e);
            return Err(CrmApiError::Unreachable.value());
        }
    };

    let status = res.status();
    let text = res.text().await.unwrap_or_default();

    if !status.is_success() {
        tracing::error!("forward_record rejected with {}: {}", status, text);
        return Err(CrmApiError::Rejected(status).value());
    }

    tracing::debug!("crm accepted record {}", record.transaction_id);
    Ok(text)
}
