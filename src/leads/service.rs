use crate::{
    app::{models::api_error::ApiError, util::time},
    crm::{self, structs::crm_record::CrmRecord, PAYMENT_STATUS_LEAD},
    purchases::DEFAULT_CURRENCY,
    AppState,
};

use super::{
    errors::LeadsApiError, DEFAULT_LEAD_NAME, LEAD_ID_PREFIX, LEAD_TIPO, PRODUCT_LEAD_ONLY,
    PRODUCT_NEWSLETTER,
};

pub fn lead_record(
    email: &str,
    name: Option<&str>,
    newsletter: bool,
    state: &AppState,
) -> CrmRecord {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_LEAD_NAME);

    CrmRecord {
        api_key: state.envy.apps_api_key.to_owned(),
        name: name.to_string(),
        email: email.to_string(),
        phone: String::new(),
        transaction_id: format!("{}{}", LEAD_ID_PREFIX, time::current_time_in_millis()),
        tipo: LEAD_TIPO.to_string(),
        amount: "0".to_string(),
        currency: DEFAULT_CURRENCY.to_string(),
        productos: if newsletter {
            PRODUCT_NEWSLETTER.to_string()
        } else {
            PRODUCT_LEAD_ONLY.to_string()
        },
        estado_pago: PAYMENT_STATUS_LEAD.to_string(),
        nota: String::new(),
        timestamp: time::current_time_rfc3339(),
    }
}

/// Saves the lead in the CRM. Unlike purchases, a failed forward is reported to the caller.
pub async fn register_lead(record: &CrmRecord, state: &AppState) -> Result<String, ApiError> {
    match crm::service::forward_record(record, state).await {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::error!("register_lead failed: {}", e.message);
            Err(LeadsApiError::SaveFailed.value())
        }
    }
}
