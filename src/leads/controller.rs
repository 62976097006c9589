use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{dtos::register_lead_dto::RegisterLeadDto, errors::LeadsApiError, service};

pub async fn register_lead(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<RegisterLeadDto>,
) -> Result<Json<Value>, ApiError> {
    let Some(email) = dto.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) else {
        return Err(LeadsApiError::EmailRequired.value());
    };

    if let Err(e) = dto.validate() {
        tracing::debug!("register_lead invalid dto: {}", e);
        return match e.field_errors().contains_key("email") {
            true => Err(LeadsApiError::EmailRequired.value()),
            false => Err(LeadsApiError::InvalidLead.value()),
        };
    }

    let record = service::lead_record(email, dto.name.as_deref(), dto.newsletter, &state);
    let crm_response = service::register_lead(&record, &state).await?;

    tracing::info!("lead {} registered", record.transaction_id);

    Ok(Json(json!({ "ok": true, "crmResponse": crm_response })))
}
