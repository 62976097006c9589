use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest, util::time},
    purchases::{util::display_amount, DEFAULT_CURRENCY},
    AppState,
};

use super::{
    dtos::send_email_dto::SendEmailDto,
    errors::MailApiError,
    service,
    templates::purchase_confirmation_template::PurchaseConfirmation,
    DEFAULT_CUSTOMER_NAME, DEFAULT_DISPLAY_AMOUNT,
};

pub async fn send_email(
    State(state): State<Arc<AppState>>,
    JsonFromRequest(dto): JsonFromRequest<SendEmailDto>,
) -> Result<Json<Value>, ApiError> {
    let Some(email) = dto.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) else {
        return Err(MailApiError::EmailRequired.value());
    };

    if let Err(e) = dto.validate() {
        tracing::debug!("send_email invalid dto: {}", e);
        return Err(MailApiError::EmailRequired.value());
    }

    let attachments = service::fetch_attachments(&state).await;
    let attachments_included = attachments.len();

    let purchase_date = time::format_purchase_date(&Utc::now());
    let amount = display_amount(
        dto.amount.as_deref().unwrap_or(DEFAULT_DISPLAY_AMOUNT),
        DEFAULT_CURRENCY,
    );

    let details = PurchaseConfirmation {
        customer_name: dto.name.as_deref().unwrap_or(DEFAULT_CUSTOMER_NAME),
        customer_email: email,
        transaction_id: dto.transaction_id.as_deref().unwrap_or("N/A"),
        purchase_date: &purchase_date,
        amount: &amount,
        product_name: &state.envy.product_name,
        pdf_download_link: &state.envy.pdf_download_link,
        template_download_link: &state.envy.template_download_link,
    };

    let outbound = service::confirmation_email(email, &details, attachments, &state);
    let email_id = service::send_mail(&outbound, &state).await?;

    tracing::info!("confirmation email {} sent", email_id);

    Ok(Json(json!({
        "success": true,
        "emailId": email_id,
        "attachmentsIncluded": attachments_included,
    })))
}
