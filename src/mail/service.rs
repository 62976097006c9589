use chrono::Utc;

use crate::{
    app::{
        models::api_error::ApiError,
        util::{reqwest::get_bytes, time},
    },
    purchases::{models::purchase_event::PurchaseEvent, util::display_amount},
    AppState,
};

use super::{
    errors::MailApiError,
    structs::outbound_email::{EmailAttachment, OutboundEmail, SendEmailResponse},
    templates::purchase_confirmation_template::{
        purchase_confirmation_template, PurchaseConfirmation,
    },
    PDF_ATTACHMENT_FILENAME, TEMPLATE_ATTACHMENT_FILENAME,
};

/// Sends through the transactional email API and returns the provider's email id.
pub async fn send_mail(email: &OutboundEmail, state: &AppState) -> Result<String, ApiError> {
    let Some(api_key) = &state.envy.resend_api_key else {
        return Err(MailApiError::NotConfigured.value());
    };

    let url = format!("{}/emails", state.envy.resend_api_url);

    let res = match state
        .http
        .post(&url)
        .bearer_auth(api_key)
        .json(email)
        .send()
        .await
    {
        Ok(res) => res,
        Err(e) => {
            tracing::error!("send_mail request failed: {}", e);
            return Err(MailApiError::SendFailed.value());
        }
    };

    let status = res.status();
    if !status.is_success() {
        let text = res.text().await.unwrap_or_default();
        tracing::error!("send_mail rejected with {}: {}", status, text);
        return Err(MailApiError::SendFailed.value());
    }

    match res.json::<SendEmailResponse>().await {
        Ok(body) => Ok(body.id),
        Err(e) => {
            tracing::error!("send_mail failed to decode response: {}", e);
            Err(MailApiError::SendFailed.value())
        }
    }
}

pub fn confirmation_email(
    to: &str,
    details: &PurchaseConfirmation,
    attachments: Vec<EmailAttachment>,
    state: &AppState,
) -> OutboundEmail {
    let (subject, html) = purchase_confirmation_template(details);

    OutboundEmail {
        from: state.envy.mail_from.to_owned(),
        to: vec![to.to_string()],
        subject,
        html,
        attachments: if attachments.is_empty() {
            None
        } else {
            Some(attachments)
        },
    }
}

pub fn purchase_confirmation_email(event: &PurchaseEvent, state: &AppState) -> OutboundEmail {
    let purchase_date = time::format_purchase_date(&Utc::now());
    let amount = display_amount(&event.amount, &event.currency);

    let details = PurchaseConfirmation {
        customer_name: &event.name,
        customer_email: &event.email,
        transaction_id: &event.transaction_id,
        purchase_date: &purchase_date,
        amount: &amount,
        product_name: &state.envy.product_name,
        pdf_download_link: &state.envy.pdf_download_link,
        template_download_link: &state.envy.template_download_link,
    };

    confirmation_email(&event.email, &details, Vec::new(), state)
}

/// Downloads the guide and the session template concurrently. Files that fail to
/// download are left out.
pub async fn fetch_attachments(state: &AppState) -> Vec<EmailAttachment> {
    let (pdf, template) = futures::future::join(
        get_bytes(&state.http, &state.envy.pdf_download_link),
        get_bytes(&state.http, &state.envy.template_download_link),
    )
    .await;

    let mut attachments = Vec::with_capacity(2);

    for (result, filename) in [
        (pdf, PDF_ATTACHMENT_FILENAME),
        (template, TEMPLATE_ATTACHMENT_FILENAME),
    ] {
        match result {
            Ok(bytes) => attachments.push(EmailAttachment {
                filename: filename.to_string(),
                content: base64::encode(&bytes),
            }),
            Err(_) => tracing::warn!("skipping attachment {}", filename),
        }
    }

    attachments
}
