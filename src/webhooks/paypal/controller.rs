use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use bytes::Bytes;
use serde_json::{value::RawValue, Value};

use crate::{app::models::api_error::ApiError, webhooks, AppState};

use super::{
    client,
    errors::PayPalApiError,
    service,
    structs::{
        paypal_credentials::PayPalCredentials, transmission_headers::TransmissionHeaders,
    },
};

pub async fn handle_webhook(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    // PayPal verifies the event exactly as it was delivered.
    let raw_event: &RawValue = match serde_json::from_slice(&body) {
        Ok(raw_event) => raw_event,
        Err(e) => {
            tracing::warn!("paypal webhook body is not json: {}", e);
            return Err(PayPalApiError::InvalidJson.value());
        }
    };

    let Some(credentials) = PayPalCredentials::from_envy(&state.envy) else {
        tracing::error!("paypal webhook received but PayPal credentials are not configured");
        return Err(PayPalApiError::Misconfigured.value());
    };

    let Some(transmission) = TransmissionHeaders::from_headers(&headers) else {
        tracing::warn!("paypal webhook missing transmission headers");
        return Err(PayPalApiError::MissingHeaders.value());
    };

    let access_token = client::get_access_token(&credentials, &state).await?;

    let verified = client::verify_webhook_signature(
        &access_token,
        &transmission,
        credentials.webhook_id,
        raw_event,
        &state,
    )
    .await?;

    if !verified {
        tracing::warn!(
            "paypal webhook verification failed for transmission {}",
            transmission.transmission_id
        );
        return Err(PayPalApiError::InvalidSignature.value());
    }

    let event: Value = match serde_json::from_str(raw_event.get()) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("paypal webhook body could not be decoded: {}", e);
            return Err(PayPalApiError::InvalidJson.value());
        }
    };

    let event_id = event["id"].as_str().unwrap_or_default();
    let event_type = event["event_type"].as_str().unwrap_or_default();
    tracing::info!(event_id, event_type, "paypal event verified");

    service::handle_event(event, &state).await;

    Ok(webhooks::acknowledgment())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use mockito::{Matcher, Mock, ServerGuard};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::app::{envy::Envy, router::create_router};

    use super::*;

    fn app(envy: Envy) -> Router {
        create_router(Arc::new(AppState::new(envy).unwrap()))
    }

    fn capture_payload() -> String {
        json!({
            "id": "WH-1",
            "event_type": "PAYMENT.CAPTURE.COMPLETED",
            "resource": {
                "id": "CAP-1",
                "amount": { "value": "10.00", "currency_code": "USD" },
                "payer": {
                    "email_address": "a@b.com",
                    "name": { "given_name": "Ana", "surname": "Pérez" }
                }
            }
        })
        .to_string()
    }

    fn delivery(payload: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/paypal-webhook")
            .header("content-type", "application/json")
            .header("paypal-auth-algo", "SHA256withRSA")
            .header("paypal-cert-url", "https://api.paypal.com/cert.pem")
            .header("paypal-transmission-id", "tx-1")
            .header("paypal-transmission-sig", "sig")
            .header("paypal-transmission-time", "2026-10-19T10:00:00Z")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    async fn mock_paypal(server: &mut ServerGuard, status: &str) -> (Mock, Mock) {
        let token = server
            .mock("POST", "/v1/oauth2/token")
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token":"A21"}"#)
            .create_async()
            .await;
        let verify = server
            .mock("POST", "/v1/notifications/verify-webhook-signature")
            .match_header("authorization", "Bearer A21")
            .with_header("content-type", "application/json")
            .with_body(json!({ "verification_status": status }).to_string())
            .expect(1)
            .create_async()
            .await;

        (token, verify)
    }

    #[tokio::test]
    async fn forwards_verified_capture_once() {
        let mut server = mockito::Server::new_async().await;
        let (_token, verify) = mock_paypal(&mut server, "SUCCESS").await;
        let crm = server
            .mock("POST", "/crm")
            .match_body(Matcher::PartialJson(json!({
                "name": "Ana Pérez",
                "email": "a@b.com",
                "transactionId": "CAP-1",
                "tipo": "PAYPAL",
                "amount": "10.00",
                "estado_pago": "completado",
            })))
            .with_body("ok")
            .expect(1)
            .create_async()
            .await;

        let response = app(Envy::for_tests(&server.url()))
            .oneshot(delivery(&capture_payload()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "received": true }));
        verify.assert_async().await;
        crm.assert_async().await;
    }

    #[tokio::test]
    async fn rejects_failed_verification_without_forwarding() {
        let mut server = mockito::Server::new_async().await;
        let (_token, verify) = mock_paypal(&mut server, "FAILURE").await;
        let crm = server.mock("POST", "/crm").expect(0).create_async().await;

        let response = app(Envy::for_tests(&server.url()))
            .oneshot(delivery(&capture_payload()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        verify.assert_async().await;
        crm.assert_async().await;
    }

    #[tokio::test]
    async fn rejects_missing_headers_without_calling_paypal() {
        let mut server = mockito::Server::new_async().await;
        let token = server
            .mock("POST", "/v1/oauth2/token")
            .expect(0)
            .create_async()
            .await;
        let crm = server.mock("POST", "/crm").expect(0).create_async().await;

        let request = Request::builder()
            .method("POST")
            .uri("/api/paypal-webhook")
            .header("content-type", "application/json")
            .body(Body::from(capture_payload()))
            .unwrap();

        let response = app(Envy::for_tests(&server.url()))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        token.assert_async().await;
        crm.assert_async().await;
    }

    #[tokio::test]
    async fn rejects_invalid_json() {
        let response = app(Envy::for_tests("http://127.0.0.1:9"))
            .oneshot(delivery("{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_credentials_is_server_error() {
        let mut envy = Envy::for_tests("http://127.0.0.1:9");
        envy.paypal_client_id = None;

        let response = app(envy)
            .oneshot(delivery(&capture_payload()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn acknowledges_unrecognized_event_without_forwarding() {
        let mut server = mockito::Server::new_async().await;
        let (_token, verify) = mock_paypal(&mut server, "SUCCESS").await;
        let crm = server.mock("POST", "/crm").expect(0).create_async().await;

        let payload = json!({
            "id": "WH-2",
            "event_type": "PAYMENT.CAPTURE.REFUNDED",
            "resource": { "id": "REF-1" }
        })
        .to_string();

        let response = app(Envy::for_tests(&server.url()))
            .oneshot(delivery(&payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        verify.assert_async().await;
        crm.assert_async().await;
    }

    #[tokio::test]
    async fn acknowledges_when_crm_is_down() {
        let mut server = mockito::Server::new_async().await;
        let (_token, _verify) = mock_paypal(&mut server, "SUCCESS").await;
        let crm = server
            .mock("POST", "/crm")
            .with_status(502)
            .expect(1)
            .create_async()
            .await;

        let response = app(Envy::for_tests(&server.url()))
            .oneshot(delivery(&capture_payload()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        crm.assert_async().await;
    }

    #[tokio::test]
    async fn verifies_event_exactly_as_delivered() {
        let mut server = mockito::Server::new_async().await;
        let payload = concat!(
            r#"{"id":"WH-3","create_time":"2026-10-19T10:00:00Z","#,
            r#""event_type":"PAYMENT.CAPTURE.COMPLETED","#,
            r#""resource":{"id":"CAP-3","amount":{"value":"10.00","currency_code":"USD"}}}"#,
        );
        let expected = format!(r#""webhook_event":{}"#, payload);

        let _token = server
            .mock("POST", "/v1/oauth2/token")
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token":"A21"}"#)
            .create_async()
            .await;
        let verify = server
            .mock("POST", "/v1/notifications/verify-webhook-signature")
            .match_request(move |request| {
                request
                    .utf8_lossy_body()
                    .map(|body| body.contains(&expected))
                    .unwrap_or(false)
            })
            .with_header("content-type", "application/json")
            .with_body(r#"{"verification_status":"SUCCESS"}"#)
            .expect(1)
            .create_async()
            .await;
        let crm = server
            .mock("POST", "/crm")
            .match_body(Matcher::PartialJson(json!({ "transactionId": "CAP-3" })))
            .with_body("ok")
            .expect(1)
            .create_async()
            .await;

        let response = app(Envy::for_tests(&server.url()))
            .oneshot(delivery(payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        verify.assert_async().await;
        crm.assert_async().await;
    }

    #[tokio::test]
    async fn rejects_when_verifier_refuses_request() {
        let mut server = mockito::Server::new_async().await;
        let _token = server
            .mock("POST", "/v1/oauth2/token")
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token":"A21"}"#)
            .create_async()
            .await;
        let verify = server
            .mock("POST", "/v1/notifications/verify-webhook-signature")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name":"VALIDATION_ERROR","message":"Invalid request"}"#)
            .expect(1)
            .create_async()
            .await;
        let crm = server.mock("POST", "/crm").expect(0).create_async().await;

        let response = app(Envy::for_tests(&server.url()))
            .oneshot(delivery(&capture_payload()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        verify.assert_async().await;
        crm.assert_async().await;
    }
}
