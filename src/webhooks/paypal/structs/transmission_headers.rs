use axum::http::HeaderMap;

use crate::webhooks::paypal::PayPalHeader;

/// Signature material PayPal sends with every webhook delivery.
#[derive(Debug, PartialEq, Eq)]
pub struct TransmissionHeaders {
    pub auth_algo: String,
    pub cert_url: String,
    pub transmission_id: String,
    pub transmission_sig: String,
    pub transmission_time: String,
}

impl TransmissionHeaders {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let get = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .filter(|value| !value.is_empty())
                .map(|value| value.to_string())
        };

        Some(Self {
            auth_algo: get(PayPalHeader::AUTH_ALGO)?,
            cert_url: get(PayPalHeader::CERT_URL)?,
            transmission_id: get(PayPalHeader::TRANSMISSION_ID)?,
            transmission_sig: get(PayPalHeader::TRANSMISSION_SIG)?,
            transmission_time: get(PayPalHeader::TRANSMISSION_TIME)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(PayPalHeader::AUTH_ALGO, HeaderValue::from_static("SHA256withRSA"));
        headers.insert(
            PayPalHeader::CERT_URL,
            HeaderValue::from_static("https://api.paypal.com/cert.pem"),
        );
        headers.insert(PayPalHeader::TRANSMISSION_ID, HeaderValue::from_static("tx-1"));
        headers.insert(PayPalHeader::TRANSMISSION_SIG, HeaderValue::from_static("sig"));
        headers.insert(
            PayPalHeader::TRANSMISSION_TIME,
            HeaderValue::from_static("2026-10-19T10:00:00Z"),
        );
        headers
    }

    #[test]
    fn reads_all_transmission_headers() {
        let transmission = TransmissionHeaders::from_headers(&headers()).unwrap();

        assert_eq!(transmission.auth_algo, "SHA256withRSA");
        assert_eq!(transmission.transmission_id, "tx-1");
        assert_eq!(transmission.transmission_time, "2026-10-19T10:00:00Z");
    }

    #[test]
    fn missing_header_yields_none() {
        let mut headers = headers();
        headers.remove(PayPalHeader::TRANSMISSION_SIG);

        assert!(TransmissionHeaders::from_headers(&headers).is_none());
    }
}
