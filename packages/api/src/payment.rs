//! Payment gateway callback relay.
//!
//! The gateway POSTs its callback to this app, not to the backend. The relay
//! forwards the body best-effort and always acknowledges with HTTP 200 and
//! the gateway's `{return_code, return_message}` envelope: the gateway's
//! retry behavior keys off that body alone, never off backend success.

use serde::{Deserialize, Serialize};

/// Acknowledgement envelope the gateway requires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAck {
    pub return_code: i32,
    pub return_message: String,
}

impl PaymentAck {
    pub fn ok() -> Self {
        Self {
            return_code: 1,
            return_message: "success".to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            return_code: -1,
            return_message: message.into(),
        }
    }
}

/// Map the forward outcome onto the gateway's envelope.
pub fn ack_for(forward_result: Result<(), String>) -> PaymentAck {
    match forward_result {
        Ok(()) => PaymentAck::ok(),
        Err(message) => PaymentAck::failed(message),
    }
}

/// Decode a raw callback body. The gateway's body is taken as-is off the
/// wire; a truncated or non-JSON payload becomes an `Err` that the relay
/// turns into a `-1` ack rather than a rejected request.
pub fn parse_callback(body: &[u8]) -> Result<serde_json::Value, String> {
    serde_json::from_slice(body).map_err(|e| format!("unparseable callback body: {e}"))
}

/// Forward the gateway's payload to the backend order-processing endpoint.
#[cfg(feature = "server")]
pub async fn forward_callback(
    forward_url: &str,
    body: &serde_json::Value,
) -> Result<(), String> {
    let response = reqwest::Client::new()
        .post(forward_url)
        .json(body)
        .send()
        .await
        .map_err(|e| format!("forward failed: {e}"))?;

    if !response.status().is_success() {
        return Err(format!("backend answered {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_success_is_return_code_1() {
        let ack = ack_for(Ok(()));
        assert_eq!(ack.return_code, 1);
        assert_eq!(ack.return_message, "success");
    }

    #[test]
    fn test_ack_failure_is_return_code_minus_1() {
        let ack = ack_for(Err("backend answered 502 Bad Gateway".to_string()));
        assert_eq!(ack.return_code, -1);
        assert_eq!(ack.return_message, "backend answered 502 Bad Gateway");
    }

    #[test]
    fn test_ack_serializes_gateway_field_names() {
        let json = serde_json::to_value(PaymentAck::ok()).unwrap();
        assert_eq!(json["return_code"], 1);
        assert_eq!(json["return_message"], "success");
    }

    #[test]
    fn test_parse_callback_accepts_gateway_json() {
        let value = parse_callback(br#"{"app_id": 1, "status": "paid"}"#).unwrap();
        assert_eq!(value["status"], "paid");
    }

    #[test]
    fn test_truncated_callback_body_acks_minus_1() {
        let ack = ack_for(parse_callback(br#"{"app_id": 1,"#).map(|_| ()));
        assert_eq!(ack.return_code, -1);
    }

    #[test]
    fn test_form_encoded_callback_body_acks_minus_1() {
        let ack = ack_for(parse_callback(b"app_id=1&status=paid").map(|_| ()));
        assert_eq!(ack.return_code, -1);
    }
}
