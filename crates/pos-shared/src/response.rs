//! Uniform API response envelope: `{"status": bool, "message": string, "data": T|null}`.

use serde::{Deserialize, Serialize};

/// Envelope wrapping every reservations API response.
///
/// `data` is always present on the wire and serializes to `null` when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with `data: null`.
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: None,
        }
    }

    /// Failed response with `data: null`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_data_serializes_as_null() {
        let body = serde_json::to_value(ApiResponse::ok_empty("done")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": true, "message": "done", "data": null})
        );
    }

    #[test]
    fn test_failure_envelope() {
        let body = serde_json::to_value(ApiResponse::failure("Invalid reservation ID")).unwrap();
        assert_eq!(body["status"], false);
        assert_eq!(body["message"], "Invalid reservation ID");
        assert!(body["data"].is_null());
    }

    #[test]
    fn test_ok_wraps_payload() {
        let body = serde_json::to_value(ApiResponse::ok("listed", vec![1, 2, 3])).unwrap();
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
    }
}
