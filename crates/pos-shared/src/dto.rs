//! Data Transfer Objects - request types for the reservations API.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a reservation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Seated,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Seated => "seated",
            ReservationStatus::Completed => "completed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown reservation status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ReservationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReservationStatus::Pending),
            "confirmed" => Ok(ReservationStatus::Confirmed),
            "seated" => Ok(ReservationStatus::Seated),
            "completed" => Ok(ReservationStatus::Completed),
            "cancelled" => Ok(ReservationStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Request to create a reservation.
///
/// Only `customer_name` is mandatory at the wire level; business rules are
/// checked by the usecase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationCreateRequest {
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub table_id: Option<i64>,
    #[serde(default)]
    pub guest_count: Option<i32>,
    #[serde(default)]
    pub reservation_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to update a reservation. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationUpdateRequest {
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub table_id: Option<i64>,
    #[serde(default)]
    pub guest_count: Option<i32>,
    #[serde(default)]
    pub reservation_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<ReservationStatus>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_needs_only_customer_name() {
        let req: ReservationCreateRequest =
            serde_json::from_str(r#"{"customer_name":"Alice"}"#).unwrap();
        assert_eq!(req.customer_name, "Alice");
        assert!(req.guest_count.is_none());
        assert!(req.reservation_time.is_none());
    }

    #[test]
    fn test_create_request_rejects_missing_name() {
        let err = serde_json::from_str::<ReservationCreateRequest>(r#"{"guest_count":2}"#)
            .unwrap_err();
        assert!(err.to_string().contains("customer_name"));
    }

    #[test]
    fn test_update_request_parses_status() {
        let req: ReservationUpdateRequest =
            serde_json::from_str(r#"{"status":"confirmed","guest_count":4}"#).unwrap();
        assert_eq!(req.status, Some(ReservationStatus::Confirmed));
        assert_eq!(req.guest_count, Some(4));
        assert!(req.customer_name.is_none());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("seated".parse::<ReservationStatus>().unwrap(), ReservationStatus::Seated);
        assert!("unknown".parse::<ReservationStatus>().is_err());
    }
}
