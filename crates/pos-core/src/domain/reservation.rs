use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ReservationStatus;

/// Reservation entity - a table booking for a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub table_id: Option<i64>,
    pub guest_count: i32,
    pub reservation_time: Option<DateTime<Utc>>,
    pub status: ReservationStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a not-yet-persisted pending reservation; storage assigns the id.
    pub fn new(customer_name: String, guest_count: i32) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            customer_name,
            customer_phone: None,
            table_id: None,
            guest_count,
            reservation_time: None,
            status: ReservationStatus::Pending,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
