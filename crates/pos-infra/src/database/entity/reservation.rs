//! Reservation entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use pos_core::domain::{Reservation, ReservationStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub table_id: Option<i64>,
    pub guest_count: i32,
    pub reservation_time: Option<DateTimeWithTimeZone>,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Reservation {
    fn from(model: Model) -> Self {
        let status = model.status.parse().unwrap_or_else(|_| {
            tracing::warn!(id = model.id, status = %model.status, "Unknown reservation status in storage");
            ReservationStatus::default()
        });

        Self {
            id: model.id,
            customer_name: model.customer_name,
            customer_phone: model.customer_phone,
            table_id: model.table_id,
            guest_count: model.guest_count,
            reservation_time: model.reservation_time.map(Into::into),
            status,
            notes: model.notes,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// A zero id leaves the key unset so the database assigns it on insert.
impl From<Reservation> for ActiveModel {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: if reservation.is_persisted() {
                Set(reservation.id)
            } else {
                NotSet
            },
            customer_name: Set(reservation.customer_name),
            customer_phone: Set(reservation.customer_phone),
            table_id: Set(reservation.table_id),
            guest_count: Set(reservation.guest_count),
            reservation_time: Set(reservation.reservation_time.map(Into::into)),
            status: Set(reservation.status.as_str().to_string()),
            notes: Set(reservation.notes),
            created_at: Set(reservation.created_at.into()),
            updated_at: Set(reservation.updated_at.into()),
        }
    }
}
