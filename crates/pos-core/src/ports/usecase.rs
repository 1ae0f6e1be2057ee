use async_trait::async_trait;
use pos_shared::{ReservationCreateRequest, ReservationUpdateRequest};

use crate::domain::Reservation;
use crate::error::DomainError;

/// Reservations business logic, independent of transport.
///
/// Dropping a returned future abandons the operation; the HTTP layer relies on
/// this to propagate client disconnects.
#[async_trait]
pub trait ReservationsUseCase: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Reservation>, DomainError>;

    async fn create(&self, req: ReservationCreateRequest) -> Result<Reservation, DomainError>;

    async fn update(&self, id: u64, req: ReservationUpdateRequest) -> Result<(), DomainError>;

    async fn delete(&self, id: u64) -> Result<(), DomainError>;
}
