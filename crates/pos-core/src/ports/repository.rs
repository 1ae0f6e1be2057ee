use async_trait::async_trait;

use crate::domain::Reservation;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Reservation repository.
///
/// `save` inserts when the reservation id is `0` and updates otherwise.
#[async_trait]
pub trait ReservationRepository: BaseRepository<Reservation, i64> {
    /// All reservations, ordered by id.
    async fn find_all(&self) -> Result<Vec<Reservation>, RepoError>;
}
