//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder};

use pos_core::domain::Reservation;
use pos_core::error::RepoError;
use pos_core::ports::ReservationRepository;

use super::entity::reservation::{self, Entity as ReservationEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL reservation repository.
pub type PostgresReservationRepository = PostgresBaseRepository<ReservationEntity>;

#[async_trait]
impl ReservationRepository for PostgresReservationRepository {
    async fn find_all(&self) -> Result<Vec<Reservation>, RepoError> {
        let rows = ReservationEntity::find()
            .order_by_asc(reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = rows.len(), "Loaded reservations");
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
