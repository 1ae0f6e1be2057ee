//! Reservation usecase backed by a [`ReservationRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use pos_shared::{ReservationCreateRequest, ReservationUpdateRequest};

use crate::domain::Reservation;
use crate::error::{DomainError, RepoError};
use crate::ports::{BaseRepository, ReservationRepository, ReservationsUseCase};

const ENTITY: &str = "reservation";

pub struct ReservationService {
    repo: Arc<dyn ReservationRepository>,
}

impl ReservationService {
    pub fn new(repo: Arc<dyn ReservationRepository>) -> Self {
        Self { repo }
    }

    fn not_found(id: u64) -> DomainError {
        DomainError::NotFound {
            entity_type: ENTITY,
            id,
        }
    }

    fn validate(reservation: &Reservation) -> Result<(), DomainError> {
        if reservation.customer_name.is_empty() {
            return Err(DomainError::Validation(
                "customer name is required".to_string(),
            ));
        }
        if reservation.guest_count < 1 {
            return Err(DomainError::Validation(
                "guest count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ReservationsUseCase for ReservationService {
    async fn list_all(&self) -> Result<Vec<Reservation>, DomainError> {
        Ok(self.repo.find_all().await?)
    }

    async fn create(&self, req: ReservationCreateRequest) -> Result<Reservation, DomainError> {
        let mut reservation = Reservation::new(
            req.customer_name.trim().to_string(),
            req.guest_count.unwrap_or(1),
        );
        reservation.customer_phone = req.customer_phone;
        reservation.table_id = req.table_id;
        reservation.reservation_time = req.reservation_time;
        reservation.notes = req.notes;

        Self::validate(&reservation)?;

        let saved = self.repo.save(reservation).await?;
        tracing::debug!(id = saved.id, "Reservation persisted");
        Ok(saved)
    }

    async fn update(&self, id: u64, req: ReservationUpdateRequest) -> Result<(), DomainError> {
        let key = i64::try_from(id).map_err(|_| Self::not_found(id))?;
        let mut reservation = self
            .repo
            .find_by_id(key)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        if let Some(name) = req.customer_name {
            reservation.customer_name = name.trim().to_string();
        }
        if let Some(phone) = req.customer_phone {
            reservation.customer_phone = Some(phone);
        }
        if let Some(table_id) = req.table_id {
            reservation.table_id = Some(table_id);
        }
        if let Some(guest_count) = req.guest_count {
            reservation.guest_count = guest_count;
        }
        if let Some(time) = req.reservation_time {
            reservation.reservation_time = Some(time);
        }
        if let Some(status) = req.status {
            reservation.status = status;
        }
        if let Some(notes) = req.notes {
            reservation.notes = Some(notes);
        }

        Self::validate(&reservation)?;
        reservation.updated_at = Utc::now();

        match self.repo.save(reservation).await {
            Ok(_) => Ok(()),
            Err(RepoError::NotFound) => Err(Self::not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: u64) -> Result<(), DomainError> {
        let key = i64::try_from(id).map_err(|_| Self::not_found(id))?;
        match self.repo.delete(key).await {
            Ok(()) => Ok(()),
            Err(RepoError::NotFound) => Err(Self::not_found(id)),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use super::*;
    use pos_shared::ReservationStatus;

    #[derive(Default)]
    struct FakeRepo {
        rows: Mutex<BTreeMap<i64, Reservation>>,
        fail_with_connection: bool,
    }

    #[async_trait]
    impl BaseRepository<Reservation, i64> for FakeRepo {
        async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, RepoError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, mut entity: Reservation) -> Result<Reservation, RepoError> {
            let mut rows = self.rows.lock().unwrap();
            if !entity.is_persisted() {
                entity.id = rows.keys().next_back().copied().unwrap_or(0) + 1;
            }
            rows.insert(entity.id, entity.clone());
            Ok(entity)
        }

        async fn delete(&self, id: i64) -> Result<(), RepoError> {
            self.rows
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    #[async_trait]
    impl ReservationRepository for FakeRepo {
        async fn find_all(&self) -> Result<Vec<Reservation>, RepoError> {
            if self.fail_with_connection {
                return Err(RepoError::Connection("refused".to_string()));
            }
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }
    }

    fn service() -> (ReservationService, Arc<FakeRepo>) {
        let repo = Arc::new(FakeRepo::default());
        (ReservationService::new(repo.clone()), repo)
    }

    fn create_request(name: &str) -> ReservationCreateRequest {
        ReservationCreateRequest {
            customer_name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_defaults() {
        let (service, _) = service();

        let created = service.create(create_request("  Alice ")).await.unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.customer_name, "Alice");
        assert_eq!(created.guest_count, 1);
        assert_eq!(created.status, ReservationStatus::Pending);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let (service, repo) = service();

        let err = service.create(create_request("   ")).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_zero_guests() {
        let (service, _) = service();
        let mut req = create_request("Bob");
        req.guest_count = Some(0);

        let err = service.create(req).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Validation failed: guest count must be at least 1"
        );
    }

    #[tokio::test]
    async fn test_update_applies_present_fields_only() {
        let (service, repo) = service();
        let mut req = create_request("Carol");
        req.customer_phone = Some("555-0101".to_string());
        let created = service.create(req).await.unwrap();

        let update = ReservationUpdateRequest {
            guest_count: Some(6),
            status: Some(ReservationStatus::Confirmed),
            ..Default::default()
        };
        service.update(created.id as u64, update).await.unwrap();

        let stored = repo.rows.lock().unwrap().get(&created.id).cloned().unwrap();
        assert_eq!(stored.guest_count, 6);
        assert_eq!(stored.status, ReservationStatus::Confirmed);
        assert_eq!(stored.customer_phone.as_deref(), Some("555-0101"));
        assert!(stored.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_reservation() {
        let (service, _) = service();

        let err = service
            .update(42, ReservationUpdateRequest::default())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Entity not found: reservation with id 42"
        );
    }

    #[tokio::test]
    async fn test_update_id_out_of_range() {
        let (service, _) = service();

        let err = service
            .update(u64::MAX, ReservationUpdateRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { id, .. } if id == u64::MAX));
    }

    #[tokio::test]
    async fn test_second_delete_reports_not_found() {
        let (service, _) = service();
        let created = service.create(create_request("Dave")).await.unwrap();

        service.delete(created.id as u64).await.unwrap();
        let err = service.delete(created.id as u64).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_surfaces_repository_failure() {
        let repo = Arc::new(FakeRepo {
            fail_with_connection: true,
            ..Default::default()
        });
        let service = ReservationService::new(repo);

        let err = service.list_all().await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Internal error: Database connection failed: refused"
        );
    }
}
