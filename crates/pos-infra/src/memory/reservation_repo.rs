//! In-memory reservation repository - fallback when Postgres is unavailable.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pos_core::domain::Reservation;
use pos_core::error::RepoError;
use pos_core::ports::{BaseRepository, ReservationRepository};

#[derive(Default)]
struct Store {
    rows: BTreeMap<i64, Reservation>,
    last_id: i64,
}

/// Reservation storage in a `BTreeMap` behind an async `RwLock`.
///
/// Ids are assigned from a counter and never reused. Data is lost on restart.
#[derive(Default)]
pub struct InMemoryReservationRepository {
    store: RwLock<Store>,
}

impl InMemoryReservationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Reservation, i64> for InMemoryReservationRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Reservation>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn save(&self, mut entity: Reservation) -> Result<Reservation, RepoError> {
        let mut store = self.store.write().await;

        if entity.is_persisted() {
            if !store.rows.contains_key(&entity.id) {
                return Err(RepoError::NotFound);
            }
        } else {
            store.last_id += 1;
            entity.id = store.last_id;
        }

        store.rows.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn find_all(&self) -> Result<Vec<Reservation>, RepoError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let repo = InMemoryReservationRepository::new();

        let first = repo.save(Reservation::new("Alice".into(), 2)).await.unwrap();
        let second = repo.save(Reservation::new("Bob".into(), 4)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryReservationRepository::new();
        let first = repo.save(Reservation::new("Alice".into(), 2)).await.unwrap();

        repo.delete(first.id).await.unwrap();
        let next = repo.save(Reservation::new("Bob".into(), 2)).await.unwrap();

        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_update_of_missing_row() {
        let repo = InMemoryReservationRepository::new();
        let mut ghost = Reservation::new("Ghost".into(), 1);
        ghost.id = 5;

        let err = repo.save(ghost).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_row() {
        let repo = InMemoryReservationRepository::new();
        assert!(matches!(repo.delete(1).await, Err(RepoError::NotFound)));
    }
}
