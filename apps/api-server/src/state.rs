//! Application state - shared across all handlers.

use std::sync::Arc;

use pos_core::ports::{ReservationRepository, ReservationsUseCase};
use pos_core::services::ReservationService;
use pos_infra::{DatabaseConfig, DatabaseConnections, InMemoryReservationRepository};

#[cfg(feature = "postgres")]
use pos_infra::PostgresReservationRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub reservations: Arc<dyn ReservationsUseCase>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state, wiring the reservations usecase to Postgres
    /// when configured and reachable, and to in-memory storage otherwise.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let (db, repo) = Self::storage(db_config).await;
        let reservations: Arc<dyn ReservationsUseCase> = Arc::new(ReservationService::new(repo));

        tracing::info!(
            storage = if db.is_some() { "postgres" } else { "memory" },
            "Application state initialized"
        );

        Self { reservations, db }
    }

    /// State around an already-built usecase, without a database.
    #[cfg(test)]
    pub fn with_reservations(reservations: Arc<dyn ReservationsUseCase>) -> Self {
        Self {
            reservations,
            db: None,
        }
    }

    #[cfg(feature = "postgres")]
    async fn storage(
        db_config: Option<&DatabaseConfig>,
    ) -> (
        Option<Arc<DatabaseConnections>>,
        Arc<dyn ReservationRepository>,
    ) {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return (None, Arc::new(InMemoryReservationRepository::new()));
        };

        match DatabaseConnections::init(config).await {
            Ok(connections) => {
                let repo: Arc<dyn ReservationRepository> = Arc::new(
                    PostgresReservationRepository::new(connections.main.clone()),
                );
                (Some(Arc::new(connections)), repo)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Failed to connect to database. Using in-memory fallback."
                );
                let repo: Arc<dyn ReservationRepository> =
                    Arc::new(InMemoryReservationRepository::new());
                (None, repo)
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn storage(
        db_config: Option<&DatabaseConfig>,
    ) -> (
        Option<Arc<DatabaseConnections>>,
        Arc<dyn ReservationRepository>,
    ) {
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        (None, Arc::new(InMemoryReservationRepository::new()))
    }
}

#[cfg(all(test, feature = "postgres"))]
mod tests {
    use pos_shared::ReservationCreateRequest;

    use super::*;

    #[actix_web::test]
    async fn test_unreachable_database_falls_back_to_memory() {
        // No driver accepts this scheme, so connecting fails without I/O.
        let config = DatabaseConfig {
            url: "unsupported://localhost/pos".to_string(),
            max_connections: 1,
            min_connections: 1,
        };

        let state = AppState::new(Some(&config)).await;

        assert!(state.db.is_none());
        let created = state
            .reservations
            .create(ReservationCreateRequest {
                customer_name: "Frank".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(state.reservations.list_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_missing_database_config_uses_memory() {
        let state = AppState::new(None).await;
        assert!(state.db.is_none());
        assert!(state.reservations.list_all().await.unwrap().is_empty());
    }
}
