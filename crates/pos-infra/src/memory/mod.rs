//! In-memory repository implementations - used when no database is configured.

mod reservation_repo;

pub use reservation_repo::InMemoryReservationRepository;
