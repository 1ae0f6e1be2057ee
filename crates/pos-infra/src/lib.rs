//! # POS Infrastructure
//!
//! Concrete implementations of the repository ports defined in `pos-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - No external dependencies, in-memory only

pub mod database;
pub mod memory;

pub use database::{DatabaseConfig, DatabaseConnections};
pub use memory::InMemoryReservationRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresReservationRepository;
