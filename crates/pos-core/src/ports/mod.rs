//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure and transport layers plug into.

mod repository;
mod usecase;

pub use repository::{BaseRepository, ReservationRepository};
pub use usecase::ReservationsUseCase;
