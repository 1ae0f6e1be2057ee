//! Usecase implementations over the repository ports.

mod reservations;

pub use reservations::ReservationService;
