//! Domain entities - the core business objects.

mod reservation;

pub use reservation::Reservation;
pub use pos_shared::ReservationStatus;
