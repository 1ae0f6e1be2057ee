//! # POS Shared
//!
//! Wire types shared by the API server and the domain layer: request DTOs and
//! the `{status, message, data}` response envelope.

pub mod dto;
pub mod response;

pub use dto::{ReservationCreateRequest, ReservationStatus, ReservationUpdateRequest};
pub use response::ApiResponse;
