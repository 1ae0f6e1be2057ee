//! Observability module - request correlation.

mod request_id;

pub use request_id::propagate_request_id;
