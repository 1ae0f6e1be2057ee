//! Health check endpoint.

use std::future::Future;
use std::time::Duration;

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

const PING_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub storage: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - reports server status and which storage is live.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let ping = state.db.as_ref().map(|db| db.ping());
    let (status, storage) = storage_status(ping, PING_TIMEOUT).await;
    health_response(status, storage)
}

/// `(status, storage)` for the given database ping; `None` means in-memory storage.
async fn storage_status<F>(ping: Option<F>, timeout: Duration) -> (&'static str, &'static str)
where
    F: Future<Output = Result<(), String>>,
{
    let Some(ping) = ping else {
        return ("ok", "memory");
    };

    match tokio::time::timeout(timeout, ping).await {
        Ok(Ok(())) => ("ok", "postgres"),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Database ping failed");
            ("degraded", "postgres")
        }
        Err(_) => {
            tracing::warn!("Database ping timed out");
            ("degraded", "postgres")
        }
    }
}

fn health_response(status: &'static str, storage: &'static str) -> HttpResponse {
    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        storage,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if status == "ok" {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
