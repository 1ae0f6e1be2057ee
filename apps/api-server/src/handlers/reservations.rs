//! Reservations handlers - bind HTTP requests to the reservations usecase.
//!
//! Usecase failures are returned verbatim in the envelope `message`. Listing
//! failures are server errors, every other usecase failure is a client error.

use std::net::SocketAddr;

use actix_web::{HttpRequest, HttpResponse, web};
use pos_shared::{ApiResponse, ReservationCreateRequest, ReservationUpdateRequest};
use serde::de::DeserializeOwned;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const INVALID_ID: &str = "Invalid reservation ID";

/// GET /api/reservations
pub async fn list_reservations(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    tracing::debug!(
        client_ip = %client_ip(&req),
        peer_addr = %peer_addr(&req),
        "List reservations handler called"
    );

    let reservations = state.reservations.list_all().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to get reservations");
        AppError::Internal(format!("Failed to get reservations: {e}"))
    })?;

    tracing::info!(
        count = reservations.len(),
        "Reservations retrieved successfully"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(
        "Reservations retrieved successfully",
        reservations,
    )))
}

/// POST /api/reservations
pub async fn create_reservation(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let client_ip = client_ip(&req);
    tracing::debug!(
        client_ip = %client_ip,
        peer_addr = %peer_addr(&req),
        "Create reservation handler called"
    );

    let payload: ReservationCreateRequest = decode_body(&body, &client_ip, "create")?;
    let customer_name = payload.customer_name.clone();

    let reservation = state.reservations.create(payload).await.map_err(|e| {
        tracing::error!(customer_name = %customer_name, error = %e, "Failed to create reservation");
        AppError::BadRequest(e.to_string())
    })?;

    tracing::info!(
        id = reservation.id,
        customer_name = %customer_name,
        "Reservation created successfully"
    );

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Reservation created successfully",
        reservation,
    )))
}

/// PUT /api/reservations/{id}
pub async fn update_reservation(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let client_ip = client_ip(&req);
    tracing::debug!(
        client_ip = %client_ip,
        peer_addr = %peer_addr(&req),
        "Update reservation handler called"
    );

    // The id is checked before the body.
    let id = parse_reservation_id(&path)?;
    // A JSON `null` body binds as an empty update.
    let payload: Option<ReservationUpdateRequest> = decode_body(&body, &client_ip, "update")?;
    let payload = payload.unwrap_or_default();

    state.reservations.update(id, payload).await.map_err(|e| {
        tracing::error!(id, error = %e, "Failed to update reservation");
        AppError::BadRequest(e.to_string())
    })?;

    tracing::info!(id, "Reservation updated successfully");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty(
        "Reservation updated successfully",
    )))
}

/// DELETE /api/reservations/{id}
pub async fn delete_reservation(
    req: HttpRequest,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    tracing::debug!(
        client_ip = %client_ip(&req),
        peer_addr = %peer_addr(&req),
        "Delete reservation handler called"
    );

    let id = parse_reservation_id(&path)?;

    state.reservations.delete(id).await.map_err(|e| {
        tracing::error!(id, error = %e, "Failed to delete reservation");
        AppError::BadRequest(e.to_string())
    })?;

    tracing::info!(id, "Reservation deleted successfully");

    Ok(HttpResponse::Ok().json(ApiResponse::ok_empty(
        "Reservation deleted successfully",
    )))
}

/// Caller address, honouring `Forwarded`/`X-Forwarded-For` like the access log does.
/// Those headers are client-controlled; `peer_addr` is the socket peer.
fn client_ip(req: &HttpRequest) -> String {
    let info = req.connection_info();
    match info.realip_remote_addr() {
        Some(addr) => addr
            .parse::<SocketAddr>()
            .map(|socket| socket.ip().to_string())
            .unwrap_or_else(|_| addr.to_string()),
        None => "unknown".to_string(),
    }
}

fn peer_addr(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|socket| socket.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Path ids are unsigned decimal integers without a sign prefix.
fn parse_reservation_id(raw: &str) -> AppResult<u64> {
    let parsed = if raw.starts_with('+') {
        Err("sign prefix not permitted".to_string())
    } else {
        raw.parse::<u64>().map_err(|e| e.to_string())
    };

    parsed.map_err(|e| {
        tracing::warn!(id = %raw, error = %e, "Invalid reservation ID");
        AppError::BadRequest(INVALID_ID.to_string())
    })
}

fn decode_body<T: DeserializeOwned>(body: &[u8], client_ip: &str, action: &str) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(
            client_ip = %client_ip,
            error = %e,
            "Invalid request body for {action} reservation"
        );
        AppError::BadRequest(format!("Invalid request body: {e}"))
    })
}
