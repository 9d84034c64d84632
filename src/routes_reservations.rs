use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::models::Reservation;
use crate::reservations::{self, StatusCounts, StatusFilter};
use crate::state::{AppState, today};

#[derive(Debug, Deserialize)]
pub struct ReservationsQuery {
    #[serde(default)]
    pub status: StatusFilter,
}

#[derive(Debug, Serialize)]
pub struct ReservationsResponse {
    pub counts: StatusCounts,
    pub reservations: Vec<Reservation>,
}

fn load(state: &AppState) -> Result<Vec<Reservation>, AppError> {
    let mut rng = rand::thread_rng();
    Ok(reservations::load_or_generate(
        &state.reservations,
        &state.classes,
        today(),
        state.reservation_status,
        &mut rng,
    )?)
}

// -----------------------------
// GET /api/reservations?status=pending
// Generates the list from the catalog on first call
// -----------------------------
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(q): Query<ReservationsQuery>,
) -> Result<Json<ReservationsResponse>, AppError> {
    let list = load(&state)?;

    Ok(Json(ReservationsResponse {
        counts: reservations::count_by_status(&list),
        reservations: reservations::filter(&list, q.status),
    }))
}

// -----------------------------
// POST /api/reservations/:id/cancel
// Idempotent: an already cancelled reservation stays cancelled
// -----------------------------
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Reservation>, AppError> {
    let mut list = load(&state)?;
    if !reservations::cancel(&mut list, &id) {
        return Err(AppError::NotFound(format!("reservation {id} not found")));
    }
    state.reservations.save(&list)?;

    info!(reservation_id = %id, "reservation cancelled");
    let cancelled = list
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| AppError::NotFound(format!("reservation {id} not found")))?;
    Ok(Json(cancelled))
}
