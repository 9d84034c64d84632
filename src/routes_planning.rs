use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::models::{Category, DAY_LABELS, day_label};
use crate::planning::{self, BookingError, BookingIntent, ClassCard};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PlanningQuery {
    pub day: Option<u8>, // 0..=6, highlight only
    pub category: Option<Category>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningResponse {
    pub days: [&'static str; 7],
    pub selected_day: u8,
    pub selected_day_label: &'static str,
    pub category: Option<Category>,
    pub classes: Vec<ClassCard>,
}

// -----------------------------
// GET /api/planning?day=0&category=yoga
// Classes filtered by category; every slot is listed
// -----------------------------
pub async fn get_planning(
    State(state): State<AppState>,
    Query(q): Query<PlanningQuery>,
) -> Result<Json<PlanningResponse>, AppError> {
    let selected_day = q.day.unwrap_or(0);
    let selected_day_label = day_label(selected_day)
        .ok_or_else(|| AppError::Validation(format!("day must be 0..=6, got {selected_day}")))?;

    let classes = state.classes.load()?;

    Ok(Json(PlanningResponse {
        days: DAY_LABELS,
        selected_day,
        selected_day_label,
        category: q.category,
        classes: planning::class_cards(&classes, q.category),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub class_id: String,
    pub slot_id: String,
    #[serde(default)]
    pub day: Option<u8>,
}

impl From<BookingError> for AppError {
    fn from(e: BookingError) -> Self {
        match e {
            BookingError::UnknownClass => AppError::NotFound("class not found".to_string()),
            BookingError::UnknownSlot => AppError::NotFound("time slot not found".to_string()),
            BookingError::SlotFull => AppError::Conflict("time slot is full".to_string()),
            BookingError::UnknownDay => AppError::Validation("day must be 0..=6".to_string()),
        }
    }
}

// -----------------------------
// POST /api/planning/book
// Confirmation only: nothing is stored
// -----------------------------
pub async fn book(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<BookingIntent>, AppError> {
    let classes = state.classes.load()?;
    let intent = planning::book(&classes, &req.class_id, &req.slot_id, req.day)?;

    info!(class_id = %intent.class_id, slot_id = %intent.slot_id, "booking confirmed (not persisted)");
    Ok(Json(intent))
}
