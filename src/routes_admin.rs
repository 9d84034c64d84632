// --------------------------------------------------
// Handles API endpoints of the admin class editor.
//
// Responsibilities:
// - List the catalog (seeding it on first visit)
// - Create / update / delete classes
// Every change rewrites the whole catalog.
// --------------------------------------------------

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use tracing::info;

use crate::admin::{self, ClassDraft, ClassInput};
use crate::error::AppError;
use crate::models::GymClass;
use crate::state::AppState;

// -----------------------------
// GET /api/classes
// Read-only catalog, fallback list when nothing is saved
// -----------------------------
pub async fn get_classes(State(state): State<AppState>) -> Result<Json<Vec<GymClass>>, AppError> {
    Ok(Json(state.classes.load()?))
}

// -----------------------------
// GET /api/admin/classes
// Catalog as seen by the editor; persists the fallback list if needed
// -----------------------------
pub async fn list_classes(State(state): State<AppState>) -> Result<Json<Vec<GymClass>>, AppError> {
    Ok(Json(state.classes.load_for_admin()?))
}

// -----------------------------
// POST /api/admin/classes
// Appends a new class, id = creation timestamp
// -----------------------------
pub async fn create_class(
    State(state): State<AppState>,
    Json(input): Json<ClassInput>,
) -> Result<impl IntoResponse, AppError> {
    let draft = ClassDraft::from_input(input).map_err(|e| AppError::Validation(e.to_string()))?;

    let mut classes = state.classes.load_for_admin()?;
    let now_ms = chrono::Utc::now().timestamp_millis();
    let created = admin::create_class(&mut classes, draft, now_ms);
    state.classes.save(&classes)?;

    info!(class_id = %created.id, name = %created.name, slots = created.time_slots.len(), "class created");
    Ok((StatusCode::CREATED, Json(created)))
}

// -----------------------------
// PUT /api/admin/classes/:id
// Replaces a class; its slots become the submitted list
// -----------------------------
pub async fn update_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ClassInput>,
) -> Result<Json<GymClass>, AppError> {
    let draft = ClassDraft::from_input(input).map_err(|e| AppError::Validation(e.to_string()))?;

    let mut classes = state.classes.load_for_admin()?;
    let updated = admin::update_class(&mut classes, &id, draft)
        .ok_or_else(|| AppError::NotFound(format!("class {id} not found")))?;
    state.classes.save(&classes)?;

    info!(class_id = %id, slots = updated.time_slots.len(), "class updated");
    Ok(Json(updated))
}

// -----------------------------
// DELETE /api/admin/classes/:id
// -----------------------------
pub async fn delete_class(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut classes = state.classes.load_for_admin()?;
    if !admin::delete_class(&mut classes, &id) {
        return Err(AppError::NotFound(format!("class {id} not found")));
    }
    state.classes.save(&classes)?;

    info!(class_id = %id, "class deleted");
    Ok(Json(json!({ "ok": true })))
}
