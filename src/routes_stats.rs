use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::stats::{self, Statistics};

// -----------------------------
// GET /api/statistics
// -----------------------------
pub async fn get_statistics(State(state): State<AppState>) -> Result<Json<Statistics>, AppError> {
    let catalog = state.classes.load_stored()?;
    Ok(Json(stats::build_statistics(catalog.as_deref())))
}

// -----------------------------
// GET /api/statistics/categories.svg
// Category donut as a standalone image
// -----------------------------
pub async fn get_category_chart(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let catalog = state.classes.load_stored()?;
    let data = match catalog.as_deref() {
        Some(classes) => stats::category_distribution(classes),
        None => stats::demo_category_distribution(),
    };

    Ok((
        [(header::CONTENT_TYPE, "image/svg+xml")],
        stats::render_category_chart(&data),
    ))
}
