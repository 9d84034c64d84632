use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calendar::{
    self, CalendarError, EventBox, GridView, PersonalEventInput, WeekHeader,
};
use crate::error::AppError;
use crate::models::{CalendarEvent, day_label};
use crate::state::{AppState, today};

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub date: Option<String>, // "YYYY-MM-DD", defaults to today
    #[serde(default)]
    pub week: i64, // weeks relative to `date`
    pub day: Option<u8>, // single-day view
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub week: WeekHeader,
    pub events: Vec<CalendarEvent>,
    pub boxes: Vec<EventBox>,
}

impl From<CalendarError> for AppError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::NotFound(_) => AppError::NotFound(e.to_string()),
            _ => AppError::Validation(e.to_string()),
        }
    }
}

fn shown_events(state: &AppState) -> Result<(Vec<CalendarEvent>, Vec<CalendarEvent>), AppError> {
    let personal = state.personal_events.load()?;
    let catalog = state.classes.load_stored()?;
    let shown = calendar::merge_events(catalog.as_deref(), &personal);
    Ok((shown, personal))
}

// -----------------------------
// GET /api/calendar?date=2026-10-16&week=1&day=3
// Week header, merged events and their grid boxes
// -----------------------------
pub async fn get_calendar(
    State(state): State<AppState>,
    Query(q): Query<CalendarQuery>,
) -> Result<Json<CalendarResponse>, AppError> {
    let today = today();
    let base = match q.date.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("invalid date".to_string()))?,
        None => today,
    };
    let reference = Duration::try_weeks(q.week)
        .and_then(|offset| base.checked_add_signed(offset))
        .ok_or_else(|| AppError::Validation("week offset out of range".to_string()))?;

    let view = match q.day {
        Some(day) if day_label(day).is_some() => GridView::Day(day),
        Some(day) => return Err(AppError::Validation(format!("day must be 0..=6, got {day}"))),
        None => GridView::Week,
    };

    let (events, _) = shown_events(&state)?;
    let boxes = calendar::layout_events(&events, view);

    Ok(Json(CalendarResponse {
        week: calendar::week_header(reference, today),
        events,
        boxes,
    }))
}

// -----------------------------
// POST /api/calendar/events
// Adds a personal or coaching event
// -----------------------------
pub async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<PersonalEventInput>,
) -> Result<impl IntoResponse, AppError> {
    let event = calendar::new_personal_event(input)?;

    let mut personal = state.personal_events.load()?;
    personal.push(event.clone());
    state.personal_events.save(&personal)?;

    info!(event_id = %event.id, day = event.day, "personal event added");
    Ok((StatusCode::CREATED, Json(event)))
}

// -----------------------------
// DELETE /api/calendar/events/:id
// Class events are refused; manage those in the admin
// -----------------------------
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CalendarEvent>, AppError> {
    let (shown, mut personal) = shown_events(&state)?;

    let removed = calendar::delete_event(&shown, &mut personal, &id).inspect_err(|e| {
        if *e == CalendarError::ClassEvent {
            warn!(event_id = %id, "refused to delete a class from the calendar");
        }
    })?;
    state.personal_events.save(&personal)?;

    info!(event_id = %id, "personal event deleted");
    Ok(Json(removed))
}
