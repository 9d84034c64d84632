/*
Personal weekly calendar.

Class slots are projected into "cours" events on every read and merged
with the user's own events. The grid is one pixel per minute starting
at 06:00; the hour gutter takes the first eighth of the width and each
day one of the remaining seven columns.
*/

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    CalendarEvent, DAY_LABELS, EventCategory, EventColor, GymClass, day_label,
};
use crate::seed;

pub const GRID_START_HOUR: i32 = 6;
pub const GRID_HOURS: i32 = 18; // 06:00 .. 23:00

const COLUMN_PCT: f64 = 12.5;
const WEEK_EVENT_WIDTH_PCT: f64 = 11.0;
const DAY_EVENT_WIDTH_PCT: f64 = 87.0;

const SHORT_MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

pub fn project_classes(classes: &[GymClass]) -> Vec<CalendarEvent> {
    classes
        .iter()
        .flat_map(|class| {
            class.time_slots.iter().map(move |slot| CalendarEvent {
                id: format!("{}-{}", class.id, slot.id),
                title: class.name.clone(),
                start_time: slot.start_time.clone(),
                end_time: slot.end_time.clone(),
                day: slot.day,
                category: EventCategory::Cours,
                location: Some(class.category.location().to_string()),
                color: class.category.event_color(),
                is_recurring: slot.is_recurring,
            })
        })
        .collect()
}

/// Everything shown on the grid: projected classes (or the demo week when
/// no catalog is stored) followed by the personal events.
pub fn merge_events(
    stored_catalog: Option<&[GymClass]>,
    personal: &[CalendarEvent],
) -> Vec<CalendarEvent> {
    let mut events = match stored_catalog {
        Some(classes) => project_classes(classes),
        None => seed::demo_events(),
    };
    debug!(classes = events.len(), personal = personal.len(), "merged calendar events");
    events.extend(personal.iter().cloned());
    events
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalEventInput {
    pub title: String,
    #[serde(default)]
    pub day: u8,
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_personal_category")]
    pub category: EventCategory,
    #[serde(default)]
    pub location: Option<String>,
}

fn default_personal_category() -> EventCategory {
    EventCategory::Personnel
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("day must be between 0 (Monday) and 6 (Sunday), got {0}")]
    DayOutOfRange(u8),
    #[error("personal events cannot use the class category")]
    ClassCategory,
    #[error("classes cannot be deleted from the calendar; manage them in the admin")]
    ClassEvent,
    #[error("event {0} not found")]
    NotFound(String),
}

pub fn new_personal_event(input: PersonalEventInput) -> Result<CalendarEvent, CalendarError> {
    if input.title.trim().is_empty() {
        return Err(CalendarError::MissingField("title"));
    }
    if input.start_time.trim().is_empty() {
        return Err(CalendarError::MissingField("startTime"));
    }
    if input.end_time.trim().is_empty() {
        return Err(CalendarError::MissingField("endTime"));
    }
    if day_label(input.day).is_none() {
        return Err(CalendarError::DayOutOfRange(input.day));
    }

    let color = match input.category {
        EventCategory::Coaching => EventColor::Green,
        EventCategory::Personnel => EventColor::Blue,
        EventCategory::Cours => return Err(CalendarError::ClassCategory),
    };

    Ok(CalendarEvent {
        id: format!("personal-{}", Uuid::new_v4().simple()),
        title: input.title,
        start_time: input.start_time,
        end_time: input.end_time,
        day: input.day,
        category: input.category,
        location: input.location.filter(|l| !l.trim().is_empty()),
        color,
        is_recurring: false,
    })
}

/// Removes a personal or coaching event. Class events are refused and left
/// in place.
pub fn delete_event(
    shown: &[CalendarEvent],
    personal: &mut Vec<CalendarEvent>,
    id: &str,
) -> Result<CalendarEvent, CalendarError> {
    let event = shown
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| CalendarError::NotFound(id.to_string()))?;

    if event.category == EventCategory::Cours {
        return Err(CalendarError::ClassEvent);
    }

    let pos = personal
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| CalendarError::NotFound(id.to_string()))?;
    Ok(personal.remove(pos))
}

// "HH:MM" (or "H:MM") -> minutes since midnight.
pub fn minutes_of(hhmm: &str) -> Option<i32> {
    let (h, m) = hhmm.trim().split_once(':')?;
    let h: i32 = h.parse().ok()?;
    let m: i32 = m.parse().ok()?;
    if !(0..24).contains(&h) || !(0..60).contains(&m) {
        return None;
    }
    Some(h * 60 + m)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridView {
    Week,
    /// Narrow screens: a single day across the full width.
    Day(u8),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventBox {
    pub event_id: String,
    pub day: u8,
    pub top: i32,    // px from the 06:00 line
    pub height: i32, // px, one per minute
    pub left_pct: f64,
    pub width_pct: f64,
    pub column: usize,
    pub columns: usize,
}

struct Placed {
    index: usize,
    start: i32,
    end: i32,
    column: usize,
    columns: usize,
}

// Side-by-side columns for overlapping events of one day. Events are
// grouped into clusters of transitively overlapping intervals; inside a
// cluster each event takes the first column that is free at its start.
fn pack_columns(placed: &mut [Placed]) {
    placed.sort_by_key(|p| (p.start, p.end));

    let mut cluster_start = 0;
    let mut cluster_end = i32::MIN;
    let mut column_ends: Vec<i32> = Vec::new();

    for i in 0..placed.len() {
        if placed[i].start >= cluster_end && i > 0 {
            let columns = column_ends.len();
            placed[cluster_start..i].iter_mut().for_each(|p| p.columns = columns);
            cluster_start = i;
            column_ends.clear();
        }

        let (start, end) = (placed[i].start, placed[i].end);
        let column = match column_ends.iter().position(|&col_end| col_end <= start) {
            Some(free) => {
                column_ends[free] = end;
                free
            }
            None => {
                column_ends.push(end);
                column_ends.len() - 1
            }
        };
        placed[i].column = column;
        cluster_end = if i == cluster_start { end } else { cluster_end.max(end) };
    }

    let columns = column_ends.len();
    placed[cluster_start..].iter_mut().for_each(|p| p.columns = columns);
}

/// Absolute boxes for the events visible in `view`. Events with an
/// unreadable time or an out-of-range day get no box.
pub fn layout_events(events: &[CalendarEvent], view: GridView) -> Vec<EventBox> {
    let mut boxes = Vec::new();

    for day in 0..DAY_LABELS.len() as u8 {
        if let GridView::Day(selected) = view {
            if selected != day {
                continue;
            }
        }

        let mut placed: Vec<Placed> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.day == day)
            .filter_map(|(index, e)| {
                let start = minutes_of(&e.start_time)?;
                // an end before the start collapses to a zero-height box
                let end = minutes_of(&e.end_time)?.max(start);
                Some(Placed { index, start, end, column: 0, columns: 1 })
            })
            .collect();
        if placed.is_empty() {
            continue;
        }
        pack_columns(&mut placed);

        let (base_left, base_width) = match view {
            GridView::Week => ((day as f64 + 1.0) * COLUMN_PCT, WEEK_EVENT_WIDTH_PCT),
            GridView::Day(_) => (COLUMN_PCT, DAY_EVENT_WIDTH_PCT),
        };

        for p in placed {
            let width = base_width / p.columns as f64;
            boxes.push(EventBox {
                event_id: events[p.index].id.clone(),
                day,
                top: p.start - GRID_START_HOUR * 60,
                height: p.end - p.start,
                left_pct: base_left + p.column as f64 * width,
                width_pct: width,
                column: p.column,
                columns: p.columns,
            });
        }
    }

    boxes
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayColumn {
    pub index: u8,
    pub label: &'static str,
    pub date: NaiveDate,
    pub day_of_month: u32,
    pub is_today: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeekHeader {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub iso_week: u32,
    pub range_label: String,
    pub hours: Vec<String>,
    pub days: Vec<DayColumn>,
}

pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn short_date_fr(date: NaiveDate) -> String {
    format!("{} {}", date.day(), SHORT_MONTHS_FR[date.month0() as usize])
}

/// Header of the Monday-based week containing `reference`.
pub fn week_header(reference: NaiveDate, today: NaiveDate) -> WeekHeader {
    let start = start_of_week(reference);
    let end = start + Duration::days(6);

    let days = DAY_LABELS
        .iter()
        .enumerate()
        .map(|(i, &label)| {
            let date = start + Duration::days(i as i64);
            DayColumn {
                index: i as u8,
                label,
                date,
                day_of_month: date.day(),
                is_today: date == today,
            }
        })
        .collect();

    WeekHeader {
        start,
        end,
        iso_week: reference.iso_week().week(),
        range_label: format!("{} - {}", short_date_fr(start), short_date_fr(end)),
        hours: (GRID_START_HOUR..GRID_START_HOUR + GRID_HOURS)
            .map(|h| format!("{h}:00"))
            .collect(),
        days,
    }
}
