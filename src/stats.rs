/*
Statistics derived from the class catalog.

Only the weekday activity and the category split come from the
catalog; monthly sessions and goals are fixed demo figures.
*/

use std::f64::consts::PI;
use std::fmt::Write as _;

use serde::Serialize;
use tracing::warn;

use crate::models::{Category, DAY_LABELS, GymClass};

const CHART_CENTER: f64 = 50.0;
const CHART_RADIUS: f64 = 40.0;
const OTHER_COLOR: &str = "#6b7280";

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    pub day: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub name: String,
    // None for rows like "Autres" that match no class category
    pub category: Option<Category>,
    pub value: u32, // percent
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthlySessions {
    pub month: &'static str,
    pub sessions: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub name: &'static str,
    pub current: f64,
    pub target: f64,
}

fn share(name: &str, category: Option<Category>, value: u32) -> CategoryShare {
    CategoryShare {
        name: name.to_string(),
        category,
        value,
    }
}

pub fn demo_activity() -> Vec<DayActivity> {
    [("Lun", 3), ("Mar", 2), ("Mer", 4), ("Jeu", 1), ("Ven", 3), ("Sam", 0), ("Dim", 2)]
        .into_iter()
        .map(|(day, value)| DayActivity { day, value })
        .collect()
}

pub fn demo_category_distribution() -> Vec<CategoryShare> {
    vec![
        share("Musculation", Some(Category::Musculation), 45),
        share("Cardio", Some(Category::Cardio), 20),
        share("HIIT", Some(Category::Hiit), 15),
        share("Yoga", Some(Category::Yoga), 10),
        share("Autres", None, 10),
    ]
}

pub fn demo_monthly_sessions() -> Vec<MonthlySessions> {
    [
        ("Jan", 15), ("Fév", 18), ("Mar", 22), ("Avr", 20), ("Mai", 25), ("Juin", 17),
        ("Juil", 16), ("Août", 14), ("Sep", 19), ("Oct", 23), ("Nov", 21), ("Déc", 12),
    ]
    .into_iter()
    .map(|(month, sessions)| MonthlySessions { month, sessions })
    .collect()
}

pub fn demo_goals() -> Vec<Goal> {
    vec![
        Goal { name: "Perte de poids", current: 4.5, target: 10.0 },
        Goal { name: "Musculation", current: 15.0, target: 20.0 },
        Goal { name: "Cardio", current: 8.0, target: 12.0 },
        Goal { name: "Étirements", current: 6.0, target: 15.0 },
    ]
}

/// Share of time slots per category, in order of first appearance.
///
/// Each share is rounded on its own, so the total may be off 100 by up
/// to one point per category.
pub fn category_distribution(classes: &[GymClass]) -> Vec<CategoryShare> {
    let mut counts: Vec<(Category, usize)> = Vec::new();
    let mut total = 0usize;

    for class in classes {
        let slots = class.time_slots.len();
        match counts.iter_mut().find(|(c, _)| *c == class.category) {
            Some((_, count)) => *count += slots,
            None => counts.push((class.category, slots)),
        }
        total += slots;
    }

    if counts.is_empty() || total == 0 {
        return demo_category_distribution();
    }

    counts
        .into_iter()
        .map(|(category, count)| {
            let percent = (count as f64 / total as f64 * 100.0).round() as u32;
            share(category.display_name(), Some(category), percent)
        })
        .collect()
}

/// Number of time slots on each weekday, Monday first.
pub fn activity_by_day(classes: &[GymClass]) -> Vec<DayActivity> {
    let mut buckets = [0u32; 7];

    for class in classes {
        for slot in &class.time_slots {
            match buckets.get_mut(slot.day as usize) {
                Some(bucket) => *bucket += 1,
                None => warn!(class_id = %class.id, day = slot.day, "slot day out of range, not counted"),
            }
        }
    }

    DAY_LABELS
        .iter()
        .zip(buckets)
        .map(|(&day, value)| DayActivity { day, value })
        .collect()
}

// Shade used by the weekly heatmap: 0 = rest day, 4 = busiest.
pub fn heat_level(value: u32) -> u8 {
    value.min(4) as u8
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PieSegment {
    pub name: String,
    pub color: &'static str,
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    pub path: String,
}

fn point_on_circle(angle_deg: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0) * PI / 180.0;
    (
        CHART_CENTER + CHART_RADIUS * rad.cos(),
        CHART_CENTER + CHART_RADIUS * rad.sin(),
    )
}

/// Arc segments of the category donut, clockwise from 12 o'clock.
pub fn pie_segments(data: &[CategoryShare]) -> Vec<PieSegment> {
    let total: u32 = data.iter().map(|c| c.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut current = 0.0;
    data.iter()
        .map(|category| {
            let angle = category.value as f64 / total as f64 * 360.0;
            let (start, end) = (current, current + angle);
            current = end;

            let (x1, y1) = point_on_circle(start);
            let large_arc = angle > 180.0;

            // an arc whose ends coincide draws nothing: split a full ring in two
            let path = if angle >= 360.0 {
                let (xm, ym) = point_on_circle(start + 180.0);
                format!(
                    "M {x1:.3} {y1:.3} A {r} {r} 0 1 1 {xm:.3} {ym:.3} A {r} {r} 0 1 1 {x1:.3} {y1:.3}",
                    r = CHART_RADIUS,
                )
            } else {
                let (x2, y2) = point_on_circle(end);
                format!(
                    "M {x1:.3} {y1:.3} A {r} {r} 0 {flag} 1 {x2:.3} {y2:.3}",
                    r = CHART_RADIUS,
                    flag = u8::from(large_arc),
                )
            };

            PieSegment {
                name: category.name.clone(),
                color: category.category.map_or(OTHER_COLOR, Category::chart_color),
                start_angle: start,
                end_angle: end,
                large_arc,
                path,
            }
        })
        .collect()
}

/// Standalone SVG donut for the category distribution.
pub fn render_category_chart(data: &[CategoryShare]) -> String {
    let mut svg = String::from(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 100 100">"##,
    );
    svg.push_str(r##"<circle cx="50" cy="50" r="40" fill="transparent" stroke="#1f2937" stroke-width="20"/>"##);
    for segment in pie_segments(data) {
        let _ = write!(
            svg,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="20"/>"#,
            segment.path, segment.color
        );
    }
    svg.push_str(r##"<circle cx="50" cy="50" r="30" fill="#1f2937"/>"##);
    let _ = write!(
        svg,
        r#"<text x="50" y="47" text-anchor="middle" dominant-baseline="middle" fill="white" font-size="10" font-weight="bold">{}</text>"#,
        data.len()
    );
    svg.push_str(
        r##"<text x="50" y="57" text-anchor="middle" dominant-baseline="middle" fill="#d1d5db" font-size="6">catégories</text>"##,
    );
    svg.push_str("</svg>");
    svg
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub name: &'static str,
    pub current: f64,
    pub target: f64,
    pub percent: u32,
}

pub fn goal_progress(goal: &Goal) -> GoalProgress {
    let percent = if goal.target > 0.0 {
        ((goal.current / goal.target * 100.0).round() as u32).min(100)
    } else {
        0
    };
    GoalProgress {
        name: goal.name,
        current: goal.current,
        target: goal.target,
        percent,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_monthly_sessions: u32,
    pub average_monthly_sessions: u32,
    pub most_active_month: Option<&'static str>,
    pub consistency_score: u32,
}

pub fn summarize(monthly: &[MonthlySessions], activity: &[DayActivity]) -> Summary {
    let total: u32 = monthly.iter().map(|m| m.sessions).sum();
    let average = if monthly.is_empty() {
        0
    } else {
        (total as f64 / monthly.len() as f64).round() as u32
    };

    // ties go to the later month
    let most_active = monthly
        .iter()
        .reduce(|best, m| if best.sessions > m.sessions { best } else { m })
        .map(|m| m.month);

    let active_days = activity.iter().filter(|d| d.value > 0).count();
    let consistency = if activity.is_empty() {
        0
    } else {
        (active_days as f64 / activity.len() as f64 * 100.0).round() as u32
    };

    Summary {
        total_monthly_sessions: total,
        average_monthly_sessions: average,
        most_active_month: most_active,
        consistency_score: consistency,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapDay {
    pub day: &'static str,
    pub value: u32,
    pub level: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub derived: bool,
    pub activity: Vec<HeatmapDay>,
    pub categories: Vec<CategoryShare>,
    pub pie: Vec<PieSegment>,
    pub monthly: Vec<MonthlySessions>,
    pub goals: Vec<GoalProgress>,
    pub summary: Summary,
}

/// The statistics page. Without a stored catalog the weekday activity and
/// the category split fall back to the demo figures too.
pub fn build_statistics(stored_catalog: Option<&[GymClass]>) -> Statistics {
    let (activity, categories) = match stored_catalog {
        Some(classes) => (activity_by_day(classes), category_distribution(classes)),
        None => (demo_activity(), demo_category_distribution()),
    };
    let monthly = demo_monthly_sessions();
    let summary = summarize(&monthly, &activity);

    Statistics {
        derived: stored_catalog.is_some(),
        pie: pie_segments(&categories),
        activity: activity
            .into_iter()
            .map(|d| HeatmapDay { day: d.day, value: d.value, level: heat_level(d.value) })
            .collect(),
        categories,
        monthly,
        goals: demo_goals().iter().map(goal_progress).collect(),
        summary,
    }
}
