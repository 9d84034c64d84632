use serde::{Deserialize, Serialize};

/// Day labels indexed by the internal day number (0 = Monday).
pub const DAY_LABELS: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

pub const DEFAULT_CLASS_IMAGE: &str = "/images/classes/default-class.jpg";

pub fn day_label(day: u8) -> Option<&'static str> {
    DAY_LABELS.get(day as usize).copied()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Musculation,
    Cardio,
    Yoga,
    Hiit,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Musculation,
        Category::Cardio,
        Category::Yoga,
        Category::Hiit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Musculation => "musculation",
            Category::Cardio => "cardio",
            Category::Yoga => "yoga",
            Category::Hiit => "hiit",
        }
    }

    // Capitalized like the statistics legend: "Hiit", not "HIIT".
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Musculation => "Musculation",
            Category::Cardio => "Cardio",
            Category::Yoga => "Yoga",
            Category::Hiit => "Hiit",
        }
    }

    /// Room shown on calendar events projected from this category.
    pub fn location(self) -> &'static str {
        match self {
            Category::Musculation => "Salle de musculation",
            Category::Cardio => "Espace cardio",
            Category::Yoga => "Espace zen",
            Category::Hiit => "Salle fitness",
        }
    }

    pub fn event_color(self) -> EventColor {
        match self {
            Category::Musculation => EventColor::Athletis,
            Category::Cardio => EventColor::Orange,
            Category::Yoga => EventColor::Green,
            Category::Hiit => EventColor::Red,
        }
    }

    /// Fill used for this category in the distribution chart.
    pub fn chart_color(self) -> &'static str {
        match self {
            Category::Musculation => "#16a34a",
            Category::Cardio => "#ea580c",
            Category::Yoga => "#059669",
            Category::Hiit => "#dc2626",
        }
    }
}

/// Class difficulty, stored as the bare number 1, 2 or 3.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum Intensity {
    Light,
    Moderate,
    Intense,
}

impl TryFrom<u8> for Intensity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Intensity::Light),
            2 => Ok(Intensity::Moderate),
            3 => Ok(Intensity::Intense),
            other => Err(format!("intensity must be 1, 2 or 3 (got {other})")),
        }
    }
}

impl From<Intensity> for u8 {
    fn from(value: Intensity) -> Self {
        match value {
            Intensity::Light => 1,
            Intensity::Moderate => 2,
            Intensity::Intense => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: String,
    pub day: u8,            // 0..=6, Monday first
    pub start_time: String, // "HH:MM"
    pub end_time: String,   // "HH:MM"
    pub max_participants: u32,
    pub current_participants: u32,
    pub is_recurring: bool,
}

impl TimeSlot {
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GymClass {
    pub id: String,
    pub name: String,
    pub description: String,
    pub trainer: String,
    #[serde(default = "default_image")]
    pub image: String,
    pub intensity: Intensity,
    pub category: Category,
    pub time_slots: Vec<TimeSlot>,
}

fn default_image() -> String {
    DEFAULT_CLASS_IMAGE.to_string()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Cours,
    Personnel,
    Coaching,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Athletis,
    Blue,
    Green,
    Orange,
    Red,
    Purple,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: String,
    pub day: u8,
    pub category: EventCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub color: EventColor,
    pub is_recurring: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub class_name: String,
    pub day: String,  // day label, e.g. "Lundi"
    pub date: String, // "DD/MM/YYYY"
    pub time: String, // "HH:MM - HH:MM"
    pub trainer: String,
    pub status: ReservationStatus,
}
