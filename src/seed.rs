/*
Fallback data used when nothing (or nothing readable) is stored yet.
*/

use crate::models::{
    CalendarEvent, Category, EventCategory, EventColor, GymClass, Intensity, Reservation,
    ReservationStatus, TimeSlot,
};

fn slot(id: &str, day: u8, start: &str, end: &str, max: u32, current: u32) -> TimeSlot {
    TimeSlot {
        id: id.to_string(),
        day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        max_participants: max,
        current_participants: current,
        is_recurring: false,
    }
}

#[allow(clippy::too_many_arguments)]
fn class(
    id: &str,
    name: &str,
    description: &str,
    trainer: &str,
    image: &str,
    intensity: Intensity,
    category: Category,
    time_slots: Vec<TimeSlot>,
) -> GymClass {
    GymClass {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        trainer: trainer.to_string(),
        image: image.to_string(),
        intensity,
        category,
        time_slots,
    }
}

/// The six classes shown when the catalog has never been saved.
pub fn fallback_classes() -> Vec<GymClass> {
    vec![
        class(
            "1",
            "Power Lifting",
            "Cours de musculation intensif pour améliorer votre force et votre puissance.",
            "Thomas Renault",
            "/images/classes/power-lifting.jpg",
            Intensity::Intense,
            Category::Musculation,
            vec![
                slot("1-1", 0, "08:00", "09:30", 12, 8),
                slot("1-2", 4, "18:00", "19:30", 12, 10),
            ],
        ),
        class(
            "2",
            "Cardio Box",
            "Un mélange explosif de boxe et de cardio pour brûler un maximum de calories.",
            "Sophie Martin",
            "/images/classes/cardio-box.jpg",
            Intensity::Intense,
            Category::Cardio,
            vec![
                slot("2-1", 1, "10:00", "11:00", 15, 12),
                slot("2-2", 5, "17:00", "18:00", 15, 7),
            ],
        ),
        class(
            "3",
            "Yoga Flow",
            "Séance de yoga dynamique pour améliorer votre souplesse et votre équilibre.",
            "Léa Dubois",
            "/images/classes/yoga-flow.jpg",
            Intensity::Light,
            Category::Yoga,
            vec![
                slot("3-1", 0, "07:00", "08:00", 20, 15),
                slot("3-2", 4, "19:30", "20:30", 20, 18),
            ],
        ),
        class(
            "4",
            "HIIT Challenge",
            "Entraînement par intervalles à haute intensité pour des résultats rapides.",
            "Marc Leblanc",
            "/images/classes/hiit.jpg",
            Intensity::Intense,
            Category::Hiit,
            vec![
                slot("4-1", 2, "12:00", "13:00", 15, 14),
                slot("4-2", 5, "19:00", "20:00", 15, 9),
            ],
        ),
        class(
            "5",
            "Core Training",
            "Cours axé sur le renforcement des abdominaux et du dos.",
            "Julien Bernard",
            "/images/classes/core.jpg",
            Intensity::Moderate,
            Category::Musculation,
            vec![
                slot("5-1", 1, "09:00", "10:00", 18, 12),
                slot("5-2", 5, "17:30", "18:30", 18, 16),
            ],
        ),
        class(
            "6",
            "Stretch & Relax",
            "Session d'étirements pour améliorer la récupération et réduire les courbatures.",
            "Emma Petit",
            "/images/classes/stretch.jpg",
            Intensity::Light,
            Category::Yoga,
            vec![
                slot("6-1", 2, "11:00", "12:00", 20, 16),
                slot("6-2", 6, "20:30", "21:30", 20, 13),
            ],
        ),
    ]
}

fn reservation(
    id: &str,
    class_name: &str,
    day: &str,
    date: &str,
    time: &str,
    trainer: &str,
    status: ReservationStatus,
) -> Reservation {
    Reservation {
        id: id.to_string(),
        class_name: class_name.to_string(),
        day: day.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        trainer: trainer.to_string(),
        status,
    }
}

/// Shown when the stored reservation list cannot be read.
pub fn mock_reservations() -> Vec<Reservation> {
    vec![
        reservation(
            "res-001",
            "Power Lifting",
            "Lundi",
            "22/03/2025",
            "18:00 - 19:30",
            "Thomas Renault",
            ReservationStatus::Confirmed,
        ),
        reservation(
            "res-002",
            "Yoga Flow",
            "Mercredi",
            "24/03/2025",
            "07:00 - 08:00",
            "Léa Dubois",
            ReservationStatus::Pending,
        ),
        reservation(
            "res-003",
            "HIIT Challenge",
            "Vendredi",
            "26/03/2025",
            "19:00 - 20:00",
            "Marc Leblanc",
            ReservationStatus::Confirmed,
        ),
        reservation(
            "res-004",
            "Cardio Box",
            "Samedi",
            "27/03/2025",
            "10:00 - 11:00",
            "Sophie Martin",
            ReservationStatus::Cancelled,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    start: &str,
    end: &str,
    day: u8,
    category: EventCategory,
    location: Option<&str>,
    color: EventColor,
) -> CalendarEvent {
    CalendarEvent {
        id: id.to_string(),
        title: title.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        day,
        category,
        location: location.map(str::to_string),
        color,
        is_recurring: false,
    }
}

/// Calendar content used when no class catalog is stored.
pub fn demo_events() -> Vec<CalendarEvent> {
    use EventCategory::*;

    vec![
        event("event-1", "Power Lifting", "18:00", "19:30", 0, Cours, Some("Salle principale"), EventColor::Athletis),
        event("event-2", "Cardio Box", "17:00", "18:00", 1, Cours, Some("Salle de combat"), EventColor::Athletis),
        event("event-3", "Yoga Flow", "7:00", "8:00", 2, Cours, Some("Espace zen"), EventColor::Athletis),
        event("event-4", "Entraînement Jambes", "16:00", "17:30", 3, Personnel, None, EventColor::Blue),
        event("event-5", "Coaching Personnalisé", "10:00", "11:00", 5, Coaching, Some("Espace coaching"), EventColor::Green),
        event("event-6", "HIIT Challenge", "19:00", "20:00", 4, Cours, Some("Salle fitness"), EventColor::Athletis),
    ]
}
