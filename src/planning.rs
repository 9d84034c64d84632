/*
Planning view: browse classes by category and build a booking intent.
The selected day only drives the highlighted tab; it never filters.
*/

use serde::Serialize;

use crate::models::{Category, GymClass, Intensity, TimeSlot, day_label};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    pub id: String,
    pub day: u8,
    pub day_label: Option<&'static str>,
    pub time_range: String, // "HH:MM - HH:MM"
    pub occupancy: String,  // "current/max"
    pub is_full: bool,
    pub is_recurring: bool,
}

impl From<&TimeSlot> for SlotView {
    fn from(slot: &TimeSlot) -> Self {
        SlotView {
            id: slot.id.clone(),
            day: slot.day,
            day_label: day_label(slot.day),
            time_range: slot.time_range(),
            occupancy: format!("{}/{}", slot.current_participants, slot.max_participants),
            is_full: slot.is_full(),
            is_recurring: slot.is_recurring,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub trainer: String,
    pub image: String,
    pub intensity: Intensity,
    pub category: Category,
    pub slots: Vec<SlotView>,
}

impl From<&GymClass> for ClassCard {
    fn from(class: &GymClass) -> Self {
        ClassCard {
            id: class.id.clone(),
            name: class.name.clone(),
            description: class.description.clone(),
            trainer: class.trainer.clone(),
            image: class.image.clone(),
            intensity: class.intensity,
            category: class.category,
            slots: class.time_slots.iter().map(SlotView::from).collect(),
        }
    }
}

pub fn filter_by_category(classes: &[GymClass], category: Option<Category>) -> Vec<&GymClass> {
    classes
        .iter()
        .filter(|c| category.is_none_or(|wanted| c.category == wanted))
        .collect()
}

pub fn class_cards(classes: &[GymClass], category: Option<Category>) -> Vec<ClassCard> {
    filter_by_category(classes, category)
        .into_iter()
        .map(ClassCard::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    UnknownClass,
    UnknownSlot,
    SlotFull,
    UnknownDay,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIntent {
    pub class_id: String,
    pub class_name: String,
    pub slot_id: String,
    pub day_label: &'static str,
    pub time_range: String,
    pub message: String,
}

/// Builds the confirmation for a selected slot. Nothing is recorded.
///
/// `selected_day` is the highlighted day tab; when absent the slot's own
/// day is shown.
pub fn book(
    classes: &[GymClass],
    class_id: &str,
    slot_id: &str,
    selected_day: Option<u8>,
) -> Result<BookingIntent, BookingError> {
    let class = classes
        .iter()
        .find(|c| c.id == class_id)
        .ok_or(BookingError::UnknownClass)?;
    let slot = class
        .time_slots
        .iter()
        .find(|s| s.id == slot_id)
        .ok_or(BookingError::UnknownSlot)?;

    if slot.is_full() {
        return Err(BookingError::SlotFull);
    }

    let day_label = day_label(selected_day.unwrap_or(slot.day)).ok_or(BookingError::UnknownDay)?;
    let time_range = slot.time_range();
    let message = format!(
        "Réservation confirmée pour le cours \"{}\" le {} à {}",
        class.name, day_label, time_range
    );

    Ok(BookingIntent {
        class_id: class.id.clone(),
        class_name: class.name.clone(),
        slot_id: slot.id.clone(),
        day_label,
        time_range,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::fallback_classes;

    #[test]
    fn yoga_filter_keeps_the_two_yoga_classes() {
        let classes = fallback_classes();
        let yoga = filter_by_category(&classes, Some(Category::Yoga));
        let names: Vec<_> = yoga.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Yoga Flow", "Stretch & Relax"]);
    }

    #[test]
    fn no_category_keeps_everything_in_order() {
        let classes = fallback_classes();
        let cards = class_cards(&classes, None);
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[5].name, "Stretch & Relax");
    }

    #[test]
    fn cards_show_every_slot_with_occupancy() {
        let classes = fallback_classes();
        let cards = class_cards(&classes, Some(Category::Musculation));
        assert_eq!(cards[0].slots.len(), 2);
        assert_eq!(cards[0].slots[0].time_range, "08:00 - 09:30");
        assert_eq!(cards[0].slots[0].occupancy, "8/12");
        assert_eq!(cards[0].slots[1].day_label, Some("Vendredi"));
        assert!(!cards[0].slots[0].is_full);
    }

    #[test]
    fn booking_builds_confirmation_message() {
        let classes = fallback_classes();
        let intent = book(&classes, "1", "1-1", Some(0)).unwrap();
        assert_eq!(
            intent.message,
            "Réservation confirmée pour le cours \"Power Lifting\" le Lundi à 08:00 - 09:30"
        );

        let intent = book(&classes, "3", "3-2", None).unwrap();
        assert_eq!(intent.day_label, "Vendredi");
    }

    #[test]
    fn booking_rejects_full_or_unknown_slots() {
        let mut classes = fallback_classes();
        classes[0].time_slots[0].current_participants = 12;

        assert_eq!(book(&classes, "1", "1-1", None).unwrap_err(), BookingError::SlotFull);
        assert_eq!(book(&classes, "x", "1-1", None).unwrap_err(), BookingError::UnknownClass);
        assert_eq!(book(&classes, "1", "9-9", None).unwrap_err(), BookingError::UnknownSlot);
        assert_eq!(book(&classes, "1", "1-2", Some(8)).unwrap_err(), BookingError::UnknownDay);
    }
}
