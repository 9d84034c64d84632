// --------------------------------------------------
// Class catalog editing.
//
// A class is edited through a draft: fields plus a list of
// staged time slots. Submitting the draft always replaces the
// class's slots with whatever is staged at that moment.
// --------------------------------------------------

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Category, DEFAULT_CLASS_IMAGE, GymClass, Intensity, TimeSlot, day_label};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AdminError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("time slot needs both a start and an end time")]
    MissingSlotTime,
    #[error("day must be between 0 (Monday) and 6 (Sunday), got {0}")]
    DayOutOfRange(u8),
}

fn default_max_participants() -> u32 {
    10
}

fn default_recurring() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotInput {
    // set when re-staging a slot of an existing class
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub day: u8,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default = "default_max_participants")]
    pub max_participants: u32,
    #[serde(default)]
    pub current_participants: u32,
    #[serde(default = "default_recurring")]
    pub is_recurring: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInput {
    pub name: String,
    pub description: String,
    pub trainer: String,
    #[serde(default)]
    pub image: Option<String>,
    pub intensity: Intensity,
    pub category: Category,
    #[serde(default)]
    pub time_slots: Vec<SlotInput>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDraft {
    pub name: String,
    pub description: String,
    pub trainer: String,
    pub image: Option<String>,
    pub intensity: Intensity,
    pub category: Category,
    staged: Vec<TimeSlot>,
}

fn required(value: &str, field: &'static str) -> Result<(), AdminError> {
    if value.trim().is_empty() {
        return Err(AdminError::MissingField(field));
    }
    Ok(())
}

impl ClassDraft {
    /// Validates the form fields and stages every submitted slot.
    pub fn from_input(input: ClassInput) -> Result<Self, AdminError> {
        required(&input.name, "name")?;
        required(&input.description, "description")?;
        required(&input.trainer, "trainer")?;

        let mut draft = ClassDraft {
            name: input.name,
            description: input.description,
            trainer: input.trainer,
            image: input.image,
            intensity: input.intensity,
            category: input.category,
            staged: Vec::new(),
        };
        for slot in input.time_slots {
            draft.stage_slot(slot)?;
        }
        Ok(draft)
    }

    /// Loads an existing class for editing, its slots already staged.
    pub fn from_class(class: &GymClass) -> Self {
        ClassDraft {
            name: class.name.clone(),
            description: class.description.clone(),
            trainer: class.trainer.clone(),
            image: Some(class.image.clone()),
            intensity: class.intensity,
            category: class.category,
            staged: class.time_slots.clone(),
        }
    }

    pub fn staged(&self) -> &[TimeSlot] {
        &self.staged
    }

    pub fn stage_slot(&mut self, input: SlotInput) -> Result<&TimeSlot, AdminError> {
        if input.start_time.trim().is_empty() || input.end_time.trim().is_empty() {
            return Err(AdminError::MissingSlotTime);
        }
        if day_label(input.day).is_none() {
            return Err(AdminError::DayOutOfRange(input.day));
        }

        let id = input
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| format!("ts-{}", Uuid::new_v4().simple()));

        self.staged.push(TimeSlot {
            id,
            day: input.day,
            start_time: input.start_time,
            end_time: input.end_time,
            max_participants: input.max_participants,
            current_participants: input.current_participants,
            is_recurring: input.is_recurring,
        });
        Ok(&self.staged[self.staged.len() - 1])
    }

    pub fn unstage_slot(&mut self, id: &str) -> bool {
        let before = self.staged.len();
        self.staged.retain(|s| s.id != id);
        self.staged.len() != before
    }

    fn into_class(self, id: String) -> GymClass {
        let image = self
            .image
            .filter(|img| !img.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CLASS_IMAGE.to_string());

        GymClass {
            id,
            name: self.name,
            description: self.description,
            trainer: self.trainer,
            image,
            intensity: self.intensity,
            category: self.category,
            time_slots: self.staged,
        }
    }
}

// Creation timestamp in milliseconds, bumped past any id already taken.
pub fn next_class_id(classes: &[GymClass], now_ms: i64) -> String {
    let mut candidate = now_ms;
    while classes.iter().any(|c| c.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

pub fn create_class(classes: &mut Vec<GymClass>, draft: ClassDraft, now_ms: i64) -> GymClass {
    let id = next_class_id(classes, now_ms);
    let class = draft.into_class(id);
    classes.push(class.clone());
    class
}

/// Replaces the class with `id`; its slots become exactly the staged ones.
pub fn update_class(classes: &mut [GymClass], id: &str, draft: ClassDraft) -> Option<GymClass> {
    let existing = classes.iter_mut().find(|c| c.id == id)?;
    *existing = draft.into_class(id.to_string());
    Some(existing.clone())
}

pub fn delete_class(classes: &mut Vec<GymClass>, id: &str) -> bool {
    let before = classes.len();
    classes.retain(|c| c.id != id);
    classes.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::fallback_classes;

    fn slot_input(day: u8, start: &str, end: &str) -> SlotInput {
        SlotInput {
            id: None,
            day,
            start_time: start.into(),
            end_time: end.into(),
            max_participants: 5,
            current_participants: 0,
            is_recurring: true,
        }
    }

    fn input() -> ClassInput {
        ClassInput {
            name: "Test Class".into(),
            description: "Un cours de test".into(),
            trainer: "Coach".into(),
            image: None,
            intensity: Intensity::Moderate,
            category: Category::Cardio,
            time_slots: vec![slot_input(0, "10:00", "11:00")],
        }
    }

    #[test]
    fn create_appends_with_timestamp_id_and_default_image() {
        let mut classes = fallback_classes();
        let draft = ClassDraft::from_input(input()).unwrap();
        let created = create_class(&mut classes, draft, 1_760_600_000_000);

        assert_eq!(classes.len(), 7);
        assert_eq!(created.id, "1760600000000");
        assert_eq!(created.image, DEFAULT_CLASS_IMAGE);
        assert_eq!(created.time_slots.len(), 1);
        assert!(created.time_slots[0].id.starts_with("ts-"));
        assert_eq!(classes.last(), Some(&created));
    }

    #[test]
    fn ids_created_in_the_same_millisecond_stay_unique() {
        let mut classes = Vec::new();
        let a = create_class(&mut classes, ClassDraft::from_input(input()).unwrap(), 5);
        let b = create_class(&mut classes, ClassDraft::from_input(input()).unwrap(), 5);
        assert_eq!(a.id, "5");
        assert_eq!(b.id, "6");
    }

    #[test]
    fn update_overwrites_slots_with_staged_list() {
        let mut classes = fallback_classes();
        let mut draft = ClassDraft::from_class(&classes[0]);
        assert_eq!(draft.staged().len(), 2);

        assert!(draft.unstage_slot("1-2"));
        assert!(!draft.unstage_slot("1-2"));
        draft.stage_slot(slot_input(3, "12:00", "13:00")).unwrap();
        draft.name = "Power Lifting+".into();

        let updated = update_class(&mut classes, "1", draft).unwrap();
        assert_eq!(updated.id, "1");
        assert_eq!(updated.name, "Power Lifting+");
        let ids: Vec<_> = updated.time_slots.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids[0], "1-1");
        assert_eq!(ids.len(), 2);
        assert_eq!(updated.time_slots[1].day, 3);
        assert_eq!(classes[0], updated);
    }

    #[test]
    fn update_of_unknown_class_changes_nothing() {
        let mut classes = fallback_classes();
        let draft = ClassDraft::from_input(input()).unwrap();
        assert!(update_class(&mut classes, "nope", draft).is_none());
        assert_eq!(classes, fallback_classes());
    }

    #[test]
    fn delete_removes_by_id() {
        let mut classes = fallback_classes();
        assert!(delete_class(&mut classes, "3"));
        assert!(!delete_class(&mut classes, "3"));
        assert_eq!(classes.len(), 5);
        assert!(classes.iter().all(|c| c.id != "3"));
    }

    #[test]
    fn required_fields_are_checked() {
        let mut missing_name = input();
        missing_name.name = "  ".into();
        assert_eq!(
            ClassDraft::from_input(missing_name).unwrap_err(),
            AdminError::MissingField("name")
        );

        let mut missing_time = input();
        missing_time.time_slots = vec![slot_input(0, "10:00", "")];
        assert_eq!(
            ClassDraft::from_input(missing_time).unwrap_err(),
            AdminError::MissingSlotTime
        );

        let mut bad_day = input();
        bad_day.time_slots = vec![slot_input(7, "10:00", "11:00")];
        assert_eq!(
            ClassDraft::from_input(bad_day).unwrap_err(),
            AdminError::DayOutOfRange(7)
        );
    }

    #[test]
    fn slot_defaults_apply_when_omitted() {
        let slot: SlotInput =
            serde_json::from_str(r#"{"day": 2, "startTime": "07:00", "endTime": "08:00"}"#).unwrap();
        assert_eq!(slot.max_participants, 10);
        assert_eq!(slot.current_participants, 0);
        assert!(slot.is_recurring);
    }
}
