// --------------------------------------------------
// Typed access to the key/value store.
//
// Each repository owns one key and always rewrites the
// whole document: no partial updates, no versioning.
// --------------------------------------------------

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::models::{CalendarEvent, GymClass, Reservation};
use crate::seed;
use crate::store::{
    CLASSES_KEY, KeyValueStore, PERSONAL_EVENTS_KEY, RESERVATIONS_KEY, StoreError,
};

/// What a key held when it was read.
#[derive(Debug, Clone, PartialEq)]
pub enum Stored<T> {
    /// Never written, empty, or the literal `undefined`.
    Absent,
    /// Present but not parseable as the expected document.
    Corrupt,
    Present(T),
}

impl<T> Stored<T> {
    pub fn present(self) -> Option<T> {
        match self {
            Stored::Present(value) => Some(value),
            Stored::Absent | Stored::Corrupt => None,
        }
    }
}

fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Stored<T>, StoreError> {
    let Some(text) = store.get(key)? else {
        return Ok(Stored::Absent);
    };
    if text.is_empty() || text == "undefined" {
        return Ok(Stored::Absent);
    }

    match serde_json::from_str(&text) {
        Ok(value) => Ok(Stored::Present(value)),
        Err(e) => {
            warn!(key, error = %e, "stored document is unreadable, falling back");
            Ok(Stored::Corrupt)
        }
    }
}

fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let text = serde_json::to_string(value)?;
    store.set(key, &text)
}

#[derive(Clone)]
pub struct ClassRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ClassRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The saved catalog, if one was ever written and can be read.
    pub fn load_stored(&self) -> Result<Option<Vec<GymClass>>, StoreError> {
        Ok(read_json(self.store.as_ref(), CLASSES_KEY)?.present())
    }

    /// The saved catalog, or the fallback list when there is none.
    pub fn load(&self) -> Result<Vec<GymClass>, StoreError> {
        Ok(self.load_stored()?.unwrap_or_else(seed::fallback_classes))
    }

    /// Like [`load`](Self::load), but persists the fallback list when it
    /// had to be substituted so later edits start from it.
    pub fn load_for_admin(&self) -> Result<Vec<GymClass>, StoreError> {
        if let Some(classes) = self.load_stored()? {
            return Ok(classes);
        }
        let classes = seed::fallback_classes();
        self.save(&classes)?;
        info!(count = classes.len(), "seeded class catalog");
        Ok(classes)
    }

    pub fn save(&self, classes: &[GymClass]) -> Result<(), StoreError> {
        write_json(self.store.as_ref(), CLASSES_KEY, classes)
    }
}

#[derive(Clone)]
pub struct ReservationRepository {
    store: Arc<dyn KeyValueStore>,
}

impl ReservationRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn load_stored(&self) -> Result<Stored<Vec<Reservation>>, StoreError> {
        read_json(self.store.as_ref(), RESERVATIONS_KEY)
    }

    pub fn save(&self, reservations: &[Reservation]) -> Result<(), StoreError> {
        write_json(self.store.as_ref(), RESERVATIONS_KEY, reservations)
    }
}

#[derive(Clone)]
pub struct PersonalEventRepository {
    store: Arc<dyn KeyValueStore>,
}

impl PersonalEventRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// User-authored events; nothing stored means none.
    pub fn load(&self) -> Result<Vec<CalendarEvent>, StoreError> {
        Ok(read_json(self.store.as_ref(), PERSONAL_EVENTS_KEY)?
            .present()
            .unwrap_or_default())
    }

    pub fn save(&self, events: &[CalendarEvent]) -> Result<(), StoreError> {
        write_json(self.store.as_ref(), PERSONAL_EVENTS_KEY, events)
    }
}
