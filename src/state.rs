use std::sync::Arc;

use chrono::NaiveDate;

use crate::repository::{ClassRepository, PersonalEventRepository, ReservationRepository};
use crate::reservations::StatusPolicy;
use crate::store::KeyValueStore;

#[derive(Clone)]
pub struct AppState {
    pub classes: ClassRepository,
    pub reservations: ReservationRepository,
    pub personal_events: PersonalEventRepository,
    pub reservation_status: StatusPolicy,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, reservation_status: StatusPolicy) -> Self {
        Self {
            classes: ClassRepository::new(store.clone()),
            reservations: ReservationRepository::new(store.clone()),
            personal_events: PersonalEventRepository::new(store),
            reservation_status,
        }
    }
}

// Local calendar date of the server.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
