/*
Reservation derivation.
Reservations are synthesized once from the class catalog (one per
class x time slot) and persisted; afterwards they are only read,
filtered and cancelled.
*/

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{GymClass, Reservation, ReservationStatus, day_label};
use crate::repository::{ClassRepository, ReservationRepository, Stored};
use crate::seed;
use crate::store::StoreError;

/// How generated reservations get their status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    #[default]
    AlwaysConfirmed,
    /// Uniform pick among confirmed / pending / cancelled.
    Random,
}

impl StatusPolicy {
    pub fn pick<R: Rng + ?Sized>(self, rng: &mut R) -> ReservationStatus {
        const ALL: [ReservationStatus; 3] = [
            ReservationStatus::Confirmed,
            ReservationStatus::Pending,
            ReservationStatus::Cancelled,
        ];
        match self {
            StatusPolicy::AlwaysConfirmed => ReservationStatus::Confirmed,
            StatusPolicy::Random => *ALL.choose(rng).unwrap_or(&ReservationStatus::Confirmed),
        }
    }
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Ok(StatusPolicy::AlwaysConfirmed),
            "random" => Ok(StatusPolicy::Random),
            other => Err(format!("unknown reservation status policy: {other}")),
        }
    }
}

// Next date strictly after `today` falling on `day` (0 = Monday).
// Same weekday as today -> one week ahead.
pub fn next_occurrence(today: NaiveDate, day: u8) -> NaiveDate {
    let current = today.weekday().num_days_from_monday() as i64;
    let mut days_to_add = day as i64 - current;
    if days_to_add <= 0 {
        days_to_add += 7;
    }
    today + Duration::days(days_to_add)
}

/// One reservation per (class, slot), in catalog order.
pub fn generate_reservations<R: Rng + ?Sized>(
    classes: &[GymClass],
    today: NaiveDate,
    policy: StatusPolicy,
    rng: &mut R,
) -> Vec<Reservation> {
    let mut reservations = Vec::new();

    for class in classes {
        for slot in &class.time_slots {
            let Some(label) = day_label(slot.day) else {
                warn!(class_id = %class.id, slot_id = %slot.id, day = slot.day, "slot day out of range, skipped");
                continue;
            };
            let date = next_occurrence(today, slot.day);

            reservations.push(Reservation {
                id: format!("res-{}", Uuid::new_v4().simple()),
                class_name: class.name.clone(),
                day: label.to_string(),
                date: date.format("%d/%m/%Y").to_string(),
                time: slot.time_range(),
                trainer: class.trainer.clone(),
                status: policy.pick(rng),
            });
        }
    }

    reservations
}

/// Stored reservations. On first use they are generated from the stored
/// catalog, or taken from the sample list when no catalog was ever saved,
/// and persisted. An unreadable list is replaced by the sample list.
pub fn load_or_generate<R: Rng + ?Sized>(
    reservations: &ReservationRepository,
    classes: &ClassRepository,
    today: NaiveDate,
    policy: StatusPolicy,
    rng: &mut R,
) -> Result<Vec<Reservation>, StoreError> {
    match reservations.load_stored()? {
        Stored::Present(list) => Ok(list),
        Stored::Corrupt => Ok(seed::mock_reservations()),
        Stored::Absent => {
            let list = match classes.load_stored()? {
                Some(catalog) => {
                    let list = generate_reservations(&catalog, today, policy, rng);
                    info!(count = list.len(), "generated reservations from class catalog");
                    list
                }
                None => {
                    info!("no class catalog stored, saving sample reservations");
                    seed::mock_reservations()
                }
            };
            reservations.save(&list)?;
            Ok(list)
        }
    }
}

/// Marks the reservation cancelled. Cancelling twice is a no-op.
/// Returns false when no reservation has this id.
pub fn cancel(list: &mut [Reservation], id: &str) -> bool {
    match list.iter_mut().find(|r| r.id == id) {
        Some(r) => {
            r.status = ReservationStatus::Cancelled;
            true
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Confirmed,
    Pending,
    Cancelled,
}

impl StatusFilter {
    pub fn matches(self, status: ReservationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Confirmed => status == ReservationStatus::Confirmed,
            StatusFilter::Pending => status == ReservationStatus::Pending,
            StatusFilter::Cancelled => status == ReservationStatus::Cancelled,
        }
    }
}

pub fn filter(list: &[Reservation], by: StatusFilter) -> Vec<Reservation> {
    list.iter().filter(|r| by.matches(r.status)).cloned().collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
}

pub fn count_by_status(list: &[Reservation]) -> StatusCounts {
    list.iter().fold(StatusCounts::default(), |mut acc, r| {
        acc.total += 1;
        match r.status {
            ReservationStatus::Confirmed => acc.confirmed += 1,
            ReservationStatus::Pending => acc.pending += 1,
            ReservationStatus::Cancelled => acc.cancelled += 1,
        }
        acc
    })
}
