//! Watering schedule calculations.
//!
//! Everything here is derived on demand from a plant's `last_watered` and
//! `watering_frequency`; nothing is stored. The free functions take `now`
//! explicitly, while [`ScheduleService`] reads it from a [`Clock`].
//!
//! [`status_label`] is the only place that decides how a plant's status is
//! worded. Callers that need the status go through it (or through
//! [`WateringStatus`]) instead of comparing day counts themselves.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::domain::clock::Clock;
use crate::domain::models::plant::{Plant, PlantType};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Shown for plant types outside the known set
pub const FALLBACK_EMOJI: &str = "🪴";

/// Instant at which the plant is next due
pub fn next_watering_instant(last_watered: DateTime<Utc>, frequency_days: u32) -> DateTime<Utc> {
    last_watered + Duration::days(i64::from(frequency_days))
}

/// Calendar date on which the plant is next due
pub fn next_watering_date(last_watered: DateTime<Utc>, frequency_days: u32) -> NaiveDate {
    next_watering_instant(last_watered, frequency_days).date_naive()
}

/// Whole days until the next watering, rounded up
///
/// Partial days count toward the future boundary, so a plant due in
/// 30 minutes is "due in 1 day" and one that became due 30 minutes ago is
/// "due today". Negative values mean overdue by that many days.
pub fn days_until_watering(
    last_watered: DateTime<Utc>,
    frequency_days: u32,
    now: DateTime<Utc>,
) -> i64 {
    let diff = (next_watering_instant(last_watered, frequency_days) - now).num_milliseconds();
    ceil_div(diff, MILLIS_PER_DAY)
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator.div_euclid(denominator);
    if numerator.rem_euclid(denominator) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

pub fn is_overdue(days_until: i64) -> bool {
    days_until < 0
}

/// Where a plant stands relative to its next watering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WateringStatus {
    /// Overdue by this many days
    Overdue(u64),
    DueToday,
    /// Due in this many days
    DueIn(u64),
}

impl WateringStatus {
    pub fn from_days(days_until: i64) -> Self {
        if is_overdue(days_until) {
            WateringStatus::Overdue(days_until.unsigned_abs())
        } else if days_until == 0 {
            WateringStatus::DueToday
        } else {
            WateringStatus::DueIn(days_until.unsigned_abs())
        }
    }

    /// True for plants that should be watered now
    pub fn needs_water(&self) -> bool {
        !matches!(self, WateringStatus::DueIn(_))
    }
}

impl fmt::Display for WateringStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WateringStatus::Overdue(days) => write!(f, "Overdue by {} days", days),
            WateringStatus::DueToday => f.write_str("Due today"),
            WateringStatus::DueIn(days) => write!(f, "Due in {} days", days),
        }
    }
}

/// Display label for a day count: "Overdue by N days", "Due today" or "Due in N days"
pub fn status_label(days_until: i64) -> String {
    WateringStatus::from_days(days_until).to_string()
}

/// Emoji for a plant type key, ignoring case
pub fn emoji_for(plant_type: &str) -> &'static str {
    PlantType::parse(plant_type)
        .map(|kind| kind.emoji())
        .unwrap_or(FALLBACK_EMOJI)
}

/// Format a date the way plant cards show the next watering, e.g. "Oct 19, 2026"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a date without the year, e.g. "Oct 19"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Schedule figures for one plant at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct PlantSchedule {
    pub days_until: i64,
    pub is_overdue: bool,
    pub status: WateringStatus,
    pub next_watering_date: NaiveDate,
}

impl PlantSchedule {
    pub fn compute(plant: &Plant, now: DateTime<Utc>) -> Self {
        let days_until = days_until_watering(plant.last_watered, plant.watering_frequency, now);
        Self {
            days_until,
            is_overdue: is_overdue(days_until),
            status: WateringStatus::from_days(days_until),
            next_watering_date: next_watering_date(plant.last_watered, plant.watering_frequency),
        }
    }

    pub fn label(&self) -> String {
        self.status.to_string()
    }
}

/// Service that evaluates schedules against the current time
#[derive(Clone)]
pub struct ScheduleService {
    clock: Arc<dyn Clock>,
}

impl ScheduleService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Schedule for a single plant as of now
    pub fn status_for(&self, plant: &Plant) -> PlantSchedule {
        PlantSchedule::compute(plant, self.clock.now())
    }

    /// Schedules for every plant, in list order
    pub fn statuses(&self, plants: &[Plant]) -> Vec<(Plant, PlantSchedule)> {
        let now = self.clock.now();
        plants
            .iter()
            .map(|plant| (plant.clone(), PlantSchedule::compute(plant, now)))
            .collect()
    }

    /// Plants that are due today or overdue, most overdue first
    ///
    /// Plants with equal day counts keep their list order.
    pub fn due_plants(&self, plants: &[Plant]) -> Vec<(Plant, PlantSchedule)> {
        let mut due: Vec<_> = self
            .statuses(plants)
            .into_iter()
            .filter(|(_, schedule)| schedule.status.needs_water())
            .collect();
        due.sort_by_key(|(_, schedule)| schedule.days_until);

        debug!("{} of {} plants need water", due.len(), plants.len());
        due
    }
}
