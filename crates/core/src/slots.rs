//! # Slot Generation
//!
//! Turns a day's working windows and the times already taken into the
//! ordered list of start times the clinic can offer.
//!
//! ## Rules
//!
//! - Slots start at the window opening and repeat every interval.
//! - A slot is only emitted if its whole period fits before the window
//!   closes, so a window of 09:00–10:05 on a 30 minute grid yields 09:00
//!   and 09:30 but not 10:00. The number of slots per window is
//!   `floor(length / interval)`.
//! - A slot is available unless its start time is in the booked set.
//! - A missing window (day off) yields no slots at all. That is not an
//!   error: callers report "closed", which is different from "fully booked".
//!
//! All arithmetic is on minute-of-day integers. Invalid inputs are rejected
//! when [`SlotInterval`] and [`WorkingWindow`] are built, so the generator
//! itself cannot fail.

use std::collections::BTreeSet;

use crate::errors::ClinicError;
use crate::models::{
    appointment::Booking, slot::Slot, time_of_day::{MINUTES_PER_DAY, TimeOfDay},
    working_hours::WorkingWindow,
};

/// Times already reserved on the target date.
pub type BookedSet = BTreeSet<TimeOfDay>;

pub const DEFAULT_INTERVAL_MINUTES: u16 = 30;

/// Distance between consecutive slot starts, in minutes. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotInterval(u16);

impl SlotInterval {
    pub fn new(minutes: i64) -> Result<Self, ClinicError> {
        if minutes <= 0 {
            return Err(ClinicError::Configuration(format!(
                "Slot interval must be positive, got {} minutes",
                minutes
            )));
        }
        if minutes > i64::from(MINUTES_PER_DAY) {
            return Err(ClinicError::Configuration(format!(
                "Slot interval of {} minutes is longer than a day",
                minutes
            )));
        }
        Ok(Self(minutes as u16))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl Default for SlotInterval {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL_MINUTES)
    }
}

/// Which available slots get the `recommended` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Recommendation {
    None,
    /// The earliest available slot of the day.
    #[default]
    FirstAvailable,
    /// Times flagged by an outside source. Occupied slots are never recommended.
    Flagged(BTreeSet<TimeOfDay>),
}

/// Slots for a single window, recommending the first available one.
///
/// `None` stands for a day without working hours and always yields an
/// empty list.
pub fn generate_slots(
    window: Option<&WorkingWindow>,
    interval: SlotInterval,
    booked: &BookedSet,
) -> Vec<Slot> {
    generate_slots_with(window, interval, booked, &Recommendation::FirstAvailable)
}

pub fn generate_slots_with(
    window: Option<&WorkingWindow>,
    interval: SlotInterval,
    booked: &BookedSet,
    recommendation: &Recommendation,
) -> Vec<Slot> {
    match window {
        Some(window) => {
            generate_day_slots(std::slice::from_ref(window), interval, booked, recommendation)
        }
        None => Vec::new(),
    }
}

/// Slots for a day made of one or more windows (split shifts).
///
/// Windows are walked in start order and merged into a single ordered list;
/// a time produced by two overlapping windows appears once. The
/// recommendation is applied across the whole day.
pub fn generate_day_slots(
    windows: &[WorkingWindow],
    interval: SlotInterval,
    booked: &BookedSet,
    recommendation: &Recommendation,
) -> Vec<Slot> {
    let mut slots: Vec<Slot> = slot_times(windows, interval)
        .into_iter()
        .map(|time| Slot {
            time,
            available: !booked.contains(&time),
            recommended: false,
        })
        .collect();

    recommend(&mut slots, recommendation);
    slots
}

/// Grid times that collide with a booking.
///
/// A slot at `t` is taken when `[t, t + interval)` overlaps any booking, so
/// an appointment from 10:15 to 10:45 on a 30 minute grid takes both 10:00
/// and 10:30. Only times on the grid of `windows` are returned.
pub fn expand_bookings(
    bookings: &[Booking],
    windows: &[WorkingWindow],
    interval: SlotInterval,
) -> BookedSet {
    expand_bookings_for(bookings, windows, interval, interval.minutes())
}

/// Same as [`expand_bookings`], but each start is checked for `length`
/// minutes instead of one interval. Used when the service being booked runs
/// longer or shorter than the grid step.
pub fn expand_bookings_for(
    bookings: &[Booking],
    windows: &[WorkingWindow],
    interval: SlotInterval,
    length: u16,
) -> BookedSet {
    slot_times(windows, interval)
        .into_iter()
        .filter(|&time| bookings.iter().any(|booking| booking.overlaps(time, length)))
        .collect()
}

/// Resets the `recommended` flags of `slots` according to `recommendation`.
///
/// Callers that drop slots after generation (past times, services that do
/// not fit) run this again on what is left.
pub fn recommend(slots: &mut [Slot], recommendation: &Recommendation) {
    for slot in slots.iter_mut() {
        slot.recommended = false;
    }

    match recommendation {
        Recommendation::None => {}
        Recommendation::FirstAvailable => {
            if let Some(slot) = slots.iter_mut().find(|slot| slot.available) {
                slot.recommended = true;
            }
        }
        Recommendation::Flagged(flagged) => {
            for slot in slots.iter_mut().filter(|slot| slot.available) {
                slot.recommended = flagged.contains(&slot.time);
            }
        }
    }
}

fn slot_times(windows: &[WorkingWindow], interval: SlotInterval) -> BTreeSet<TimeOfDay> {
    let mut times = BTreeSet::new();
    for window in windows {
        times.extend(window_times(window, interval));
    }
    times
}

fn window_times(window: &WorkingWindow, interval: SlotInterval) -> impl Iterator<Item = TimeOfDay> {
    let step = interval.minutes();
    let count = window.length_minutes() / step;
    let start = window.start();

    // start + count * step <= end < 24:00, so every add stays inside the day
    (0..count).filter_map(move |i| start.checked_add(i * step))
}
