//! # Consultorio Core
//!
//! Domain types shared by the database and API crates, plus the slot
//! generator that turns a day's working hours and bookings into the list of
//! start times offered to patients and staff.

pub mod errors;
pub mod models;
pub mod slots;
