pub mod appointment;
pub mod service;
pub mod working_hours;
