//! Appointment booking

mod book;
mod models;

pub use book::{AppointmentBook, SLOT_MINUTES};
pub use models::{Appointment, AppointmentStatus};
