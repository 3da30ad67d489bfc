//! In-memory storage.
//!
//! Five collections live for the lifetime of the process; nothing is persisted.

mod repository;

pub use repository::*;

use crate::models::{Appointment, AvailabilityWindow, Doctor, DoctorLocation, Location};

/// All collections of the store.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub doctors: Vec<Doctor>,
    pub locations: Vec<Location>,
    pub doctor_locations: Vec<DoctorLocation>,
    pub availability: Vec<AvailabilityWindow>,
    pub appointments: Vec<Appointment>,
}

impl Tables {
    /// Collections with nothing in them.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in doctors, locations, weekly hours and two booked slots.
    pub fn seeded() -> Self {
        let doctor = |id, first: &str, last: &str| Doctor {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
        };
        let location = |id, address: &str| Location {
            id,
            address: address.to_string(),
        };
        let link = |id, doctor_id, location_id| DoctorLocation {
            id,
            doctor_id,
            location_id,
        };
        let hours = |id, doctor_id, day_of_week, start: &str, end: &str| AvailabilityWindow {
            id,
            doctor_id,
            day_of_week,
            start: start.to_string(),
            end: end.to_string(),
        };
        let booked = |id, doctor_id, location_id, date: &str, time: &str| Appointment {
            id,
            doctor_id,
            location_id,
            date: date.to_string(),
            time: time.to_string(),
        };

        Self {
            doctors: vec![doctor(0, "John", "Doe"), doctor(1, "Jane", "Smith")],
            locations: vec![location(0, "123 Main St"), location(1, "456 Central St")],
            doctor_locations: vec![link(0, 0, 0), link(1, 1, 0), link(2, 1, 1)],
            availability: vec![
                hours(0, 0, 0, "08:00", "17:00"),
                hours(1, 0, 1, "08:00", "17:00"),
                hours(2, 1, 0, "09:00", "15:00"),
            ],
            appointments: vec![
                booked(0, 0, 0, "2019-01-21", "08:00"),
                booked(1, 0, 0, "2019-01-21", "08:30"),
            ],
        }
    }
}
