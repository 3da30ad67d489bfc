//! Repository over the in-memory tables.
//!
//! A single mutex guards all five collections; each operation takes it once,
//! so checks and the append or removal that follows them are atomic.

use tokio::sync::Mutex;

use super::Tables;
use crate::booking;
use crate::errors::AppError;
use crate::models::{Appointment, Doctor, Location, NewAppointment, SlotKey};

/// Number of records per collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub doctors: usize,
    pub locations: usize,
    pub availability: usize,
    pub appointments: usize,
}

/// Store for all data operations.
pub struct Repository {
    tables: Mutex<Tables>,
}

impl Repository {
    pub fn new(tables: Tables) -> Self {
        Self {
            tables: Mutex::new(tables),
        }
    }

    // ==================== DOCTOR OPERATIONS ====================

    /// List all doctors.
    pub async fn list_doctors(&self) -> Vec<Doctor> {
        self.tables.lock().await.doctors.clone()
    }

    /// Get a doctor by id.
    pub async fn get_doctor(&self, id: i64) -> Result<Doctor, AppError> {
        let tables = self.tables.lock().await;
        let index = doctor_index(&tables, id)?;
        Ok(tables.doctors[index].clone())
    }

    /// Append a doctor; the id is the collection length before the append.
    pub async fn create_doctor(&self, first_name: String, last_name: String) -> i64 {
        let mut tables = self.tables.lock().await;
        let id = tables.doctors.len() as i64;
        tables.doctors.push(Doctor {
            id,
            first_name,
            last_name,
        });
        id
    }

    /// Locations linked to a doctor.
    pub async fn list_doctor_locations(&self, doctor_id: i64) -> Result<Vec<Location>, AppError> {
        let tables = self.tables.lock().await;
        doctor_index(&tables, doctor_id)?;

        Ok(tables
            .doctor_locations
            .iter()
            .filter(|link| link.doctor_id == doctor_id)
            .filter_map(|link| {
                let location = tables.locations.iter().find(|l| l.id == link.location_id);
                if location.is_none() {
                    tracing::warn!(
                        link_id = link.id,
                        location_id = link.location_id,
                        "Doctor location references unknown location"
                    );
                }
                location.cloned()
            })
            .collect())
    }

    // ==================== APPOINTMENT OPERATIONS ====================

    /// Validate and append an appointment.
    ///
    /// The location id is stored as given.
    pub async fn book_appointment(&self, request: NewAppointment) -> Result<Appointment, AppError> {
        let mut tables = self.tables.lock().await;
        doctor_index(&tables, request.doctor_id)?;

        booking::validate_booking(
            &tables.availability,
            &tables.appointments,
            request.doctor_id,
            &request.date,
            &request.time,
        )?;

        let appointment = Appointment {
            id: tables.appointments.len() as i64,
            doctor_id: request.doctor_id,
            location_id: request.location_id,
            date: request.date,
            time: request.time,
        };
        tables.appointments.push(appointment.clone());

        Ok(appointment)
    }

    /// Appointments of a doctor, in booking order.
    pub async fn list_appointments(&self, doctor_id: i64) -> Result<Vec<Appointment>, AppError> {
        let tables = self.tables.lock().await;
        doctor_index(&tables, doctor_id)?;

        Ok(tables
            .appointments
            .iter()
            .filter(|a| a.doctor_id == doctor_id)
            .cloned()
            .collect())
    }

    /// Remove the first appointment matching the slot.
    pub async fn cancel_appointment(&self, key: &SlotKey) -> Result<Appointment, AppError> {
        let mut tables = self.tables.lock().await;

        let position = tables
            .appointments
            .iter()
            .position(|a| {
                a.doctor_id == key.doctor_id && a.date == key.date && a.time == key.time
            })
            .ok_or(AppError::NothingScheduled)?;

        Ok(tables.appointments.remove(position))
    }

    /// Record counts, logged at startup.
    pub async fn counts(&self) -> TableCounts {
        let tables = self.tables.lock().await;
        TableCounts {
            doctors: tables.doctors.len(),
            locations: tables.locations.len(),
            availability: tables.availability.len(),
            appointments: tables.appointments.len(),
        }
    }
}

/// Doctor ids are positions in the doctor collection.
fn doctor_index(tables: &Tables, id: i64) -> Result<usize, AppError> {
    usize::try_from(id)
        .ok()
        .filter(|&index| index < tables.doctors.len())
        .ok_or(AppError::DoctorNotFound)
}
