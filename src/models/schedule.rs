//! Availability windows and booked appointments.

use serde::{Deserialize, Serialize};

/// Weekly hours during which a doctor accepts appointments.
///
/// `start` and `end` are `HH:MM` strings and are compared as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub id: i64,
    pub doctor_id: i64,
    /// 0 = Monday .. 6 = Sunday
    #[serde(rename = "DOW")]
    pub day_of_week: u32,
    pub start: String,
    pub end: String,
}

/// A booked 15 minute slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub doctor_id: i64,
    pub location_id: i64,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
}

/// Request body for booking an appointment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAppointmentRequest {
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub location_id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

/// Request body for cancelling an appointment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CancelAppointmentRequest {
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
}

/// A fully specified booking, ready for validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub doctor_id: i64,
    pub location_id: i64,
    pub date: String,
    pub time: String,
}

/// Identifies the slot to release on cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotKey {
    pub doctor_id: i64,
    pub date: String,
    pub time: String,
}
