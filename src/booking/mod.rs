//! Appointment booking rules.
//!
//! Pure checks over the availability and appointment collections. The caller
//! holds the store lock, so a passing [`validate_booking`] can be followed by
//! an append without another request slipping in between.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::errors::AppError;
use crate::models::{Appointment, AvailabilityWindow};

/// Format accepted for `date + " " + time`.
pub const SLOT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Minutes at which a slot may start.
pub const SLOT_MINUTES: [u32; 4] = [0, 15, 30, 45];

/// Parse a date and a time into a calendar timestamp.
pub fn parse_slot(date: &str, time: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), SLOT_FORMAT)
        .map_err(|_| AppError::InvalidDateTime)
}

/// Reject times that are not on a quarter hour.
pub fn check_minutes(slot: &NaiveDateTime) -> Result<(), AppError> {
    if SLOT_MINUTES.contains(&slot.minute()) {
        Ok(())
    } else {
        Err(AppError::InvalidMinutes)
    }
}

/// Day of week with Monday = 0.
pub fn weekday_index(slot: &NaiveDateTime) -> u32 {
    slot.weekday().num_days_from_monday()
}

/// Whether some window of the doctor covers `time` on `day_of_week`.
///
/// Bounds are inclusive and compared as `HH:MM` strings.
pub fn within_schedule(
    windows: &[AvailabilityWindow],
    doctor_id: i64,
    day_of_week: u32,
    time: &str,
) -> bool {
    windows.iter().any(|w| {
        w.doctor_id == doctor_id
            && w.day_of_week == day_of_week
            && w.start.as_str() <= time
            && time <= w.end.as_str()
    })
}

/// Whether the doctor already has an appointment at this date and time.
pub fn slot_taken(appointments: &[Appointment], doctor_id: i64, date: &str, time: &str) -> bool {
    appointments
        .iter()
        .any(|a| a.doctor_id == doctor_id && a.date == date && a.time == time)
}

/// Run the date, minute, schedule and conflict checks in order.
///
/// The doctor id must already be known to exist.
pub fn validate_booking(
    windows: &[AvailabilityWindow],
    appointments: &[Appointment],
    doctor_id: i64,
    date: &str,
    time: &str,
) -> Result<(), AppError> {
    let slot = parse_slot(date, time)?;
    check_minutes(&slot)?;

    if !within_schedule(windows, doctor_id, weekday_index(&slot), time) {
        return Err(AppError::OutsideSchedule);
    }

    if slot_taken(appointments, doctor_id, date, time) {
        return Err(AppError::SlotTaken);
    }

    Ok(())
}
