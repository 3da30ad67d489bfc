//! Error handling module for the clinic scheduler.
//!
//! Provides centralized error types with mapping to HTTP status codes and JSON bodies.
//! Bodies keep the legacy shape: missing-field errors use an `error_detail` key,
//! everything else a `message` key.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const MISSING_FIELD: &str = "MISSING_FIELD";
    pub const DOCTOR_NOT_FOUND: &str = "DOCTOR_NOT_FOUND";
    pub const INVALID_DATE_TIME: &str = "INVALID_DATE_TIME";
    pub const INVALID_MINUTES: &str = "INVALID_MINUTES";
    pub const OUTSIDE_SCHEDULE: &str = "OUTSIDE_SCHEDULE";
    pub const SLOT_TAKEN: &str = "SLOT_TAKEN";
    pub const NOTHING_SCHEDULED: &str = "NOTHING_SCHEDULED";
}

/// Missing-field message for doctor creation.
pub const MISSING_DOCTOR_FIELD: &str = "Missing required field";
/// Missing-field message for booking.
pub const MISSING_BOOKING_FIELD: &str =
    "Missing required field - doctor_id, location_id, date, time";
/// Missing-field message for cancellation.
pub const MISSING_CANCEL_FIELD: &str = "Missing required field - doctor_id, date, time";

/// Application error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Payload lacks a required field or could not be read at all
    MissingField(&'static str),
    /// Doctor id outside the doctor collection
    DoctorNotFound,
    /// Date and time do not parse as `YYYY-MM-DD HH:MM`
    InvalidDateTime,
    /// Minute component is not on a 15 minute boundary
    InvalidMinutes,
    /// No availability window covers the weekday and time
    OutsideSchedule,
    /// Another appointment already holds the slot
    SlotTaken,
    /// Cancellation target does not exist
    NothingScheduled,
}

impl AppError {
    /// Get the HTTP status code for this error.
    ///
    /// Business-rule rejections answer 404 for compatibility with existing clients.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::DoctorNotFound
            | AppError::InvalidDateTime
            | AppError::InvalidMinutes
            | AppError::OutsideSchedule
            | AppError::SlotTaken
            | AppError::NothingScheduled => StatusCode::NOT_FOUND,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingField(_) => codes::MISSING_FIELD,
            AppError::DoctorNotFound => codes::DOCTOR_NOT_FOUND,
            AppError::InvalidDateTime => codes::INVALID_DATE_TIME,
            AppError::InvalidMinutes => codes::INVALID_MINUTES,
            AppError::OutsideSchedule => codes::OUTSIDE_SCHEDULE,
            AppError::SlotTaken => codes::SLOT_TAKEN,
            AppError::NothingScheduled => codes::NOTHING_SCHEDULED,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::MissingField(msg) => *msg,
            AppError::DoctorNotFound => "Doctor not found",
            AppError::InvalidDateTime => "Invalid date/time YYYY-MM-DD HH:MM",
            AppError::InvalidMinutes => "Minutes must be are 00, 15, 30 or 45",
            AppError::OutsideSchedule => "The DOW and/or time is not in the doctors schedule",
            AppError::SlotTaken => "That appointment date and time is taken",
            AppError::NothingScheduled => "Nothing scheduled for that time",
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

/// Error response body.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        let text = Some(error.message().to_string());
        match error {
            AppError::MissingField(_) => Self {
                message: None,
                error_detail: text,
            },
            _ => Self {
                message: text,
                error_detail: None,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.error_code(), "request rejected");
        let status = self.status_code();
        (status, Json(ErrorResponse::new(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_uses_error_detail_key() {
        let body = serde_json::to_value(ErrorResponse::new(&AppError::MissingField(
            MISSING_DOCTOR_FIELD,
        )))
        .unwrap();
        assert_eq!(body, json!({ "error_detail": "Missing required field" }));
    }

    #[test]
    fn test_rule_errors_use_message_key() {
        let body = serde_json::to_value(ErrorResponse::new(&AppError::SlotTaken)).unwrap();
        assert_eq!(
            body,
            json!({ "message": "That appointment date and time is taken" })
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::MissingField(MISSING_CANCEL_FIELD).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::DoctorNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::InvalidMinutes.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_display_includes_code() {
        assert_eq!(
            AppError::NothingScheduled.to_string(),
            "NOTHING_SCHEDULED: Nothing scheduled for that time"
        );
    }
}
