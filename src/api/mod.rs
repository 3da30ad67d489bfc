//! REST API module.
//!
//! Contains all routes and handlers. Success bodies are the bare records,
//! failures are rendered by [`crate::errors::AppError`].

mod appointments;
mod doctors;

pub use appointments::*;
pub use doctors::*;

use axum::{extract::rejection::JsonRejection, Json};

use crate::errors::AppError;

/// Response type for handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Literal body returned by booking and cancellation.
pub const SUCCESS: &str = "success";

/// Unwrap a JSON body, reporting an unreadable one as a missing field.
pub fn read_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    missing_message: &'static str,
) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!("Unreadable request body: {}", rejection.body_text());
            Err(AppError::MissingField(missing_message))
        }
    }
}

/// Parse a doctor id taken from the path.
///
/// Anything that is not an `i64` cannot name a doctor, so it gets the same 404.
pub fn parse_doctor_id(raw: &str) -> Result<i64, AppError> {
    raw.parse().map_err(|_| AppError::DoctorNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_doctor_id() {
        assert_eq!(parse_doctor_id("0"), Ok(0));
        assert_eq!(parse_doctor_id("-1"), Ok(-1));
        for raw in ["abc", "1.5", "", "99999999999999999999"] {
            assert_eq!(parse_doctor_id(raw), Err(AppError::DoctorNotFound), "{}", raw);
        }
    }
}
