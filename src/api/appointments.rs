//! Appointment API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{parse_doctor_id, read_body, ApiResult, SUCCESS};
use crate::errors::{AppError, MISSING_BOOKING_FIELD, MISSING_CANCEL_FIELD};
use crate::models::{
    Appointment, CancelAppointmentRequest, CreateAppointmentRequest, NewAppointment, SlotKey,
};
use crate::AppState;

/// POST /appointment - Book a 15 minute slot.
pub async fn create_appointment(
    State(state): State<AppState>,
    payload: Result<Json<CreateAppointmentRequest>, JsonRejection>,
) -> ApiResult<&'static str> {
    let request = read_body(payload, MISSING_BOOKING_FIELD)?;

    let (Some(doctor_id), Some(location_id), Some(date), Some(time)) = (
        request.doctor_id,
        request.location_id,
        request.date,
        request.time,
    ) else {
        return Err(AppError::MissingField(MISSING_BOOKING_FIELD));
    };

    let appointment = state
        .repo
        .book_appointment(NewAppointment {
            doctor_id,
            location_id,
            date,
            time,
        })
        .await?;

    tracing::info!(
        appointment_id = appointment.id,
        doctor_id = appointment.doctor_id,
        date = %appointment.date,
        time = %appointment.time,
        "Appointment booked"
    );

    Ok(Json(SUCCESS))
}

/// GET /appointments/{doctor_id} - Appointments of a doctor.
pub async fn list_appointments(
    State(state): State<AppState>,
    Path(doctor_id): Path<String>,
) -> ApiResult<Vec<Appointment>> {
    let doctor_id = parse_doctor_id(&doctor_id)?;
    state.repo.list_appointments(doctor_id).await.map(Json)
}

/// DELETE /appointments - Cancel an appointment.
pub async fn cancel_appointment(
    State(state): State<AppState>,
    payload: Result<Json<CancelAppointmentRequest>, JsonRejection>,
) -> ApiResult<&'static str> {
    let request = read_body(payload, MISSING_CANCEL_FIELD)?;

    let (Some(doctor_id), Some(date), Some(time)) = (request.doctor_id, request.date, request.time)
    else {
        return Err(AppError::MissingField(MISSING_CANCEL_FIELD));
    };

    let removed = state
        .repo
        .cancel_appointment(&SlotKey {
            doctor_id,
            date,
            time,
        })
        .await?;

    tracing::info!(
        appointment_id = removed.id,
        doctor_id = removed.doctor_id,
        "Appointment cancelled"
    );

    Ok(Json(SUCCESS))
}
