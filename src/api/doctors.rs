//! Doctor API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{parse_doctor_id, read_body, ApiResult};
use crate::errors::{AppError, MISSING_DOCTOR_FIELD};
use crate::models::{CreateDoctorRequest, Doctor, IdResponse, Location};
use crate::AppState;

/// GET /doctors - List all doctors.
pub async fn list_doctors(State(state): State<AppState>) -> Json<Vec<Doctor>> {
    Json(state.repo.list_doctors().await)
}

/// GET /doctors/{id} - Get a single doctor.
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Doctor> {
    let id = parse_doctor_id(&id)?;
    state.repo.get_doctor(id).await.map(Json)
}

/// POST /doctors - Create a new doctor.
pub async fn create_doctor(
    State(state): State<AppState>,
    payload: Result<Json<CreateDoctorRequest>, JsonRejection>,
) -> ApiResult<IdResponse> {
    let request = read_body(payload, MISSING_DOCTOR_FIELD)?;

    let (Some(first_name), Some(last_name)) = (request.first_name, request.last_name) else {
        return Err(AppError::MissingField(MISSING_DOCTOR_FIELD));
    };

    let id = state.repo.create_doctor(first_name, last_name).await;
    tracing::info!(doctor_id = id, "Doctor created");

    Ok(Json(IdResponse { id }))
}

/// GET /doctors/{id}/locations - Locations where a doctor practices.
pub async fn list_doctor_locations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Vec<Location>> {
    let id = parse_doctor_id(&id)?;
    state.repo.list_doctor_locations(id).await.map(Json)
}
