//! Doctor model and its request/response bodies.

use serde::{Deserialize, Serialize};

/// A doctor who can be booked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Request body for creating a new doctor.
///
/// Fields are optional so a missing one can be reported with the legacy body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDoctorRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Body returned after a record is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: i64,
}
