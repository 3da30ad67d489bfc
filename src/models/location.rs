//! Practice locations and the doctor/location association.

use serde::{Deserialize, Serialize};

/// A practice address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub address: String,
}

/// Links a doctor to a location where they practice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorLocation {
    pub id: i64,
    pub doctor_id: i64,
    pub location_id: i64,
}
