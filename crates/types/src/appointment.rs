//! Appointment entity and its write payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::status::AppointmentStatus;

/// A booked appointment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Sequential id of the form `APT{number}`, e.g. `"APT050"`.
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    #[serde(default)]
    pub doctor_id: Option<String>,
    pub doctor_name: String,
    pub department: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// 24-hour time, `HH:MM`.
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub status: AppointmentStatus,
    pub duration_minutes: u32,
    /// Minutes the patient waited; present only once the appointment is
    /// Completed.
    #[serde(default)]
    pub wait_time_minutes: Option<u32>,
    pub notes: String,
}

/// Payload for creating an appointment.
///
/// `id` is optional; when omitted the read-model generates the next
/// sequential id from the current maximum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    #[serde(default)]
    pub id: Option<String>,
    pub patient_id: String,
    pub patient_name: String,
    #[serde(default)]
    pub doctor_id: Option<String>,
    pub doctor_name: String,
    pub department: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub notes: String,
}

/// Partial update for an existing appointment. `None` fields are left as
/// they are.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentUpdate {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, rename = "type")]
    pub appointment_type: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub wait_time_minutes: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}
