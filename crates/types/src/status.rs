//! Closed status enumerations.
//!
//! Every status field in the domain draws from one of these enumerations.
//! The wire strings match what the dashboard frontend and the seed data use,
//! so serde renames carry the human-facing form.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Clinical status of an admitted patient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PatientStatus {
    #[serde(rename = "In Treatment")]
    InTreatment,
    Scheduled,
    Critical,
    Discharged,
}

/// Case severity used for triage ordering on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Severity {
    High,
    Medium,
    Low,
}

/// Duty status of a staff member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StaffStatus {
    #[serde(rename = "On Duty")]
    OnDuty,
    #[serde(rename = "On Call")]
    OnCall,
    #[serde(rename = "Off Duty")]
    OffDuty,
    #[serde(rename = "On Leave")]
    OnLeave,
}

/// Lifecycle status of an appointment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    #[serde(rename = "No-show")]
    NoShow,
    #[serde(rename = "In Progress")]
    InProgress,
}

/// UI badge category consumed by the presentation layer.
///
/// Raw status strings from any entity map into this small closed set; the
/// mappers live in `wardboard-core::format` and never fail, falling back to
/// a defined default for unrecognised input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StatusType {
    Active,
    Pending,
    Completed,
    Cancelled,
    Critical,
    Inactive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_strings_round_trip() {
        let json = serde_json::to_string(&PatientStatus::InTreatment).unwrap();
        assert_eq!(json, "\"In Treatment\"");
        let back: PatientStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PatientStatus::InTreatment);

        let json = serde_json::to_string(&AppointmentStatus::NoShow).unwrap();
        assert_eq!(json, "\"No-show\"");

        let json = serde_json::to_string(&StaffStatus::OnCall).unwrap();
        assert_eq!(json, "\"On Call\"");
    }

    #[test]
    fn unknown_status_is_rejected_at_the_boundary() {
        let err = serde_json::from_str::<PatientStatus>("\"Resting\"");
        assert!(err.is_err());
    }
}
