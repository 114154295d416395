//! Derived view types computed on demand by the read-model service.
//!
//! None of these are ever persisted. They are assembled per call from the
//! raw collections, with PII already masked where the view carries patient
//! references.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::department::Department;
use crate::patient::VitalsSnapshot;
use crate::status::Severity;

/// Financial sub-block of an enhanced department.
///
/// Sourced exclusively from the financial-by-department join; the department
/// record's own `revenue` field is never used for the percentage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialBlock {
    pub revenue: f64,
    pub percentage: f32,
}

/// Satisfaction sub-block of an enhanced department.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionBlock {
    pub score: f32,
}

/// Wait-time sub-block of an enhanced department.
///
/// Unlike the other sub-metrics this block is always present: when the
/// quality join misses, it falls back to the department's own
/// `avg_wait_time` with a synthesised target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitTimeBlock {
    pub avg_wait: u32,
    pub target: u32,
}

/// Readmission sub-block of an enhanced department.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadmissionBlock {
    pub rate: f32,
    pub target: f32,
}

/// Quality metrics joined from the per-department quality collections.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    pub satisfaction: Option<SatisfactionBlock>,
    pub wait_time: WaitTimeBlock,
    pub readmission: Option<ReadmissionBlock>,
}

/// A department enriched with cross-referenced financial and quality
/// metrics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedDepartment {
    #[serde(flatten)]
    pub department: Department,
    pub financial: Option<FinancialBlock>,
    pub quality: QualityMetrics,
}

/// One row of a patient's vital sign history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VitalReading {
    /// ISO 8601 timestamp of the reading.
    pub recorded_at: String,
    pub blood_pressure: String,
    pub heart_rate: u32,
    pub temperature: f32,
    pub oxygen_saturation: u32,
}

/// A threshold breach detected in a patient's vital history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VitalSignAlert {
    /// Masked patient id; alerts are display-safe as returned.
    pub patient_id: String,
    /// Which vital breached, e.g. `"heartRate"`.
    pub vital: String,
    pub value: String,
    pub threshold: String,
    pub severity: Severity,
    pub recorded_at: String,
}

/// Bundle returned for a single patient's vitals view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientVitals {
    pub history: Vec<VitalReading>,
    /// Most recent snapshot from the patient record.
    pub latest: VitalsSnapshot,
    pub alerts: Vec<VitalSignAlert>,
}

/// One entry in a patient's clinical timeline.
///
/// Events come back in chronologically meaningful order but are not
/// guaranteed sorted; description text is masked before leaving the
/// read-model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub id: String,
    pub patient_id: String,
    /// ISO 8601 timestamp.
    pub timestamp: String,
    /// Event category, e.g. `"admission"`, `"medication"`, `"lab"`.
    pub category: String,
    pub title: String,
    pub description: String,
}
