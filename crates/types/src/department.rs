//! Department entity and the per-department metric collections.
//!
//! Financial and quality figures live in collections separate from the
//! department record itself, keyed by the department's display name. The
//! read-model joins them on demand; a missing row is a join-miss, not an
//! error.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A hospital department.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: u32,
    /// Display name; also the legacy join key for staff/patient filtering
    /// and the metric collections below.
    pub name: String,
    /// Short unique code, e.g. `"CARD"`.
    pub code: String,
    pub capacity: u32,
    /// Current bed occupancy. Expected to stay at or below `capacity`, but
    /// the read-model does not enforce it.
    pub occupancy: u32,
    pub doctors: u32,
    pub nurses: u32,
    pub support_staff: u32,
    /// Satisfaction score, 0 to 5. Fallback display value when the enhanced
    /// satisfaction block is unavailable.
    pub satisfaction: f32,
    pub critical_cases: u32,
    /// Department-level revenue figure. Fallback display value only; the
    /// enhanced financial block never sources from it.
    pub revenue: f64,
    /// Department-level average wait in minutes. Fallback source for the
    /// enhanced wait-time block.
    pub avg_wait_time: u32,
}

/// Row in the financial-by-department collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialByDepartment {
    pub department: String,
    pub revenue: f64,
    /// Share of total hospital revenue, in percent.
    pub percentage: f32,
}

/// Row in the satisfaction-by-department collection.
///
/// `score` is optional because upstream exports sometimes carry a
/// placeholder instead of a number; a non-numeric score is treated as a
/// join-miss for the satisfaction sub-metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionByDepartment {
    pub department: String,
    #[serde(default)]
    pub score: Option<f32>,
}

/// Row in the wait-time-by-department collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WaitTimeByDepartment {
    pub department: String,
    /// Average wait in minutes.
    #[serde(default)]
    pub avg_wait: Option<u32>,
    /// Target wait in minutes; synthesised as `avg_wait + 10` when missing.
    #[serde(default)]
    pub target: Option<u32>,
}

/// Row in the readmission-by-department collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadmissionByDepartment {
    pub department: String,
    /// 30-day readmission rate, in percent.
    #[serde(default)]
    pub rate: Option<f32>,
    /// Target rate; synthesised as `rate - 1` when missing.
    #[serde(default)]
    pub target: Option<f32>,
}
