//! Staff entity, secure projection, and shift schedule payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::status::StaffStatus;
use wardboard_masking::mask_pii;

/// Raw staff record as held by the data source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub specialty: String,
    pub department: String,
    #[serde(default)]
    pub department_id: Option<u32>,
    pub status: StaffStatus,
    /// Free-form shift descriptor, e.g. `"Day (07:00-19:00)"`.
    pub shift: String,
    pub years_experience: u32,
    pub patients_assigned: u32,
    /// Patient satisfaction rating, 0 to 5.
    pub rating: f32,
}

/// Display-safe projection of a [`StaffMember`].
///
/// The full name is masked; the staff id is retained as-is because it is the
/// key the dashboard uses for drill-down navigation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecureStaffMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub specialty: String,
    pub department: String,
    pub department_id: Option<u32>,
    pub status: StaffStatus,
    pub shift: String,
    pub years_experience: u32,
    pub patients_assigned: u32,
    pub rating: f32,
}

impl SecureStaffMember {
    /// Derive the secure projection from a raw record, masking exactly once.
    pub fn from_staff(staff: &StaffMember) -> Self {
        Self {
            id: staff.id.clone(),
            name: mask_pii(&staff.name),
            role: staff.role.clone(),
            specialty: staff.specialty.clone(),
            department: staff.department.clone(),
            department_id: staff.department_id,
            status: staff.status,
            shift: staff.shift.clone(),
            years_experience: staff.years_experience,
            patients_assigned: staff.patients_assigned,
            rating: staff.rating,
        }
    }
}

/// One day's shift assignment within a schedule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAssignment {
    /// ISO date the shift falls on.
    pub date: String,
    /// Shift label, e.g. `"Day"`, `"Night"`, `"Off"`.
    pub shift: String,
}

/// A staff member's shift schedule as submitted by the roster view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffSchedule {
    pub staff_id: String,
    pub shifts: Vec<ShiftAssignment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secure_projection_masks_name_but_keeps_id() {
        let staff = StaffMember {
            id: "S001".into(),
            name: "Sarah Chen".into(),
            role: "Cardiologist".into(),
            specialty: "Interventional Cardiology".into(),
            department: "Cardiology".into(),
            department_id: Some(2),
            status: StaffStatus::OnDuty,
            shift: "Day (07:00-19:00)".into(),
            years_experience: 12,
            patients_assigned: 8,
            rating: 4.8,
        };
        let secure = SecureStaffMember::from_staff(&staff);
        assert_eq!(secure.id, "S001");
        assert_eq!(secure.name, "Sarah C.");
        assert_eq!(secure.status, StaffStatus::OnDuty);
    }
}
