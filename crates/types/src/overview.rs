//! Hospital-wide overview statistics and their accumulator transitions.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::status::AppointmentStatus;

/// Process-wide snapshot aggregate shown on the dashboard landing page.
///
/// One logical row, updated incrementally as appointments are created or
/// change status rather than recomputed from scratch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStatistics {
    pub total_beds: u32,
    pub occupied_beds: u32,
    pub total_staff: u32,
    pub on_duty_staff: u32,
    pub total_patients: u32,
    pub critical_patients: u32,
    pub monthly_revenue: f64,
    /// Hospital-wide satisfaction score, 0 to 5.
    pub satisfaction: f32,
    pub total_appointments: u32,
    pub today_appointments: u32,
    pub completed_appointments: u32,
    pub cancelled_appointments: u32,
}

impl OverviewStatistics {
    /// Transition applied when an appointment is created.
    pub fn record_appointment_created(&mut self, is_today: bool) {
        self.total_appointments += 1;
        if is_today {
            self.today_appointments += 1;
        }
    }

    /// Transition applied when an appointment's status changes.
    ///
    /// Both directions are tracked: moving away from Completed or Cancelled
    /// decrements the corresponding counter (saturating at zero), moving
    /// into it increments. Callers must only invoke this when the status
    /// actually changed.
    pub fn record_status_change(&mut self, previous: AppointmentStatus, next: AppointmentStatus) {
        match previous {
            AppointmentStatus::Completed => {
                self.completed_appointments = self.completed_appointments.saturating_sub(1);
            }
            AppointmentStatus::Cancelled => {
                self.cancelled_appointments = self.cancelled_appointments.saturating_sub(1);
            }
            _ => {}
        }
        match next {
            AppointmentStatus::Completed => self.completed_appointments += 1,
            AppointmentStatus::Cancelled => self.cancelled_appointments += 1,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> OverviewStatistics {
        OverviewStatistics {
            total_beds: 420,
            occupied_beds: 361,
            total_staff: 910,
            on_duty_staff: 312,
            total_patients: 361,
            critical_patients: 14,
            monthly_revenue: 698_400.0,
            satisfaction: 4.3,
            total_appointments: 49,
            today_appointments: 6,
            completed_appointments: 30,
            cancelled_appointments: 4,
        }
    }

    #[test]
    fn creation_increments_totals() {
        let mut s = stats();
        s.record_appointment_created(true);
        assert_eq!(s.total_appointments, 50);
        assert_eq!(s.today_appointments, 7);

        s.record_appointment_created(false);
        assert_eq!(s.total_appointments, 51);
        assert_eq!(s.today_appointments, 7);
    }

    #[test]
    fn completing_then_reopening_is_symmetric() {
        let mut s = stats();
        s.record_status_change(AppointmentStatus::Scheduled, AppointmentStatus::Completed);
        assert_eq!(s.completed_appointments, 31);

        s.record_status_change(AppointmentStatus::Completed, AppointmentStatus::Scheduled);
        assert_eq!(s.completed_appointments, 30);
    }

    #[test]
    fn cancelled_to_completed_moves_the_count() {
        let mut s = stats();
        s.record_status_change(AppointmentStatus::Cancelled, AppointmentStatus::Completed);
        assert_eq!(s.cancelled_appointments, 3);
        assert_eq!(s.completed_appointments, 31);
    }

    #[test]
    fn decrement_saturates_at_zero() {
        let mut s = stats();
        s.cancelled_appointments = 0;
        s.record_status_change(AppointmentStatus::Cancelled, AppointmentStatus::Scheduled);
        assert_eq!(s.cancelled_appointments, 0);
    }
}
