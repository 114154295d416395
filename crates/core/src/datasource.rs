//! Raw data source abstraction.
//!
//! The read-model service talks to its raw data through [`DataSource`], so
//! the in-memory seed dataset and a remote CRUD API are interchangeable.
//! Implementations hand back owned values, never references into their own
//! storage; the store's records stay private to the source.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::seed;
use crate::{DashboardError, DashboardResult};
use wardboard_types::{
    Appointment, Department, FinancialByDepartment, OverviewStatistics, Patient,
    ReadmissionByDepartment, SatisfactionByDepartment, StaffMember, StaffSchedule, TimelineEvent,
    VitalReading, WaitTimeByDepartment,
};

/// Conventional list/get/create/update operations over the raw entity
/// collections, keyed by entity id.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn patients(&self) -> DashboardResult<Vec<Patient>>;
    async fn patient(&self, id: &str) -> DashboardResult<Option<Patient>>;

    async fn staff(&self) -> DashboardResult<Vec<StaffMember>>;
    async fn staff_member(&self, id: &str) -> DashboardResult<Option<StaffMember>>;

    async fn departments(&self) -> DashboardResult<Vec<Department>>;
    async fn department(&self, id: u32) -> DashboardResult<Option<Department>>;

    async fn appointments(&self) -> DashboardResult<Vec<Appointment>>;
    async fn insert_appointment(&self, appointment: Appointment) -> DashboardResult<Appointment>;
    async fn replace_appointment(
        &self,
        appointment: Appointment,
    ) -> DashboardResult<Option<Appointment>>;

    async fn financial_by_department(&self) -> DashboardResult<Vec<FinancialByDepartment>>;
    async fn satisfaction_by_department(&self) -> DashboardResult<Vec<SatisfactionByDepartment>>;
    async fn wait_time_by_department(&self) -> DashboardResult<Vec<WaitTimeByDepartment>>;
    async fn readmission_by_department(&self) -> DashboardResult<Vec<ReadmissionByDepartment>>;

    /// Vital sign history for one patient; empty when none is recorded.
    async fn vital_history(&self, patient_id: &str) -> DashboardResult<Vec<VitalReading>>;
    /// Raw (unmasked) timeline events for one patient; empty on miss.
    async fn timeline_events(&self, patient_id: &str) -> DashboardResult<Vec<TimelineEvent>>;

    async fn overview(&self) -> DashboardResult<OverviewStatistics>;
    async fn update_overview(&self, stats: OverviewStatistics) -> DashboardResult<()>;

    async fn save_staff_schedule(&self, schedule: StaffSchedule)
        -> DashboardResult<StaffSchedule>;
}

/// In-memory data source seeded from [`crate::seed`].
///
/// Foreign keys (`department_id`, `doctor_id`) are resolved from the
/// denormalised display names once, at construction. The name strings stay
/// on the records as the legacy join path.
pub struct StaticDataSource {
    patients: RwLock<Vec<Patient>>,
    staff: RwLock<Vec<StaffMember>>,
    departments: Vec<Department>,
    appointments: RwLock<Vec<Appointment>>,
    financial: Vec<FinancialByDepartment>,
    satisfaction: Vec<SatisfactionByDepartment>,
    wait_times: Vec<WaitTimeByDepartment>,
    readmissions: Vec<ReadmissionByDepartment>,
    vital_history: HashMap<String, Vec<VitalReading>>,
    timeline: Vec<TimelineEvent>,
    overview: RwLock<OverviewStatistics>,
    schedules: RwLock<HashMap<String, StaffSchedule>>,
}

impl StaticDataSource {
    pub fn new() -> Self {
        let departments = seed::departments();
        let mut staff = seed::staff();
        let mut patients = seed::patients();

        // Ingestion-time foreign key resolution. The display-name joins
        // remain available for records no resolver matched.
        for member in &mut staff {
            member.department_id = departments
                .iter()
                .find(|d| d.name == member.department)
                .map(|d| d.id);
        }
        for patient in &mut patients {
            patient.department_id = departments
                .iter()
                .find(|d| d.name == patient.department)
                .map(|d| d.id);
            patient.doctor_id = staff
                .iter()
                .find(|s| s.name == patient.doctor)
                .map(|s| s.id.clone());
        }

        Self {
            patients: RwLock::new(patients),
            staff: RwLock::new(staff),
            departments,
            appointments: RwLock::new(seed::appointments()),
            financial: seed::financial_by_department(),
            satisfaction: seed::satisfaction_by_department(),
            wait_times: seed::wait_time_by_department(),
            readmissions: seed::readmission_by_department(),
            vital_history: seed::vital_history(),
            timeline: seed::timeline_events(),
            overview: RwLock::new(seed::overview()),
            schedules: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for StaticDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn patients(&self) -> DashboardResult<Vec<Patient>> {
        Ok(self.patients.read().expect("lock poisoned").clone())
    }

    async fn patient(&self, id: &str) -> DashboardResult<Option<Patient>> {
        let patients = self.patients.read().expect("lock poisoned");
        Ok(patients.iter().find(|p| p.id == id).cloned())
    }

    async fn staff(&self) -> DashboardResult<Vec<StaffMember>> {
        Ok(self.staff.read().expect("lock poisoned").clone())
    }

    async fn staff_member(&self, id: &str) -> DashboardResult<Option<StaffMember>> {
        let staff = self.staff.read().expect("lock poisoned");
        Ok(staff.iter().find(|s| s.id == id).cloned())
    }

    async fn departments(&self) -> DashboardResult<Vec<Department>> {
        Ok(self.departments.clone())
    }

    async fn department(&self, id: u32) -> DashboardResult<Option<Department>> {
        Ok(self.departments.iter().find(|d| d.id == id).cloned())
    }

    async fn appointments(&self) -> DashboardResult<Vec<Appointment>> {
        Ok(self.appointments.read().expect("lock poisoned").clone())
    }

    async fn insert_appointment(&self, appointment: Appointment) -> DashboardResult<Appointment> {
        let mut appointments = self.appointments.write().expect("lock poisoned");
        appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn replace_appointment(
        &self,
        appointment: Appointment,
    ) -> DashboardResult<Option<Appointment>> {
        let mut appointments = self.appointments.write().expect("lock poisoned");
        match appointments.iter_mut().find(|a| a.id == appointment.id) {
            Some(slot) => {
                *slot = appointment.clone();
                Ok(Some(appointment))
            }
            None => Ok(None),
        }
    }

    async fn financial_by_department(&self) -> DashboardResult<Vec<FinancialByDepartment>> {
        Ok(self.financial.clone())
    }

    async fn satisfaction_by_department(&self) -> DashboardResult<Vec<SatisfactionByDepartment>> {
        Ok(self.satisfaction.clone())
    }

    async fn wait_time_by_department(&self) -> DashboardResult<Vec<WaitTimeByDepartment>> {
        Ok(self.wait_times.clone())
    }

    async fn readmission_by_department(&self) -> DashboardResult<Vec<ReadmissionByDepartment>> {
        Ok(self.readmissions.clone())
    }

    async fn vital_history(&self, patient_id: &str) -> DashboardResult<Vec<VitalReading>> {
        Ok(self.vital_history.get(patient_id).cloned().unwrap_or_default())
    }

    async fn timeline_events(&self, patient_id: &str) -> DashboardResult<Vec<TimelineEvent>> {
        Ok(self
            .timeline
            .iter()
            .filter(|e| e.patient_id == patient_id)
            .cloned()
            .collect())
    }

    async fn overview(&self) -> DashboardResult<OverviewStatistics> {
        Ok(self.overview.read().expect("lock poisoned").clone())
    }

    async fn update_overview(&self, stats: OverviewStatistics) -> DashboardResult<()> {
        *self.overview.write().expect("lock poisoned") = stats;
        Ok(())
    }

    async fn save_staff_schedule(
        &self,
        schedule: StaffSchedule,
    ) -> DashboardResult<StaffSchedule> {
        let mut schedules = self.schedules.write().expect("lock poisoned");
        schedules.insert(schedule.staff_id.clone(), schedule.clone());
        Ok(schedule)
    }
}

/// Data source backed by a remote CRUD API speaking JSON.
///
/// Route shapes (`/patients`, `/patients/{id}`, ...) live only here; nothing
/// outside this type assumes them. A 404 on a by-id lookup is a miss, not an
/// error.
pub struct RestDataSource {
    base_url: String,
    client: reqwest::Client,
}

impl RestDataSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> DashboardResult<T> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(DashboardError::RemoteStatus(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn get_json_opt<T: DeserializeOwned>(&self, path: &str) -> DashboardResult<Option<T>> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DashboardError::RemoteStatus(response.status().as_u16()));
        }
        Ok(Some(response.json().await?))
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> DashboardResult<T> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(DashboardError::RemoteStatus(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }

    async fn put_json_opt<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> DashboardResult<Option<T>> {
        let response = self
            .client
            .put(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(DashboardError::RemoteStatus(response.status().as_u16()));
        }
        Ok(Some(response.json().await?))
    }
}

#[async_trait]
impl DataSource for RestDataSource {
    async fn patients(&self) -> DashboardResult<Vec<Patient>> {
        self.get_json("/patients").await
    }

    async fn patient(&self, id: &str) -> DashboardResult<Option<Patient>> {
        self.get_json_opt(&format!("/patients/{id}")).await
    }

    async fn staff(&self) -> DashboardResult<Vec<StaffMember>> {
        self.get_json("/staff").await
    }

    async fn staff_member(&self, id: &str) -> DashboardResult<Option<StaffMember>> {
        self.get_json_opt(&format!("/staff/{id}")).await
    }

    async fn departments(&self) -> DashboardResult<Vec<Department>> {
        self.get_json("/departments").await
    }

    async fn department(&self, id: u32) -> DashboardResult<Option<Department>> {
        self.get_json_opt(&format!("/departments/{id}")).await
    }

    async fn appointments(&self) -> DashboardResult<Vec<Appointment>> {
        self.get_json("/appointments").await
    }

    async fn insert_appointment(&self, appointment: Appointment) -> DashboardResult<Appointment> {
        self.post_json("/appointments", &appointment).await
    }

    async fn replace_appointment(
        &self,
        appointment: Appointment,
    ) -> DashboardResult<Option<Appointment>> {
        self.put_json_opt(&format!("/appointments/{}", appointment.id), &appointment)
            .await
    }

    async fn financial_by_department(&self) -> DashboardResult<Vec<FinancialByDepartment>> {
        self.get_json("/metrics/financial").await
    }

    async fn satisfaction_by_department(&self) -> DashboardResult<Vec<SatisfactionByDepartment>> {
        self.get_json("/metrics/satisfaction").await
    }

    async fn wait_time_by_department(&self) -> DashboardResult<Vec<WaitTimeByDepartment>> {
        self.get_json("/metrics/wait-times").await
    }

    async fn readmission_by_department(&self) -> DashboardResult<Vec<ReadmissionByDepartment>> {
        self.get_json("/metrics/readmissions").await
    }

    async fn vital_history(&self, patient_id: &str) -> DashboardResult<Vec<VitalReading>> {
        Ok(self
            .get_json_opt(&format!("/patients/{patient_id}/vitals/history"))
            .await?
            .unwrap_or_default())
    }

    async fn timeline_events(&self, patient_id: &str) -> DashboardResult<Vec<TimelineEvent>> {
        Ok(self
            .get_json_opt(&format!("/patients/{patient_id}/timeline"))
            .await?
            .unwrap_or_default())
    }

    async fn overview(&self) -> DashboardResult<OverviewStatistics> {
        self.get_json("/overview").await
    }

    async fn update_overview(&self, stats: OverviewStatistics) -> DashboardResult<()> {
        let response = self
            .client
            .put(format!("{}/overview", self.base_url))
            .json(&stats)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(DashboardError::RemoteStatus(response.status().as_u16()));
        }
        Ok(())
    }

    async fn save_staff_schedule(
        &self,
        schedule: StaffSchedule,
    ) -> DashboardResult<StaffSchedule> {
        let path = format!("/staff/{}/schedule", schedule.staff_id);
        let response = self
            .client
            .put(format!("{}{path}", self.base_url))
            .json(&schedule)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(DashboardError::RemoteStatus(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn foreign_keys_are_resolved_at_ingestion() {
        let source = StaticDataSource::new();
        let patient = source.patient("P001").await.unwrap().unwrap();
        assert_eq!(patient.department_id, Some(2));
        assert_eq!(patient.doctor_id.as_deref(), Some("S001"));

        let staff = source.staff_member("S002").await.unwrap().unwrap();
        assert_eq!(staff.department_id, Some(3));
    }

    #[tokio::test]
    async fn lookups_return_none_on_miss() {
        let source = StaticDataSource::new();
        assert!(source.patient("P999").await.unwrap().is_none());
        assert!(source.department(999).await.unwrap().is_none());
        assert!(source.vital_history("P999").await.unwrap().is_empty());
        assert!(source.timeline_events("P999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_appointment_misses_unknown_ids() {
        let source = StaticDataSource::new();
        let mut appointment = source.appointments().await.unwrap().remove(0);
        appointment.id = "APT999".into();
        assert!(source
            .replace_appointment(appointment)
            .await
            .unwrap()
            .is_none());
    }
}
