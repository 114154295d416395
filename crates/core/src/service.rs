//! The read-model aggregation boundary.
//!
//! Every method here is an asynchronous read (or a small best-effort
//! mutation) that fetches raw entities, joins them across collections,
//! derives computed views, and applies masking before anything is returned.
//! Callers receive owned, typed view objects; raw store records never leave
//! this layer.
//!
//! Failure semantics: lookups by id return `None`/empty on miss, never an
//! error. Joins that find no matching row omit that sub-block rather than
//! substituting zeros, except where an explicit fallback is documented on
//! [`ReadModelService::enhanced_department`].

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::cache::TtlCache;
use crate::config::CoreConfig;
use crate::datasource::DataSource;
use crate::{DashboardError, DashboardResult};
use wardboard_masking::{mask_patient_id, mask_staff_id, mask_text_content};
use wardboard_types::{
    Appointment, AppointmentStatus, AppointmentUpdate, Department, EnhancedDepartment,
    FinancialBlock, NewAppointment, OverviewStatistics, PatientVitals, QualityMetrics,
    ReadmissionBlock, SatisfactionBlock, SecurePatient, SecureStaffMember, Severity, StaffMember,
    StaffSchedule, TimelineEvent, VitalReading, VitalSignAlert, WaitTimeBlock,
};

const OVERVIEW_KEY: &str = "overview";
const DEPARTMENTS_KEY: &str = "departments";

/// Prefix for generated appointment ids.
const APPOINTMENT_ID_PREFIX: &str = "APT";

/// Read-model service over a raw [`DataSource`].
///
/// Non-PII aggregates (overview, department list) pass through a short-lived
/// cache; PII-bearing projections are derived fresh on every call.
pub struct ReadModelService {
    source: Arc<dyn DataSource>,
    overview_cache: TtlCache<OverviewStatistics>,
    department_cache: TtlCache<Vec<Department>>,
}

impl ReadModelService {
    pub fn new(source: Arc<dyn DataSource>, config: &CoreConfig) -> Self {
        Self {
            source,
            overview_cache: TtlCache::new(config.cache_ttl()),
            department_cache: TtlCache::new(config.cache_ttl()),
        }
    }

    /// Full patient collection with PII masked field-by-field.
    pub async fn secure_patients(&self) -> DashboardResult<Vec<SecurePatient>> {
        let patients = self.source.patients().await?;
        Ok(patients.iter().map(SecurePatient::from_patient).collect())
    }

    /// Full staff collection with names masked.
    pub async fn secure_staff(&self) -> DashboardResult<Vec<SecureStaffMember>> {
        let staff = self.source.staff().await?;
        Ok(staff.iter().map(SecureStaffMember::from_staff).collect())
    }

    /// All departments; cached as non-PII aggregate data.
    pub async fn departments(&self) -> DashboardResult<Vec<Department>> {
        if let Some(cached) = self.department_cache.get(DEPARTMENTS_KEY) {
            return Ok(cached);
        }
        let departments = self.source.departments().await?;
        self.department_cache.set(DEPARTMENTS_KEY, departments.clone());
        Ok(departments)
    }

    pub async fn department(&self, id: u32) -> DashboardResult<Option<Department>> {
        self.source.department(id).await
    }

    pub async fn appointments(&self) -> DashboardResult<Vec<Appointment>> {
        self.source.appointments().await
    }

    /// Patients belonging to a department, masked.
    ///
    /// Resolves the department by id, then filters by the resolved
    /// `department_id` foreign key, falling back to the legacy display-name
    /// match for records without one. A renamed department silently drops
    /// name-joined records out of this view; that risk is inherent to the
    /// legacy path and tolerated.
    pub async fn patients_by_department(&self, id: u32) -> DashboardResult<Vec<SecurePatient>> {
        let Some(department) = self.source.department(id).await? else {
            return Ok(Vec::new());
        };
        let patients = self.source.patients().await?;
        Ok(patients
            .iter()
            .filter(|p| match p.department_id {
                Some(fk) => fk == department.id,
                None => p.department == department.name,
            })
            .map(SecurePatient::from_patient)
            .collect())
    }

    /// Staff assigned to a department, masked. Same join rules as
    /// [`Self::patients_by_department`].
    pub async fn staff_by_department(&self, id: u32) -> DashboardResult<Vec<SecureStaffMember>> {
        let Some(department) = self.source.department(id).await? else {
            return Ok(Vec::new());
        };
        let staff = self.source.staff().await?;
        Ok(staff
            .iter()
            .filter(|s| match s.department_id {
                Some(fk) => fk == department.id,
                None => s.department == department.name,
            })
            .map(SecureStaffMember::from_staff)
            .collect())
    }

    /// Patients attended by one staff member, masked.
    ///
    /// Prefers the `doctor_id` foreign key; the legacy fallback matches the
    /// doctor display name, which only works while display names stay
    /// unique (see [`validate_display_name_uniqueness`]).
    pub async fn patients_by_staff(&self, staff_id: &str) -> DashboardResult<Vec<SecurePatient>> {
        let Some(staff) = self.source.staff_member(staff_id).await? else {
            return Ok(Vec::new());
        };
        let patients = self.source.patients().await?;
        Ok(patients
            .iter()
            .filter(|p| match &p.doctor_id {
                Some(fk) => *fk == staff.id,
                None => p.doctor == staff.name,
            })
            .map(SecurePatient::from_patient)
            .collect())
    }

    /// Vitals bundle for one patient: history, most recent snapshot, and
    /// threshold-breach alerts. Absent patient yields `None`, not an error.
    pub async fn patient_vitals(&self, patient_id: &str) -> DashboardResult<Option<PatientVitals>> {
        let Some(patient) = self.source.patient(patient_id).await? else {
            return Ok(None);
        };
        let history = self.source.vital_history(patient_id).await?;
        let alerts = derive_vital_alerts(&patient.id, &history);
        Ok(Some(PatientVitals {
            history,
            latest: patient.vitals,
            alerts,
        }))
    }

    /// Clinical timeline for one patient, masked. Absent id yields an empty
    /// list, never `None`.
    pub async fn patient_timeline(&self, patient_id: &str) -> DashboardResult<Vec<TimelineEvent>> {
        let events = self.source.timeline_events(patient_id).await?;
        Ok(events
            .into_iter()
            .map(|event| TimelineEvent {
                patient_id: mask_patient_id(&event.patient_id),
                description: mask_text_content(&event.description),
                ..event
            })
            .collect())
    }

    /// Department enriched with financial and quality metrics joined from
    /// the per-department collections.
    ///
    /// Resolution policy per sub-metric:
    /// - financial: join row or `None`; the department's own revenue field
    ///   is never consulted for the percentage
    /// - satisfaction: join row with a numeric score, else `None` (the
    ///   caller falls back to the department record's own field)
    /// - wait time: join row with a numeric average (target synthesised as
    ///   `avg + 10` when missing); when the join misses entirely, falls
    ///   back to the department's own `avg_wait_time` with a synthesised
    ///   target. The asymmetry with satisfaction/readmission is
    ///   intentional and must stay.
    /// - readmission: join row with a numeric rate (target synthesised as
    ///   `rate - 1` when missing), else `None`; no department-level
    ///   fallback exists
    pub async fn enhanced_department(
        &self,
        id: u32,
    ) -> DashboardResult<Option<EnhancedDepartment>> {
        let Some(department) = self.source.department(id).await? else {
            return Ok(None);
        };

        let financial = self
            .source
            .financial_by_department()
            .await?
            .into_iter()
            .find(|f| f.department == department.name)
            .map(|f| FinancialBlock {
                revenue: f.revenue,
                percentage: f.percentage,
            });

        let satisfaction = self
            .source
            .satisfaction_by_department()
            .await?
            .into_iter()
            .find(|s| s.department == department.name)
            .and_then(|s| s.score)
            .map(|score| SatisfactionBlock { score });

        let wait_time = match self
            .source
            .wait_time_by_department()
            .await?
            .into_iter()
            .find(|w| w.department == department.name)
            .and_then(|w| w.avg_wait.map(|avg| (avg, w.target)))
        {
            Some((avg_wait, target)) => WaitTimeBlock {
                avg_wait,
                target: target.unwrap_or(avg_wait + 10),
            },
            None => WaitTimeBlock {
                avg_wait: department.avg_wait_time,
                target: department.avg_wait_time + 10,
            },
        };

        let readmission = self
            .source
            .readmission_by_department()
            .await?
            .into_iter()
            .find(|r| r.department == department.name)
            .and_then(|r| r.rate.map(|rate| (rate, r.target)))
            .map(|(rate, target)| ReadmissionBlock {
                rate,
                target: target.unwrap_or(rate - 1.0),
            });

        Ok(Some(EnhancedDepartment {
            department,
            financial,
            quality: QualityMetrics {
                satisfaction,
                wait_time,
                readmission,
            },
        }))
    }

    /// Hospital-wide overview snapshot; cached as non-PII aggregate data.
    pub async fn overview(&self) -> DashboardResult<OverviewStatistics> {
        if let Some(cached) = self.overview_cache.get(OVERVIEW_KEY) {
            return Ok(cached);
        }
        let stats = self.source.overview().await?;
        self.overview_cache.set(OVERVIEW_KEY, stats.clone());
        Ok(stats)
    }

    /// Create an appointment, generating the next sequential id when the
    /// payload carries none, and apply the overview creation transition.
    pub async fn create_appointment(
        &self,
        payload: NewAppointment,
    ) -> DashboardResult<Appointment> {
        self.create_appointment_as_of(payload, Local::now().date_naive())
            .await
    }

    /// [`Self::create_appointment`] with an explicit "today" for the
    /// today-count transition, for deterministic callers.
    pub async fn create_appointment_as_of(
        &self,
        payload: NewAppointment,
        today: NaiveDate,
    ) -> DashboardResult<Appointment> {
        let id = match payload.id {
            Some(id) => id,
            None => {
                let existing = self.source.appointments().await?;
                next_sequential_id(
                    existing.iter().map(|a| a.id.as_str()),
                    APPOINTMENT_ID_PREFIX,
                )
            }
        };

        let appointment = Appointment {
            id,
            patient_id: payload.patient_id,
            patient_name: payload.patient_name,
            doctor_id: payload.doctor_id,
            doctor_name: payload.doctor_name,
            department: payload.department,
            date: payload.date,
            time: payload.time,
            appointment_type: payload.appointment_type,
            status: AppointmentStatus::Scheduled,
            duration_minutes: payload.duration_minutes,
            wait_time_minutes: None,
            notes: payload.notes,
        };

        let created = self.source.insert_appointment(appointment).await?;

        let mut stats = self.source.overview().await?;
        stats.record_appointment_created(created.date == today.to_string());
        self.source.update_overview(stats).await?;
        self.overview_cache.invalidate(OVERVIEW_KEY);

        tracing::info!(appointment = %created.id, "appointment created");
        Ok(created)
    }

    /// Apply a partial update to an appointment. Unknown id yields `None`.
    pub async fn update_appointment(
        &self,
        id: &str,
        update: AppointmentUpdate,
    ) -> DashboardResult<Option<Appointment>> {
        let appointments = self.source.appointments().await?;
        let Some(mut appointment) = appointments.into_iter().find(|a| a.id == id) else {
            return Ok(None);
        };

        if let Some(date) = update.date {
            appointment.date = date;
        }
        if let Some(time) = update.time {
            appointment.time = time;
        }
        if let Some(appointment_type) = update.appointment_type {
            appointment.appointment_type = appointment_type;
        }
        if let Some(duration) = update.duration_minutes {
            appointment.duration_minutes = duration;
        }
        if let Some(wait) = update.wait_time_minutes {
            appointment.wait_time_minutes = Some(wait);
        }
        if let Some(notes) = update.notes {
            appointment.notes = notes;
        }

        self.source.replace_appointment(appointment).await
    }

    /// Transition an appointment's status and apply the overview counters.
    /// A no-op transition (same status) leaves the counters untouched.
    pub async fn update_appointment_status(
        &self,
        id: &str,
        status: AppointmentStatus,
    ) -> DashboardResult<Option<Appointment>> {
        let appointments = self.source.appointments().await?;
        let Some(mut appointment) = appointments.into_iter().find(|a| a.id == id) else {
            return Ok(None);
        };

        let previous = appointment.status;
        if previous == status {
            return Ok(Some(appointment));
        }
        appointment.status = status;

        let Some(updated) = self.source.replace_appointment(appointment).await? else {
            return Ok(None);
        };

        let mut stats = self.source.overview().await?;
        stats.record_status_change(previous, status);
        self.source.update_overview(stats).await?;
        self.overview_cache.invalidate(OVERVIEW_KEY);

        Ok(Some(updated))
    }

    /// Persist a staff member's shift schedule and return the accepted
    /// record.
    pub async fn save_staff_schedule(
        &self,
        schedule: StaffSchedule,
    ) -> DashboardResult<StaffSchedule> {
        let saved = self.source.save_staff_schedule(schedule).await?;
        // Log with the masked id; log output is a display surface too.
        tracing::info!(staff = %mask_staff_id(&saved.staff_id), "staff schedule saved");
        Ok(saved)
    }

    /// Drop all cached aggregates, forcing fresh reads.
    pub fn clear_caches(&self) {
        self.overview_cache.clear();
        self.department_cache.clear();
    }
}

/// Generate the next id for `prefix` from the existing ids.
///
/// Scans ids of the form `{prefix}{digits}`, takes the maximum numeric
/// suffix, and returns `max + 1` zero-padded to at least the width of the
/// widest existing suffix (minimum three digits). Never collides and is
/// monotonically increasing per prefix.
pub fn next_sequential_id<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> String {
    let mut max: u64 = 0;
    let mut width = 3;
    for id in ids {
        let Some(suffix) = id.strip_prefix(prefix) else {
            continue;
        };
        let Ok(number) = suffix.parse::<u64>() else {
            continue;
        };
        if number >= max {
            max = number;
            width = width.max(suffix.len());
        }
    }
    format!("{prefix}{:0width$}", max + 1, width = width)
}

/// Scan a vital history for threshold breaches.
///
/// Thresholds are the dashboard's display rules, not clinical advice:
/// systolic above 140, heart rate outside 55-100 bpm, temperature above
/// 38.0, oxygen saturation below 92.
fn derive_vital_alerts(patient_id: &str, history: &[VitalReading]) -> Vec<VitalSignAlert> {
    let masked_id = mask_patient_id(patient_id);
    let mut alerts = Vec::new();

    for reading in history {
        if let Some(systolic) = systolic_of(&reading.blood_pressure) {
            if systolic > 140 {
                alerts.push(VitalSignAlert {
                    patient_id: masked_id.clone(),
                    vital: "bloodPressure".into(),
                    value: reading.blood_pressure.clone(),
                    threshold: "systolic > 140".into(),
                    severity: Severity::High,
                    recorded_at: reading.recorded_at.clone(),
                });
            }
        }
        if reading.heart_rate > 100 || reading.heart_rate < 55 {
            alerts.push(VitalSignAlert {
                patient_id: masked_id.clone(),
                vital: "heartRate".into(),
                value: reading.heart_rate.to_string(),
                threshold: "55-100 bpm".into(),
                severity: if reading.heart_rate > 120 {
                    Severity::High
                } else {
                    Severity::Medium
                },
                recorded_at: reading.recorded_at.clone(),
            });
        }
        if reading.temperature > 38.0 {
            alerts.push(VitalSignAlert {
                patient_id: masked_id.clone(),
                vital: "temperature".into(),
                value: format!("{:.1}", reading.temperature),
                threshold: "> 38.0 C".into(),
                severity: if reading.temperature > 39.5 {
                    Severity::High
                } else {
                    Severity::Medium
                },
                recorded_at: reading.recorded_at.clone(),
            });
        }
        if reading.oxygen_saturation < 92 {
            alerts.push(VitalSignAlert {
                patient_id: masked_id.clone(),
                vital: "oxygenSaturation".into(),
                value: format!("{}%", reading.oxygen_saturation),
                threshold: "< 92%".into(),
                severity: Severity::High,
                recorded_at: reading.recorded_at.clone(),
            });
        }
    }

    alerts
}

fn systolic_of(blood_pressure: &str) -> Option<u32> {
    blood_pressure.split('/').next()?.trim().parse().ok()
}

/// Check that staff display names are unique.
///
/// The legacy doctor↔patient join matches on display name, so two staff
/// members sharing a name are indistinguishable there. This check exists to
/// fail loudly in tests when fixture or ingest data breaks that assumption;
/// production paths never call it.
pub fn validate_display_name_uniqueness(staff: &[StaffMember]) -> DashboardResult<()> {
    let mut seen = std::collections::HashSet::new();
    for member in staff {
        if !seen.insert(member.name.as_str()) {
            return Err(DashboardError::DuplicateDisplayName(member.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CoreConfig, DataSourceMode, DEFAULT_CACHE_TTL};
    use crate::datasource::StaticDataSource;
    use wardboard_types::StaffStatus;

    fn service() -> ReadModelService {
        let config = CoreConfig::new(DataSourceMode::Static, DEFAULT_CACHE_TTL).unwrap();
        ReadModelService::new(Arc::new(StaticDataSource::new()), &config)
    }

    fn payload() -> NewAppointment {
        NewAppointment {
            id: None,
            patient_id: "P003".into(),
            patient_name: "Lucia Fernandez".into(),
            doctor_id: Some("S002".into()),
            doctor_name: "Marcus Webb".into(),
            department: "Neurology".into(),
            date: "2026-09-01".into(),
            time: "11:30".into(),
            appointment_type: "Review".into(),
            duration_minutes: 30,
            notes: "".into(),
        }
    }

    #[tokio::test]
    async fn secure_patient_list_is_masked_field_by_field() {
        let svc = service();
        let patients = svc.secure_patients().await.unwrap();
        assert!(!patients.is_empty());
        for patient in &patients {
            // Ids keep first and last char with a bulleted interior.
            assert!(patient.id.contains('\u{2022}'));
            // Names collapse to "{first} {initial}."
            assert!(patient.name.ends_with('.'));
            // Non-PII stays usable for dashboards.
            assert!(!patient.department.is_empty());
        }
    }

    #[tokio::test]
    async fn secure_staff_list_keeps_ids() {
        let svc = service();
        let staff = svc.secure_staff().await.unwrap();
        let chen = staff.iter().find(|s| s.id == "S001").unwrap();
        assert_eq!(chen.name, "Sarah C.");
        assert_eq!(chen.status, StaffStatus::OnDuty);
    }

    #[tokio::test]
    async fn patients_by_department_joins_on_resolved_department() {
        let svc = service();
        let cardiology = svc.patients_by_department(2).await.unwrap();
        let ids: Vec<&str> = cardiology.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["P••1", "P••4"]);

        assert!(svc.patients_by_department(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn staff_by_department_filters_like_patients() {
        let svc = service();
        let cardiology = svc.staff_by_department(2).await.unwrap();
        let ids: Vec<&str> = cardiology.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["S001", "S004"]);
    }

    #[tokio::test]
    async fn patients_by_staff_resolves_the_attending_doctor() {
        let svc = service();
        let chens = svc.patients_by_staff("S001").await.unwrap();
        assert_eq!(chens.len(), 2);
        assert!(svc.patients_by_staff("S999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn vitals_bundle_carries_history_latest_and_alerts() {
        let svc = service();
        let vitals = svc.patient_vitals("P001").await.unwrap().unwrap();
        assert_eq!(vitals.history.len(), 4);
        assert_eq!(vitals.latest.heart_rate, 88);
        // The first two readings breach blood pressure and heart rate.
        assert!(vitals.alerts.len() >= 2);
        for alert in &vitals.alerts {
            assert_eq!(alert.patient_id, "P••1");
        }
    }

    #[tokio::test]
    async fn vitals_for_unknown_patient_is_none() {
        let svc = service();
        assert!(svc.patient_vitals("P999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn timeline_is_masked_and_empty_on_miss() {
        let svc = service();
        let events = svc.patient_timeline("P001").await.unwrap();
        assert_eq!(events.len(), 3);
        for event in &events {
            assert_eq!(event.patient_id, "P••1");
            assert!(!event.description.contains("Sarah Chen"));
            assert!(!event.description.contains("P001"));
        }

        assert!(svc.patient_timeline("P999").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn enhanced_cardiology_has_financial_but_no_satisfaction() {
        let svc = service();
        let enhanced = svc.enhanced_department(2).await.unwrap().unwrap();

        let financial = enhanced.financial.unwrap();
        assert_eq!(financial.revenue, 124_500.0);
        assert_eq!(financial.percentage, 17.8);

        assert!(enhanced.quality.satisfaction.is_none());

        // Join row present, target missing: synthesised as avg + 10.
        assert_eq!(enhanced.quality.wait_time.avg_wait, 27);
        assert_eq!(enhanced.quality.wait_time.target, 37);

        // Rate present, target missing: synthesised as rate - 1.
        let readmission = enhanced.quality.readmission.unwrap();
        assert_eq!(readmission.rate, 8.9);
        assert!((readmission.target - 7.9).abs() < 1e-5);
    }

    #[tokio::test]
    async fn enhanced_pediatrics_falls_back_to_department_wait_time() {
        let svc = service();
        let enhanced = svc.enhanced_department(4).await.unwrap().unwrap();

        // Wait-time join is entirely absent for Pediatrics.
        assert_eq!(enhanced.quality.wait_time.avg_wait, 24);
        assert_eq!(enhanced.quality.wait_time.target, 34);

        assert_eq!(enhanced.quality.satisfaction.unwrap().score, 4.7);
        assert!(enhanced.quality.readmission.is_none());
        assert!(enhanced.financial.is_some());
    }

    #[tokio::test]
    async fn enhanced_orthopedics_misses_financial_entirely() {
        let svc = service();
        let enhanced = svc.enhanced_department(6).await.unwrap().unwrap();
        assert!(enhanced.financial.is_none());
        // The department's own revenue stays available as the display
        // fallback, untouched by the join.
        assert_eq!(enhanced.department.revenue, 71_900.0);
        assert_eq!(enhanced.quality.wait_time.avg_wait, 28);
        assert_eq!(enhanced.quality.wait_time.target, 38);
    }

    #[tokio::test]
    async fn enhanced_oncology_treats_non_numeric_score_as_missing() {
        let svc = service();
        let enhanced = svc.enhanced_department(5).await.unwrap().unwrap();
        assert!(enhanced.quality.satisfaction.is_none());
        assert_eq!(enhanced.quality.wait_time.avg_wait, 33);
        assert_eq!(enhanced.quality.wait_time.target, 30);
        assert!(enhanced.quality.readmission.is_none());
    }

    #[tokio::test]
    async fn enhanced_department_is_none_for_unknown_id() {
        let svc = service();
        assert!(svc.enhanced_department(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn read_accessors_are_idempotent() {
        let svc = service();
        let first = svc.enhanced_department(2).await.unwrap();
        let second = svc.enhanced_department(2).await.unwrap();
        assert_eq!(first, second);

        let first = svc.secure_patients().await.unwrap();
        let second = svc.secure_patients().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn created_appointment_gets_the_next_sequential_id() {
        let svc = service();
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();

        let first = svc
            .create_appointment_as_of(payload(), today)
            .await
            .unwrap();
        assert_eq!(first.id, "APT050");
        assert_eq!(first.status, AppointmentStatus::Scheduled);

        let second = svc
            .create_appointment_as_of(payload(), today)
            .await
            .unwrap();
        assert_eq!(second.id, "APT051");
    }

    #[tokio::test]
    async fn explicit_id_is_respected() {
        let svc = service();
        let today = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        let mut with_id = payload();
        with_id.id = Some("APT500".into());
        let created = svc.create_appointment_as_of(with_id, today).await.unwrap();
        assert_eq!(created.id, "APT500");
    }

    #[tokio::test]
    async fn creation_updates_overview_counters_through_the_cache() {
        let svc = service();
        let before = svc.overview().await.unwrap();
        assert_eq!(before.total_appointments, 49);

        // Appointment dated 2026-09-01, "today" matching it.
        let today = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        svc.create_appointment_as_of(payload(), today).await.unwrap();

        let after = svc.overview().await.unwrap();
        assert_eq!(after.total_appointments, 50);
        assert_eq!(after.today_appointments, before.today_appointments + 1);
    }

    #[tokio::test]
    async fn status_transitions_move_counters_both_ways() {
        let svc = service();
        let before = svc.overview().await.unwrap();

        let updated = svc
            .update_appointment_status("APT049", AppointmentStatus::Completed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, AppointmentStatus::Completed);

        let mid = svc.overview().await.unwrap();
        assert_eq!(mid.completed_appointments, before.completed_appointments + 1);

        svc.update_appointment_status("APT049", AppointmentStatus::Cancelled)
            .await
            .unwrap()
            .unwrap();

        let after = svc.overview().await.unwrap();
        assert_eq!(after.completed_appointments, before.completed_appointments);
        assert_eq!(after.cancelled_appointments, before.cancelled_appointments + 1);
    }

    #[tokio::test]
    async fn same_status_transition_is_a_no_op() {
        let svc = service();
        let before = svc.overview().await.unwrap();
        svc.update_appointment_status("APT049", AppointmentStatus::Scheduled)
            .await
            .unwrap()
            .unwrap();
        let after = svc.overview().await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn partial_update_touches_only_given_fields() {
        let svc = service();
        let updated = svc
            .update_appointment(
                "APT049",
                AppointmentUpdate {
                    notes: Some("bring previous ECG".into()),
                    ..AppointmentUpdate::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.notes, "bring previous ECG");
        assert_eq!(updated.time, "10:00");

        assert!(svc
            .update_appointment("APT999", AppointmentUpdate::default())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn schedules_round_trip() {
        let svc = service();
        let saved = svc
            .save_staff_schedule(StaffSchedule {
                staff_id: "S004".into(),
                shifts: vec![wardboard_types::ShiftAssignment {
                    date: "2026-09-01".into(),
                    shift: "Night".into(),
                }],
            })
            .await
            .unwrap();
        assert_eq!(saved.staff_id, "S004");
        assert_eq!(saved.shifts.len(), 1);
    }

    #[test]
    fn sequential_ids_are_monotone_and_padded() {
        assert_eq!(next_sequential_id(std::iter::empty(), "APT"), "APT001");
        assert_eq!(
            next_sequential_id(["APT049", "APT012"].into_iter(), "APT"),
            "APT050"
        );
        assert_eq!(next_sequential_id(["APT099"].into_iter(), "APT"), "APT100");
        // Width grows once the numeric space overflows the padding.
        assert_eq!(next_sequential_id(["APT999"].into_iter(), "APT"), "APT1000");
        // Foreign prefixes and junk suffixes are ignored.
        assert_eq!(
            next_sequential_id(["P001", "APTX", "APT007"].into_iter(), "APT"),
            "APT008"
        );
    }

    #[test]
    fn duplicate_staff_names_fail_the_uniqueness_check() {
        let mut staff = crate::seed::staff();
        assert!(validate_display_name_uniqueness(&staff).is_ok());

        let mut clone = staff[0].clone();
        clone.id = "S099".into();
        staff.push(clone);
        let err = validate_display_name_uniqueness(&staff).unwrap_err();
        assert!(matches!(err, DashboardError::DuplicateDisplayName(_)));
    }
}
