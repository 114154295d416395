//! Patient entity and its secure projection.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::status::{PatientStatus, Severity};
use wardboard_masking::{mask_patient_id, mask_pii, mask_text_content};

/// Point-in-time vital sign reading attached to a patient record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VitalsSnapshot {
    /// Blood pressure as a `"systolic/diastolic"` string, e.g. `"120/80"`.
    pub blood_pressure: String,
    /// Heart rate in beats per minute.
    pub heart_rate: u32,
    /// Body temperature in degrees Celsius.
    pub temperature: f32,
    /// Oxygen saturation percentage.
    pub oxygen_saturation: u32,
    /// Weight in kilograms.
    pub weight: f32,
    /// Height in centimetres.
    pub height: f32,
}

/// Raw patient record as held by the data source.
///
/// Carries unmasked PII. This type must never cross the read-model boundary;
/// callers receive [`SecurePatient`] instead.
///
/// `department_id` and `doctor_id` are foreign keys resolved at ingestion
/// time. The denormalised `department` and `doctor` display strings remain as
/// the legacy join path for records that predate the foreign keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub date_of_birth: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub emergency_contact: String,
    pub department: String,
    #[serde(default)]
    pub department_id: Option<u32>,
    /// Attending doctor's display name (legacy join key).
    pub doctor: String,
    #[serde(default)]
    pub doctor_id: Option<String>,
    pub admission_date: String,
    pub status: PatientStatus,
    pub severity: Severity,
    pub room: String,
    pub diagnosis: String,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub notes: String,
    pub last_visit: String,
    /// Next appointment date, or `"TBD"` when none is booked.
    pub next_appointment: String,
    pub vitals: VitalsSnapshot,
}

/// Display-safe projection of a [`Patient`].
///
/// Identity and contact fields are removed; id and name are irreversibly
/// masked. Non-PII fields stay usable so dashboards can still group by
/// department, status, and severity. The only way to construct one is
/// [`SecurePatient::from_patient`], which masks exactly once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecurePatient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub department: String,
    pub department_id: Option<u32>,
    pub doctor: String,
    pub admission_date: String,
    pub status: PatientStatus,
    pub severity: Severity,
    pub room: String,
    pub diagnosis: String,
    pub medications: Vec<String>,
    pub allergies: Vec<String>,
    pub notes: String,
    pub last_visit: String,
    pub next_appointment: String,
    pub vitals: VitalsSnapshot,
}

impl SecurePatient {
    /// Derive the secure projection from a raw record.
    ///
    /// Masking is applied here and nowhere else: id and name through their
    /// dedicated maskers, free-text notes through the best-effort text
    /// scanner (notes routinely quote patient ids and full names).
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            id: mask_patient_id(&patient.id),
            name: mask_pii(&patient.name),
            age: patient.age,
            gender: patient.gender.clone(),
            department: patient.department.clone(),
            department_id: patient.department_id,
            doctor: patient.doctor.clone(),
            admission_date: patient.admission_date.clone(),
            status: patient.status,
            severity: patient.severity,
            room: patient.room.clone(),
            diagnosis: patient.diagnosis.clone(),
            medications: patient.medications.clone(),
            allergies: patient.allergies.clone(),
            notes: mask_text_content(&patient.notes),
            last_visit: patient.last_visit.clone(),
            next_appointment: patient.next_appointment.clone(),
            vitals: patient.vitals.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_patient() -> Patient {
        Patient {
            id: "P014".into(),
            name: "Amelia Hartley".into(),
            date_of_birth: "1968-04-12".into(),
            age: 58,
            gender: "Female".into(),
            phone: "(415) 555-0172".into(),
            email: "a.hartley@example.com".into(),
            address: "14 Elm Street".into(),
            emergency_contact: "Tom Hartley (415) 555-0173".into(),
            department: "Cardiology".into(),
            department_id: Some(2),
            doctor: "Dr. Sarah Chen".into(),
            doctor_id: Some("S001".into()),
            admission_date: "2026-08-01".into(),
            status: PatientStatus::InTreatment,
            severity: Severity::Medium,
            room: "C-204".into(),
            diagnosis: "Atrial fibrillation".into(),
            medications: vec!["Apixaban".into(), "Metoprolol".into()],
            allergies: vec!["Penicillin".into()],
            notes: "Follow-up for P014, discussed with Sarah Chen.".into(),
            last_visit: "2026-08-20".into(),
            next_appointment: "TBD".into(),
            vitals: VitalsSnapshot {
                blood_pressure: "132/84".into(),
                heart_rate: 88,
                temperature: 36.9,
                oxygen_saturation: 97,
                weight: 71.5,
                height: 168.0,
            },
        }
    }

    #[test]
    fn secure_projection_masks_id_and_name() {
        let secure = SecurePatient::from_patient(&sample_patient());
        assert_eq!(secure.id, "P••4");
        assert_eq!(secure.name, "Amelia H.");
        // Non-PII fields remain usable.
        assert_eq!(secure.department, "Cardiology");
        assert_eq!(secure.status, PatientStatus::InTreatment);
        assert_eq!(secure.vitals.heart_rate, 88);
    }

    #[test]
    fn secure_projection_scrubs_notes() {
        let secure = SecurePatient::from_patient(&sample_patient());
        assert!(!secure.notes.contains("P014"));
        assert!(!secure.notes.contains("Sarah Chen"));
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(SecurePatient::from_patient(&sample_patient())).unwrap();
        assert!(json.get("nextAppointment").is_some());
        assert!(json.get("admissionDate").is_some());
        // Contact fields do not exist on the projection at all.
        assert!(json.get("phone").is_none());
        assert!(json.get("emergencyContact").is_none());
    }
}
