//! Static seed dataset backing [`crate::StaticDataSource`].
//!
//! The rows here mirror the shape of the production document store,
//! including its quirks: metric collections are keyed by department display
//! name, some quality rows are missing or carry a non-numeric score, and
//! patient/staff records predate the foreign-key fields (those are resolved
//! at ingestion, see `StaticDataSource::new`).

use std::collections::HashMap;

use wardboard_types::{
    Appointment, AppointmentStatus, Department, FinancialByDepartment, OverviewStatistics, Patient,
    PatientStatus, ReadmissionByDepartment, SatisfactionByDepartment, Severity, StaffMember,
    StaffStatus, TimelineEvent, VitalReading, VitalsSnapshot, WaitTimeByDepartment,
};

pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "P001".into(),
            name: "Amelia Hartley".into(),
            date_of_birth: "1968-04-12".into(),
            age: 58,
            gender: "Female".into(),
            phone: "(415) 555-0172".into(),
            email: "a.hartley@example.com".into(),
            address: "14 Elm Street, Oakdale".into(),
            emergency_contact: "Tom Hartley (415) 555-0173".into(),
            department: "Cardiology".into(),
            department_id: None,
            doctor: "Sarah Chen".into(),
            doctor_id: None,
            admission_date: "2026-08-18".into(),
            status: PatientStatus::InTreatment,
            severity: Severity::High,
            room: "C-204".into(),
            diagnosis: "Atrial fibrillation".into(),
            medications: vec!["Apixaban".into(), "Metoprolol".into()],
            allergies: vec!["Penicillin".into()],
            notes: "Rate control improving. Discussed ablation with Sarah Chen.".into(),
            last_visit: "2026-08-27".into(),
            next_appointment: "2026-09-03".into(),
            vitals: VitalsSnapshot {
                blood_pressure: "132/84".into(),
                heart_rate: 88,
                temperature: 36.9,
                oxygen_saturation: 97,
                weight: 71.5,
                height: 168.0,
            },
        },
        Patient {
            id: "P002".into(),
            name: "Noah Okonkwo".into(),
            date_of_birth: "1990-11-02".into(),
            age: 35,
            gender: "Male".into(),
            phone: "(415) 555-0188".into(),
            email: "n.okonkwo@example.com".into(),
            address: "92 Harbor Road, Oakdale".into(),
            emergency_contact: "Ada Okonkwo (415) 555-0189".into(),
            department: "Emergency".into(),
            department_id: None,
            doctor: "James Okafor".into(),
            doctor_id: None,
            admission_date: "2026-08-29".into(),
            status: PatientStatus::Critical,
            severity: Severity::High,
            room: "E-012".into(),
            diagnosis: "Sepsis, suspected pneumonia".into(),
            medications: vec!["Piperacillin-tazobactam".into()],
            allergies: vec![],
            notes: "Started broad-spectrum antibiotics on arrival.".into(),
            last_visit: "2026-08-29".into(),
            next_appointment: "TBD".into(),
            vitals: VitalsSnapshot {
                blood_pressure: "98/60".into(),
                heart_rate: 112,
                temperature: 38.6,
                oxygen_saturation: 93,
                weight: 84.0,
                height: 181.0,
            },
        },
        Patient {
            id: "P003".into(),
            name: "Lucia Fernandez".into(),
            date_of_birth: "1979-06-23".into(),
            age: 47,
            gender: "Female".into(),
            phone: "(415) 555-0140".into(),
            email: "l.fernandez@example.com".into(),
            address: "7 Birchwood Lane, Oakdale".into(),
            emergency_contact: "Mario Fernandez (415) 555-0141".into(),
            department: "Neurology".into(),
            department_id: None,
            doctor: "Marcus Webb".into(),
            doctor_id: None,
            admission_date: "2026-08-22".into(),
            status: PatientStatus::Scheduled,
            severity: Severity::Medium,
            room: "N-118".into(),
            diagnosis: "Migraine with aura, rule out TIA".into(),
            medications: vec!["Sumatriptan".into()],
            allergies: vec!["Latex".into()],
            notes: "MRI booked. Follow-up with Marcus Webb after results.".into(),
            last_visit: "2026-08-25".into(),
            next_appointment: "2026-09-01".into(),
            vitals: VitalsSnapshot {
                blood_pressure: "118/76".into(),
                heart_rate: 72,
                temperature: 36.6,
                oxygen_saturation: 99,
                weight: 63.2,
                height: 162.0,
            },
        },
        Patient {
            id: "P004".into(),
            name: "George Whitfield".into(),
            date_of_birth: "1951-02-08".into(),
            age: 75,
            gender: "Male".into(),
            phone: "(415) 555-0115".into(),
            email: "g.whitfield@example.com".into(),
            address: "3 Mill Pond Court, Oakdale".into(),
            emergency_contact: "Susan Whitfield (415) 555-0116".into(),
            department: "Cardiology".into(),
            department_id: None,
            doctor: "Sarah Chen".into(),
            doctor_id: None,
            admission_date: "2026-07-30".into(),
            status: PatientStatus::Discharged,
            severity: Severity::Low,
            room: "-".into(),
            diagnosis: "Post-stent recovery".into(),
            medications: vec!["Clopidogrel".into(), "Atorvastatin".into()],
            allergies: vec![],
            notes: "Discharged home. Cardiac rehab referral sent for P004.".into(),
            last_visit: "2026-08-15".into(),
            next_appointment: "2026-09-12".into(),
            vitals: VitalsSnapshot {
                blood_pressure: "126/80".into(),
                heart_rate: 64,
                temperature: 36.5,
                oxygen_saturation: 98,
                weight: 79.8,
                height: 175.0,
            },
        },
    ]
}

pub fn staff() -> Vec<StaffMember> {
    vec![
        StaffMember {
            id: "S001".into(),
            name: "Sarah Chen".into(),
            role: "Cardiologist".into(),
            specialty: "Interventional Cardiology".into(),
            department: "Cardiology".into(),
            department_id: None,
            status: StaffStatus::OnDuty,
            shift: "Day (07:00-19:00)".into(),
            years_experience: 12,
            patients_assigned: 8,
            rating: 4.8,
        },
        StaffMember {
            id: "S002".into(),
            name: "Marcus Webb".into(),
            role: "Neurologist".into(),
            specialty: "Stroke Medicine".into(),
            department: "Neurology".into(),
            department_id: None,
            status: StaffStatus::OnCall,
            shift: "On call (19:00-07:00)".into(),
            years_experience: 9,
            patients_assigned: 5,
            rating: 4.6,
        },
        StaffMember {
            id: "S003".into(),
            name: "James Okafor".into(),
            role: "Emergency Physician".into(),
            specialty: "Emergency Medicine".into(),
            department: "Emergency".into(),
            department_id: None,
            status: StaffStatus::OnDuty,
            shift: "Day (08:00-20:00)".into(),
            years_experience: 15,
            patients_assigned: 11,
            rating: 4.7,
        },
        StaffMember {
            id: "S004".into(),
            name: "Elena Rodriguez".into(),
            role: "Registered Nurse".into(),
            specialty: "Cardiac Care".into(),
            department: "Cardiology".into(),
            department_id: None,
            status: StaffStatus::OnDuty,
            shift: "Day (07:00-19:00)".into(),
            years_experience: 7,
            patients_assigned: 12,
            rating: 4.9,
        },
        StaffMember {
            id: "S005".into(),
            name: "Priya Nair".into(),
            role: "Pediatrician".into(),
            specialty: "General Pediatrics".into(),
            department: "Pediatrics".into(),
            department_id: None,
            status: StaffStatus::OffDuty,
            shift: "Night (19:00-07:00)".into(),
            years_experience: 6,
            patients_assigned: 0,
            rating: 4.5,
        },
    ]
}

pub fn departments() -> Vec<Department> {
    vec![
        Department {
            id: 1,
            name: "Emergency".into(),
            code: "EMRG".into(),
            capacity: 50,
            occupancy: 42,
            doctors: 12,
            nurses: 30,
            support_staff: 8,
            satisfaction: 4.0,
            critical_cases: 6,
            revenue: 98_200.0,
            avg_wait_time: 42,
        },
        Department {
            id: 2,
            name: "Cardiology".into(),
            code: "CARD".into(),
            capacity: 40,
            occupancy: 31,
            doctors: 10,
            nurses: 22,
            support_staff: 6,
            satisfaction: 4.5,
            critical_cases: 4,
            revenue: 110_000.0,
            avg_wait_time: 30,
        },
        Department {
            id: 3,
            name: "Neurology".into(),
            code: "NEUR".into(),
            capacity: 30,
            occupancy: 22,
            doctors: 8,
            nurses: 16,
            support_staff: 4,
            satisfaction: 4.3,
            critical_cases: 2,
            revenue: 87_300.0,
            avg_wait_time: 31,
        },
        Department {
            id: 4,
            name: "Pediatrics".into(),
            code: "PEDS".into(),
            capacity: 35,
            occupancy: 18,
            doctors: 9,
            nurses: 20,
            support_staff: 5,
            satisfaction: 4.7,
            critical_cases: 1,
            revenue: 64_800.0,
            avg_wait_time: 24,
        },
        Department {
            id: 5,
            name: "Oncology".into(),
            code: "ONCO".into(),
            capacity: 28,
            occupancy: 25,
            doctors: 7,
            nurses: 18,
            support_staff: 6,
            satisfaction: 4.2,
            critical_cases: 5,
            revenue: 152_600.0,
            avg_wait_time: 33,
        },
        Department {
            id: 6,
            name: "Orthopedics".into(),
            code: "ORTH".into(),
            capacity: 26,
            occupancy: 17,
            doctors: 6,
            nurses: 14,
            support_staff: 3,
            satisfaction: 4.2,
            critical_cases: 0,
            revenue: 71_900.0,
            avg_wait_time: 28,
        },
    ]
}

pub fn appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: "APT045".into(),
            patient_id: "P004".into(),
            patient_name: "George Whitfield".into(),
            doctor_id: Some("S001".into()),
            doctor_name: "Sarah Chen".into(),
            department: "Cardiology".into(),
            date: "2026-08-15".into(),
            time: "09:30".into(),
            appointment_type: "Follow-up".into(),
            status: AppointmentStatus::Completed,
            duration_minutes: 30,
            wait_time_minutes: Some(18),
            notes: "Stent site healing well.".into(),
        },
        Appointment {
            id: "APT046".into(),
            patient_id: "P003".into(),
            patient_name: "Lucia Fernandez".into(),
            doctor_id: Some("S002".into()),
            doctor_name: "Marcus Webb".into(),
            department: "Neurology".into(),
            date: "2026-08-25".into(),
            time: "11:00".into(),
            appointment_type: "Consultation".into(),
            status: AppointmentStatus::Completed,
            duration_minutes: 45,
            wait_time_minutes: Some(12),
            notes: "MRI ordered.".into(),
        },
        Appointment {
            id: "APT047".into(),
            patient_id: "P001".into(),
            patient_name: "Amelia Hartley".into(),
            doctor_id: Some("S001".into()),
            doctor_name: "Sarah Chen".into(),
            department: "Cardiology".into(),
            date: "2026-08-27".into(),
            time: "14:15".into(),
            appointment_type: "Review".into(),
            status: AppointmentStatus::Cancelled,
            duration_minutes: 30,
            wait_time_minutes: None,
            notes: "Patient rescheduled.".into(),
        },
        Appointment {
            id: "APT048".into(),
            patient_id: "P002".into(),
            patient_name: "Noah Okonkwo".into(),
            doctor_id: Some("S003".into()),
            doctor_name: "James Okafor".into(),
            department: "Emergency".into(),
            date: "2026-08-29".into(),
            time: "16:40".into(),
            appointment_type: "Urgent".into(),
            status: AppointmentStatus::InProgress,
            duration_minutes: 60,
            wait_time_minutes: None,
            notes: "".into(),
        },
        Appointment {
            id: "APT049".into(),
            patient_id: "P001".into(),
            patient_name: "Amelia Hartley".into(),
            doctor_id: Some("S001".into()),
            doctor_name: "Sarah Chen".into(),
            department: "Cardiology".into(),
            date: "2026-09-03".into(),
            time: "10:00".into(),
            appointment_type: "Procedure consult".into(),
            status: AppointmentStatus::Scheduled,
            duration_minutes: 45,
            wait_time_minutes: None,
            notes: "Ablation discussion.".into(),
        },
    ]
}

pub fn financial_by_department() -> Vec<FinancialByDepartment> {
    // No row for Orthopedics: its enhanced financial block is a join-miss.
    vec![
        FinancialByDepartment {
            department: "Emergency".into(),
            revenue: 98_200.0,
            percentage: 14.1,
        },
        FinancialByDepartment {
            department: "Cardiology".into(),
            revenue: 124_500.0,
            percentage: 17.8,
        },
        FinancialByDepartment {
            department: "Neurology".into(),
            revenue: 87_300.0,
            percentage: 12.5,
        },
        FinancialByDepartment {
            department: "Pediatrics".into(),
            revenue: 64_800.0,
            percentage: 9.3,
        },
        FinancialByDepartment {
            department: "Oncology".into(),
            revenue: 152_600.0,
            percentage: 21.9,
        },
    ]
}

pub fn satisfaction_by_department() -> Vec<SatisfactionByDepartment> {
    // No row for Cardiology; Oncology's exporter emitted a placeholder
    // score, carried here as None.
    vec![
        SatisfactionByDepartment {
            department: "Emergency".into(),
            score: Some(4.1),
        },
        SatisfactionByDepartment {
            department: "Neurology".into(),
            score: Some(4.4),
        },
        SatisfactionByDepartment {
            department: "Pediatrics".into(),
            score: Some(4.7),
        },
        SatisfactionByDepartment {
            department: "Oncology".into(),
            score: None,
        },
        SatisfactionByDepartment {
            department: "Orthopedics".into(),
            score: Some(4.2),
        },
    ]
}

pub fn wait_time_by_department() -> Vec<WaitTimeByDepartment> {
    // No row for Pediatrics or Orthopedics: they fall back to the
    // department's own avg_wait_time. Cardiology is missing its target.
    vec![
        WaitTimeByDepartment {
            department: "Emergency".into(),
            avg_wait: Some(42),
            target: Some(35),
        },
        WaitTimeByDepartment {
            department: "Cardiology".into(),
            avg_wait: Some(27),
            target: None,
        },
        WaitTimeByDepartment {
            department: "Neurology".into(),
            avg_wait: Some(31),
            target: Some(30),
        },
        WaitTimeByDepartment {
            department: "Oncology".into(),
            avg_wait: Some(33),
            target: Some(30),
        },
    ]
}

pub fn readmission_by_department() -> Vec<ReadmissionByDepartment> {
    // Only three departments report readmission; there is no fallback for
    // the rest. Cardiology is missing its target.
    vec![
        ReadmissionByDepartment {
            department: "Emergency".into(),
            rate: Some(11.2),
            target: Some(10.0),
        },
        ReadmissionByDepartment {
            department: "Cardiology".into(),
            rate: Some(8.9),
            target: None,
        },
        ReadmissionByDepartment {
            department: "Neurology".into(),
            rate: Some(7.4),
            target: Some(7.0),
        },
    ]
}

pub fn vital_history() -> HashMap<String, Vec<VitalReading>> {
    let mut history = HashMap::new();
    history.insert(
        "P001".to_string(),
        vec![
            VitalReading {
                recorded_at: "2026-08-27T06:00:00Z".into(),
                blood_pressure: "152/96".into(),
                heart_rate: 118,
                temperature: 37.2,
                oxygen_saturation: 95,
            },
            VitalReading {
                recorded_at: "2026-08-27T14:00:00Z".into(),
                blood_pressure: "141/90".into(),
                heart_rate: 104,
                temperature: 37.0,
                oxygen_saturation: 96,
            },
            VitalReading {
                recorded_at: "2026-08-28T06:00:00Z".into(),
                blood_pressure: "136/86".into(),
                heart_rate: 92,
                temperature: 36.9,
                oxygen_saturation: 97,
            },
            VitalReading {
                recorded_at: "2026-08-28T14:00:00Z".into(),
                blood_pressure: "132/84".into(),
                heart_rate: 88,
                temperature: 36.9,
                oxygen_saturation: 97,
            },
        ],
    );
    history.insert(
        "P003".to_string(),
        vec![
            VitalReading {
                recorded_at: "2026-08-25T09:00:00Z".into(),
                blood_pressure: "120/78".into(),
                heart_rate: 74,
                temperature: 36.7,
                oxygen_saturation: 99,
            },
            VitalReading {
                recorded_at: "2026-08-26T09:00:00Z".into(),
                blood_pressure: "118/76".into(),
                heart_rate: 72,
                temperature: 36.6,
                oxygen_saturation: 99,
            },
        ],
    );
    history
}

pub fn timeline_events() -> Vec<TimelineEvent> {
    vec![
        TimelineEvent {
            id: "TL001".into(),
            patient_id: "P001".into(),
            timestamp: "2026-08-18T10:42:00Z".into(),
            category: "admission".into(),
            title: "Admitted to Cardiology".into(),
            description: "P001 admitted under Sarah Chen with new-onset atrial fibrillation."
                .into(),
        },
        TimelineEvent {
            id: "TL002".into(),
            patient_id: "P001".into(),
            timestamp: "2026-08-19T08:15:00Z".into(),
            category: "medication".into(),
            title: "Anticoagulation started".into(),
            description: "Apixaban 5mg twice daily commenced.".into(),
        },
        TimelineEvent {
            id: "TL003".into(),
            patient_id: "P001".into(),
            timestamp: "2026-08-27T15:30:00Z".into(),
            category: "lab".into(),
            title: "Electrolyte panel".into(),
            description: "Results reviewed by Elena Rodriguez, within normal limits.".into(),
        },
        TimelineEvent {
            id: "TL004".into(),
            patient_id: "P002".into(),
            timestamp: "2026-08-29T16:05:00Z".into(),
            category: "admission".into(),
            title: "Admitted via Emergency".into(),
            description: "Triaged category 2, sepsis pathway started.".into(),
        },
    ]
}

pub fn overview() -> OverviewStatistics {
    OverviewStatistics {
        total_beds: 209,
        occupied_beds: 155,
        total_staff: 206,
        on_duty_staff: 118,
        total_patients: 155,
        critical_patients: 18,
        monthly_revenue: 649_300.0,
        satisfaction: 4.3,
        total_appointments: 49,
        today_appointments: 6,
        completed_appointments: 30,
        cancelled_appointments: 4,
    }
}
