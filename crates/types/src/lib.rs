//! # Wardboard Types
//!
//! Domain types for the hospital operations dashboard.
//!
//! This crate contains the raw entity types as stored by the data source, the
//! closed status enumerations, and the *secure projections* returned from the
//! read-model boundary.
//!
//! Raw and secure types are deliberately distinct: a [`patient::Patient`]
//! carries unmasked PII and must never leave the read-model service, while a
//! [`patient::SecurePatient`] can only be built through its masking
//! constructor. Returning the wrong one from a secure accessor is a type
//! error, not a code-review catch.
//!
//! **No service concerns**: aggregation, joins, and caching belong in
//! `wardboard-core`; HTTP belongs in `api-rest`.

pub mod appointment;
pub mod department;
pub mod overview;
pub mod patient;
pub mod staff;
pub mod status;
pub mod views;

pub use appointment::{Appointment, AppointmentUpdate, NewAppointment};
pub use department::{
    Department, FinancialByDepartment, ReadmissionByDepartment, SatisfactionByDepartment,
    WaitTimeByDepartment,
};
pub use overview::OverviewStatistics;
pub use patient::{Patient, SecurePatient, VitalsSnapshot};
pub use staff::{SecureStaffMember, ShiftAssignment, StaffMember, StaffSchedule};
pub use status::{AppointmentStatus, PatientStatus, Severity, StaffStatus, StatusType};
pub use views::{
    EnhancedDepartment, FinancialBlock, PatientVitals, QualityMetrics, ReadmissionBlock,
    SatisfactionBlock, TimelineEvent, VitalReading, VitalSignAlert, WaitTimeBlock,
};
