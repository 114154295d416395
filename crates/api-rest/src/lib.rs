//! # API REST
//!
//! REST surface for the wardboard read-model service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Every endpoint delegates to [`wardboard_core::ReadModelService`]; misses
//! on by-id lookups come back as a JSON `null` (or an empty array for
//! collection views) with status 200, so the dashboard can render its
//! "not found" state without special-casing status codes.

#![warn(rust_2018_idioms)]

use std::sync::Arc;

use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use wardboard_core::{DashboardError, ReadModelService};
use wardboard_types::{
    Appointment, AppointmentStatus, AppointmentUpdate, Department, EnhancedDepartment,
    FinancialBlock, NewAppointment, OverviewStatistics, PatientStatus, PatientVitals,
    QualityMetrics, ReadmissionBlock, SatisfactionBlock, SecurePatient, SecureStaffMember,
    Severity, ShiftAssignment, StaffSchedule, StaffStatus, TimelineEvent, VitalReading,
    VitalSignAlert, VitalsSnapshot, WaitTimeBlock,
};

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReadModelService>,
}

/// Health check response body.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Request body for an appointment status transition.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct UpdateStatusReq {
    pub status: AppointmentStatus,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_patients,
        list_staff,
        list_departments,
        get_department,
        get_enhanced_department,
        patients_by_department,
        staff_by_department,
        patients_by_staff,
        patient_vitals,
        patient_timeline,
        list_appointments,
        create_appointment,
        update_appointment,
        update_appointment_status,
        save_staff_schedule,
        overview,
    ),
    components(schemas(
        HealthRes,
        UpdateStatusReq,
        SecurePatient,
        SecureStaffMember,
        Department,
        EnhancedDepartment,
        PatientVitals,
        TimelineEvent,
        Appointment,
        NewAppointment,
        AppointmentUpdate,
        StaffSchedule,
        ShiftAssignment,
        OverviewStatistics,
        VitalsSnapshot,
        VitalReading,
        VitalSignAlert,
        QualityMetrics,
        FinancialBlock,
        SatisfactionBlock,
        WaitTimeBlock,
        ReadmissionBlock,
        PatientStatus,
        StaffStatus,
        AppointmentStatus,
        Severity,
    ))
)]
struct ApiDoc;

/// Build the REST router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/patients", get(list_patients))
        .route("/patients/:id/vitals", get(patient_vitals))
        .route("/patients/:id/timeline", get(patient_timeline))
        .route("/staff", get(list_staff))
        .route("/staff/:id/patients", get(patients_by_staff))
        .route("/staff/:id/schedule", put(save_staff_schedule))
        .route("/departments", get(list_departments))
        .route("/departments/:id", get(get_department))
        .route("/departments/:id/enhanced", get(get_enhanced_department))
        .route("/departments/:id/patients", get(patients_by_department))
        .route("/departments/:id/staff", get(staff_by_department))
        .route("/appointments", get(list_appointments))
        .route("/appointments", post(create_appointment))
        .route("/appointments/:id", put(update_appointment))
        .route("/appointments/:id/status", put(update_appointment_status))
        .route("/overview", get(overview))
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn internal_error(context: &'static str, e: DashboardError) -> (StatusCode, &'static str) {
    tracing::error!("{context}: {e:?}");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Wardboard REST API is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/patients",
    responses(
        (status = 200, description = "All patients, PII masked", body = [SecurePatient]),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<SecurePatient>>, (StatusCode, &'static str)> {
    state
        .service
        .secure_patients()
        .await
        .map(Json)
        .map_err(|e| internal_error("List patients error", e))
}

#[utoipa::path(
    get,
    path = "/staff",
    responses(
        (status = 200, description = "All staff, names masked", body = [SecureStaffMember]),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn list_staff(
    State(state): State<AppState>,
) -> Result<Json<Vec<SecureStaffMember>>, (StatusCode, &'static str)> {
    state
        .service
        .secure_staff()
        .await
        .map(Json)
        .map_err(|e| internal_error("List staff error", e))
}

#[utoipa::path(
    get,
    path = "/departments",
    responses(
        (status = 200, description = "All departments", body = [Department]),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Department>>, (StatusCode, &'static str)> {
    state
        .service
        .departments()
        .await
        .map(Json)
        .map_err(|e| internal_error("List departments error", e))
}

#[utoipa::path(
    get,
    path = "/departments/{id}",
    responses(
        (status = 200, description = "Department, or null when unknown", body = Option<Department>),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn get_department(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<u32>,
) -> Result<Json<Option<Department>>, (StatusCode, &'static str)> {
    state
        .service
        .department(id)
        .await
        .map(Json)
        .map_err(|e| internal_error("Get department error", e))
}

#[utoipa::path(
    get,
    path = "/departments/{id}/enhanced",
    responses(
        (status = 200, description = "Department with joined metrics, or null", body = Option<EnhancedDepartment>),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn get_enhanced_department(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<u32>,
) -> Result<Json<Option<EnhancedDepartment>>, (StatusCode, &'static str)> {
    state
        .service
        .enhanced_department(id)
        .await
        .map(Json)
        .map_err(|e| internal_error("Get enhanced department error", e))
}

#[utoipa::path(
    get,
    path = "/departments/{id}/patients",
    responses(
        (status = 200, description = "Masked patients in the department", body = [SecurePatient]),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn patients_by_department(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<u32>,
) -> Result<Json<Vec<SecurePatient>>, (StatusCode, &'static str)> {
    state
        .service
        .patients_by_department(id)
        .await
        .map(Json)
        .map_err(|e| internal_error("Patients by department error", e))
}

#[utoipa::path(
    get,
    path = "/departments/{id}/staff",
    responses(
        (status = 200, description = "Masked staff in the department", body = [SecureStaffMember]),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn staff_by_department(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<u32>,
) -> Result<Json<Vec<SecureStaffMember>>, (StatusCode, &'static str)> {
    state
        .service
        .staff_by_department(id)
        .await
        .map(Json)
        .map_err(|e| internal_error("Staff by department error", e))
}

#[utoipa::path(
    get,
    path = "/staff/{id}/patients",
    responses(
        (status = 200, description = "Masked patients attended by the staff member", body = [SecurePatient]),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn patients_by_staff(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Vec<SecurePatient>>, (StatusCode, &'static str)> {
    state
        .service
        .patients_by_staff(&id)
        .await
        .map(Json)
        .map_err(|e| internal_error("Patients by staff error", e))
}

#[utoipa::path(
    get,
    path = "/patients/{id}/vitals",
    responses(
        (status = 200, description = "Vitals bundle, or null for unknown patients", body = Option<PatientVitals>),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn patient_vitals(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Option<PatientVitals>>, (StatusCode, &'static str)> {
    state
        .service
        .patient_vitals(&id)
        .await
        .map(Json)
        .map_err(|e| internal_error("Patient vitals error", e))
}

#[utoipa::path(
    get,
    path = "/patients/{id}/timeline",
    responses(
        (status = 200, description = "Masked timeline events, empty for unknown patients", body = [TimelineEvent]),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn patient_timeline(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Vec<TimelineEvent>>, (StatusCode, &'static str)> {
    state
        .service
        .patient_timeline(&id)
        .await
        .map(Json)
        .map_err(|e| internal_error("Patient timeline error", e))
}

#[utoipa::path(
    get,
    path = "/appointments",
    responses(
        (status = 200, description = "All appointments", body = [Appointment]),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn list_appointments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Appointment>>, (StatusCode, &'static str)> {
    state
        .service
        .appointments()
        .await
        .map(Json)
        .map_err(|e| internal_error("List appointments error", e))
}

#[utoipa::path(
    post,
    path = "/appointments",
    request_body = NewAppointment,
    responses(
        (status = 201, description = "Appointment created", body = Appointment),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<NewAppointment>,
) -> Result<(StatusCode, Json<Appointment>), (StatusCode, &'static str)> {
    match state.service.create_appointment(payload).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(created))),
        Err(e) => Err(internal_error("Create appointment error", e)),
    }
}

#[utoipa::path(
    put,
    path = "/appointments/{id}",
    request_body = AppointmentUpdate,
    responses(
        (status = 200, description = "Updated appointment, or null when unknown", body = Option<Appointment>),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn update_appointment(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(update): Json<AppointmentUpdate>,
) -> Result<Json<Option<Appointment>>, (StatusCode, &'static str)> {
    state
        .service
        .update_appointment(&id, update)
        .await
        .map(Json)
        .map_err(|e| internal_error("Update appointment error", e))
}

#[utoipa::path(
    put,
    path = "/appointments/{id}/status",
    request_body = UpdateStatusReq,
    responses(
        (status = 200, description = "Appointment after the transition, or null when unknown", body = Option<Appointment>),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn update_appointment_status(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(req): Json<UpdateStatusReq>,
) -> Result<Json<Option<Appointment>>, (StatusCode, &'static str)> {
    state
        .service
        .update_appointment_status(&id, req.status)
        .await
        .map(Json)
        .map_err(|e| internal_error("Update appointment status error", e))
}

#[utoipa::path(
    put,
    path = "/staff/{id}/schedule",
    request_body = StaffSchedule,
    responses(
        (status = 200, description = "Accepted schedule", body = StaffSchedule),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn save_staff_schedule(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(mut schedule): Json<StaffSchedule>,
) -> Result<Json<StaffSchedule>, (StatusCode, &'static str)> {
    // The path is authoritative for which staff member is being scheduled.
    schedule.staff_id = id;
    state
        .service
        .save_staff_schedule(schedule)
        .await
        .map(Json)
        .map_err(|e| internal_error("Save staff schedule error", e))
}

#[utoipa::path(
    get,
    path = "/overview",
    responses(
        (status = 200, description = "Hospital-wide overview statistics", body = OverviewStatistics),
        (status = 500, description = "Internal server error")
    )
)]
#[axum::debug_handler]
async fn overview(
    State(state): State<AppState>,
) -> Result<Json<OverviewStatistics>, (StatusCode, &'static str)> {
    state
        .service
        .overview()
        .await
        .map(Json)
        .map_err(|e| internal_error("Overview error", e))
}
