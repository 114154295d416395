//! # Wardboard Core
//!
//! Read-model aggregation layer for the hospital operations dashboard.
//!
//! This crate sits between the raw data source and the presentation layer:
//! - Fetches raw entities (patients, staff, departments, appointments,
//!   per-department financial and quality metrics)
//! - Joins them across collections (department ↔ staff ↔ patients,
//!   doctor ↔ patients)
//! - Derives computed views (enhanced department, vitals + alerts, timeline)
//! - Applies PII masking before anything is returned to callers
//!
//! **No API concerns**: HTTP endpoints, OpenAPI documentation, and CORS
//! belong in `api-rest`.

pub mod cache;
pub mod config;
pub mod datasource;
pub mod error;
pub mod format;
pub mod seed;
pub mod service;

pub use cache::TtlCache;
pub use config::{CoreConfig, DataSourceMode};
pub use datasource::{DataSource, RestDataSource, StaticDataSource};
pub use error::{DashboardError, DashboardResult};
pub use service::ReadModelService;
