//! biomech-rs: report normalization and risk-classification core.
//!
//! This crate turns the loosely-typed comparison reports produced by a
//! bowling biomechanics backend into canonical metric records and classifies
//! each record into a four-zone risk tier for gauge rendering. Transport and
//! visual rendering stay with the host application.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ReportResponse, parse_report_response};
pub use error::{ReportError, ReportResult};
pub use self::core::{
    AggregatedReport, MetricRecord, RiskAssessment, RiskTier, aggregate_report, classify,
};
