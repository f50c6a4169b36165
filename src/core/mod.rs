pub mod aggregate;
pub mod classify;
pub mod normalize;
pub mod types;

pub use aggregate::{AggregatedReport, ReportShape, aggregate_report, detect_shape};
pub use classify::{RiskAssessment, RiskTier, classify};
pub use normalize::normalize_section;
pub use types::{COMBINED_VIEW, DEFAULT_VIEW, MetricRecord, NormalizedSection, ViewSummary};
