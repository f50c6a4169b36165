pub mod ideal_table;
pub mod llm_summary;
pub mod payload;
pub mod readiness;

pub use ideal_table::filter_ideal_ranges;
pub use llm_summary::{SummaryLine, segment_summary};
pub use payload::{
    IdealRange, ReportDocument, ReportResponse, parse_report_response, repair_nan_tokens,
};
pub use readiness::{REPORT_POLL_INTERVAL, report_ready};
