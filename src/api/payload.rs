//! Report response envelope and pre-parse repair.
//!
//! The backend serializes with Python's `json.dumps`, which can emit the
//! bare token `NaN` where strict JSON requires a number. Parsing therefore
//! tries strict JSON first and falls back to a repaired body.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::core::{AggregatedReport, aggregate_report};
use crate::error::{ReportError, ReportResult};

/// One row of the ideal-biomechanics reference table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdealRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub units: String,
}

/// The report document proper: the comparison payload plus the free-text
/// summary. `comparison_report` stays a raw value; its shape varies by
/// backend generation and is resolved by [`aggregate_report`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    #[serde(default)]
    pub comparison_report: Value,
    // Null while the summary is still generating.
    #[serde(default, deserialize_with = "null_as_default")]
    pub llm_summary: String,
}

/// Top-level response envelope for the latest-report endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub report: Option<ReportDocument>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ideal_biomechanics: IndexMap<String, IdealRange>,
}

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ReportResponse {
    /// True when the envelope carries a report the host should render.
    /// Anything else clears the display state to "no data available".
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.success && self.report.is_some()
    }

    /// Aggregates the embedded comparison report, or an empty result when
    /// the envelope carries none.
    #[must_use]
    pub fn aggregated(&self) -> AggregatedReport {
        match &self.report {
            Some(document) => aggregate_report(&document.comparison_report),
            None => AggregatedReport::default(),
        }
    }
}

/// Replaces `NaN` tokens with `null` so the body parses as strict JSON.
///
/// The replacement is blanket, matching the backend contract: the token has
/// only ever appeared in number position, so occurrences inside string
/// values are not carved out.
#[must_use]
pub fn repair_nan_tokens(body: &str) -> Cow<'_, str> {
    if body.contains("NaN") {
        Cow::Owned(body.replace("NaN", "null"))
    } else {
        Cow::Borrowed(body)
    }
}

/// Parses a latest-report response body, repairing `NaN` tokens when the
/// strict parse fails.
pub fn parse_report_response(body: &str) -> ReportResult<ReportResponse> {
    if let Ok(response) = serde_json::from_str::<ReportResponse>(body) {
        return Ok(response);
    }

    let repaired = repair_nan_tokens(body);
    if matches!(repaired, Cow::Owned(_)) {
        warn!("report body was not strict JSON; repaired NaN tokens");
    }
    serde_json::from_str(&repaired)
        .map_err(|e| ReportError::InvalidPayload(format!("failed to parse report response: {e}")))
}
