//! Whole-report aggregation: shape detection and per-view dispatch.
//!
//! The backend has two live generations of `comparison_report`: a legacy
//! flat object carrying `items`/`summary` directly, and the current shape
//! keyed by camera view (`front`/`side`/`back`). Detection happens in one
//! place and both shapes funnel through the same normalizer.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::normalize::normalize_section;
use crate::core::types::{COMBINED_VIEW, MetricRecord, ViewSummary};

/// Explicit report-shape tag, resolved once per payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportShape {
    /// Legacy object with an `items` array at the top level.
    Flat,
    /// Object whose keys are camera views, each holding a section.
    Keyed,
    /// Not an object at all; contributes nothing.
    Unrecognized,
}

#[must_use]
pub fn detect_shape(comparison_report: &Value) -> ReportShape {
    match comparison_report {
        Value::Object(fields) => {
            if matches!(fields.get("items"), Some(Value::Array(_))) {
                ReportShape::Flat
            } else {
                ReportShape::Keyed
            }
        }
        _ => ReportShape::Unrecognized,
    }
}

/// Flat list of tagged records plus the per-view summaries, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedReport {
    pub items: Vec<MetricRecord>,
    pub summary_by_view: IndexMap<String, ViewSummary>,
}

impl AggregatedReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.summary_by_view.is_empty()
    }

    /// Distinct views in first-encounter order, for per-view rendering.
    #[must_use]
    pub fn views(&self) -> Vec<&str> {
        let mut views: Vec<&str> = Vec::new();
        for item in &self.items {
            if !views.contains(&item.view.as_str()) {
                views.push(item.view.as_str());
            }
        }
        views
    }

    #[must_use]
    pub fn items_for_view(&self, view: &str) -> Vec<&MetricRecord> {
        self.items.iter().filter(|item| item.view == view).collect()
    }
}

/// Aggregates a raw `comparison_report` value into tagged records and
/// per-view summaries.
///
/// Item order is the concatenation of per-view normalized lists in the
/// source object's key order; `summary_by_view` is insertion-ordered the
/// same way. Malformed input degrades to an empty result, never an error,
/// so the caller can re-invoke this on every poll tick.
#[must_use]
pub fn aggregate_report(comparison_report: &Value) -> AggregatedReport {
    match detect_shape(comparison_report) {
        ReportShape::Flat => {
            let section = normalize_section(Some(comparison_report));
            debug!(item_count = section.items.len(), "aggregated flat report");
            let mut summary_by_view = IndexMap::new();
            summary_by_view.insert(COMBINED_VIEW.to_owned(), section.summary);
            AggregatedReport {
                items: section.items,
                summary_by_view,
            }
        }
        ReportShape::Keyed => {
            let Value::Object(fields) = comparison_report else {
                return AggregatedReport::default();
            };
            let aggregated = fields.iter().fold(
                AggregatedReport::default(),
                |mut aggregated, (view, section_value)| {
                    if section_value.is_null() {
                        debug!(view, "skipping null view section");
                        return aggregated;
                    }
                    let section = normalize_section(Some(section_value));
                    debug!(view, item_count = section.items.len(), "aggregated view");
                    aggregated
                        .items
                        .extend(section.items.into_iter().map(|mut item| {
                            item.view = view.clone();
                            item
                        }));
                    aggregated
                        .summary_by_view
                        .insert(view.clone(), section.summary);
                    aggregated
                },
            );
            debug!(
                total_items = aggregated.items.len(),
                view_count = aggregated.summary_by_view.len(),
                "aggregated keyed report"
            );
            aggregated
        }
        ReportShape::Unrecognized => {
            warn!("comparison report is not an object; producing empty result");
            AggregatedReport::default()
        }
    }
}
