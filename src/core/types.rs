use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// View tag applied when an item carries no usable `view` field.
pub const DEFAULT_VIEW: &str = "front";

/// Summary key used when a legacy flat report carries a single summary block.
pub const COMBINED_VIEW: &str = "combined";

/// Canonical per-feature comparison record, safe for rendering.
///
/// `uploaded`/`reference` stay absent when the backend sent nothing usable;
/// `uploaded_for_chart`/`reference_for_chart` are always finite so chart
/// arithmetic never has to branch on missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub view: String,
    pub feature: String,
    pub uploaded: Option<f64>,
    pub reference: Option<f64>,
    pub ideal_min: Option<f64>,
    pub ideal_max: Option<f64>,
    pub uploaded_for_chart: f64,
    pub reference_for_chart: f64,
    pub pct_diff: Option<Value>,
    pub difference: Option<Value>,
    pub zscore: Option<Value>,
    pub flag: String,
    pub units: String,
}

impl Default for MetricRecord {
    fn default() -> Self {
        Self {
            view: DEFAULT_VIEW.to_owned(),
            feature: String::new(),
            uploaded: None,
            reference: None,
            ideal_min: None,
            ideal_max: None,
            uploaded_for_chart: 0.0,
            reference_for_chart: 0.0,
            pct_diff: None,
            difference: None,
            zscore: None,
            flag: "ok".to_owned(),
            units: String::new(),
        }
    }
}

impl MetricRecord {
    /// True when the record has neither an ideal range nor a reference value,
    /// so the host should surface a "no ideal range" note for it.
    #[must_use]
    pub fn lacks_comparison_basis(&self) -> bool {
        self.ideal_min.is_none() && self.reference.is_none()
    }
}

/// Open per-view summary mapping as delivered by the backend.
///
/// The backend promises nothing about its keys; the accessors below cover the
/// fields the product actually displays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewSummary(Map<String, Value>);

impl ViewSummary {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Extracts the summary object from a raw section value, defaulting to
    /// empty when missing or not an object.
    #[must_use]
    pub fn from_section_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Object(map)) => Self(map.clone()),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.0.get("score").and_then(Value::as_f64)
    }

    #[must_use]
    pub fn total_compared(&self) -> Option<u64> {
        self.0.get("total_compared").and_then(Value::as_u64)
    }

    #[must_use]
    pub fn flagged_count(&self) -> Option<u64> {
        self.0.get("flagged_count").and_then(Value::as_u64)
    }
}

/// Output of normalizing one per-view report section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedSection {
    pub items: Vec<MetricRecord>,
    pub summary: ViewSummary,
}
