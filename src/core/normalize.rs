//! Per-section normalization of the backend's drifting report schema.
//!
//! The backend has shipped several generations of field names and value
//! types for the same metric record. Normalization reconciles the known
//! aliases, coerces values defensively, and never errors: partial or legacy
//! data must still render something.

use serde_json::{Map, Value};

use crate::core::types::{DEFAULT_VIEW, MetricRecord, NormalizedSection, ViewSummary};

const FEATURE_ALIASES: &[&str] = &["feature", "Feature"];
const UPLOADED_ALIASES: &[&str] = &["uploaded", "Uploaded", "Average"];
const REFERENCE_ALIASES: &[&str] = &["reference", "Reference", "ref"];
const PCT_DIFF_ALIASES: &[&str] = &["pct_diff", "pctDiff"];

/// Normalizes one raw per-view report section.
///
/// Accepts anything: `None`, a non-object, an object without `items` or
/// `summary`. Whatever is missing degrades to defaults instead of erroring.
#[must_use]
pub fn normalize_section(section: Option<&Value>) -> NormalizedSection {
    let Some(Value::Object(fields)) = section else {
        return NormalizedSection::default();
    };

    let items = match fields.get("items") {
        Some(Value::Array(raw_items)) => raw_items
            .iter()
            .enumerate()
            .map(|(idx, raw)| normalize_item(raw, idx))
            .collect(),
        _ => Vec::new(),
    };

    NormalizedSection {
        items,
        summary: ViewSummary::from_section_value(fields.get("summary")),
    }
}

fn normalize_item(raw: &Value, idx: usize) -> MetricRecord {
    let Some(fields) = raw.as_object() else {
        // Array slots that are not objects still yield a placeholder record.
        return MetricRecord {
            feature: synthesized_feature(idx),
            ..MetricRecord::default()
        };
    };

    let uploaded = first_present(fields, UPLOADED_ALIASES).and_then(lenient_number);
    let reference = first_present(fields, REFERENCE_ALIASES).and_then(lenient_number);

    MetricRecord {
        view: match fields.get("view") {
            Some(Value::String(view)) => view.clone(),
            _ => DEFAULT_VIEW.to_owned(),
        },
        feature: first_present(fields, FEATURE_ALIASES)
            .and_then(feature_label)
            .unwrap_or_else(|| synthesized_feature(idx)),
        uploaded,
        reference,
        ideal_min: fields.get("ideal_min").and_then(strict_number),
        ideal_max: fields.get("ideal_max").and_then(strict_number),
        uploaded_for_chart: chart_safe(uploaded),
        reference_for_chart: chart_safe(reference),
        pct_diff: first_present(fields, PCT_DIFF_ALIASES).cloned(),
        difference: non_null(fields.get("difference")).cloned(),
        zscore: non_null(fields.get("zscore")).cloned(),
        flag: match fields.get("flag") {
            Some(Value::String(flag)) if !flag.is_empty() => flag.clone(),
            _ => "ok".to_owned(),
        },
        units: match fields.get("units") {
            Some(Value::String(units)) => units.clone(),
            _ => String::new(),
        },
    }
}

fn synthesized_feature(idx: usize) -> String {
    format!("feat_{idx}")
}

/// Stringified feature name; empty strings count as missing so the
/// synthesized fallback kicks in.
fn feature_label(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// First alias whose value is present and not JSON `null`.
fn first_present<'a>(fields: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases
        .iter()
        .find_map(|alias| non_null(fields.get(*alias)))
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Lenient numeric coercion for observed/reference values: numbers pass
/// through, strings are accepted when they parse to a finite float.
fn lenient_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite()),
        _ => None,
    }
}

/// Strict numeric coercion for ideal bounds: only values that arrived as
/// JSON numbers count. Numeric strings are rejected on purpose; the bounds
/// drive classification and may not inherit the lenient observed-value
/// policy.
fn strict_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        _ => None,
    }
}

fn chart_safe(value: Option<f64>) -> f64 {
    value.filter(|number| number.is_finite()).unwrap_or(0.0)
}
