//! Display filtering of the ideal-biomechanics reference table.
//!
//! Parameter names in the reference table come from a hand-maintained CSV
//! and rarely match the pose model's feature names exactly, so matching is
//! fuzzy: case-insensitive, punctuation-insensitive, substring either way.

use indexmap::IndexMap;

use crate::api::payload::IdealRange;
use crate::core::MetricRecord;

/// Lowercases and strips everything non-alphanumeric.
fn canonical_key(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Keeps only the reference-table rows whose parameter name fuzzily matches
/// a feature extracted from the report. Table order is preserved; an empty
/// result means the table should not be shown at all.
#[must_use]
pub fn filter_ideal_ranges(
    ideal_biomechanics: &IndexMap<String, IdealRange>,
    items: &[MetricRecord],
) -> IndexMap<String, IdealRange> {
    let feature_keys: Vec<String> = {
        let mut keys: Vec<String> = Vec::new();
        for item in items {
            let key = canonical_key(&item.feature);
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    };

    ideal_biomechanics
        .iter()
        .filter(|(param, _)| {
            let param_key = canonical_key(param);
            feature_keys
                .iter()
                .any(|feature| param_key.contains(feature.as_str()) || feature.contains(&param_key))
        })
        .map(|(param, range)| (param.clone(), range.clone()))
        .collect()
}
