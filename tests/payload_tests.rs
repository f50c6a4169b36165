use std::borrow::Cow;
use std::time::Duration;

use biomech_rs::api::{
    IdealRange, REPORT_POLL_INTERVAL, SummaryLine, filter_ideal_ranges, parse_report_response,
    repair_nan_tokens, report_ready, segment_summary,
};
use biomech_rs::core::{MetricRecord, RiskTier};
use indexmap::IndexMap;

fn keyed_body() -> &'static str {
    r#"{
        "success": true,
        "report": {
            "comparison_report": {
                "side": {
                    "items": [{ "feature": "Step Length", "uploaded": 1.2 }],
                    "summary": { "score": 90 }
                },
                "front": {
                    "items": [
                        { "feature": "Elbow Angle", "uploaded": 150,
                          "ideal_min": 140, "ideal_max": 180 }
                    ],
                    "summary": { "score": 85 }
                }
            },
            "llm_summary": "SUMMARY:\nNice approach overall.\n"
        },
        "ideal_biomechanics": {
            "Elbow Angle": { "min": 140, "max": 180, "units": "deg" },
            "Hip Rotation": { "min": null, "max": 45, "units": "deg" }
        }
    }"#
}

#[test]
fn strict_json_parses_without_repair() {
    let response = parse_report_response(keyed_body()).expect("parse");
    assert!(response.is_usable());
    assert_eq!(response.ideal_biomechanics.len(), 2);
}

#[test]
fn nan_tokens_are_repaired_before_parsing() {
    let body = r#"{
        "success": true,
        "report": {
            "comparison_report": {
                "front": {
                    "items": [{ "feature": "Elbow Angle", "uploaded": NaN }],
                    "summary": { "score": NaN }
                }
            }
        }
    }"#;
    let response = parse_report_response(body).expect("parse after repair");
    let aggregated = response.aggregated();
    assert_eq!(aggregated.items.len(), 1);
    // NaN became null, which normalization treats as absent.
    assert_eq!(aggregated.items[0].uploaded, None);
    assert_eq!(aggregated.items[0].uploaded_for_chart, 0.0);
    assert_eq!(aggregated.summary_by_view["front"].score(), None);
}

#[test]
fn repair_borrows_when_no_token_present() {
    assert!(matches!(repair_nan_tokens("{}"), Cow::Borrowed(_)));
    assert_eq!(repair_nan_tokens(r#"{"x": NaN}"#), r#"{"x": null}"#);
}

#[test]
fn unparseable_body_is_an_error() {
    assert!(parse_report_response("not json at all").is_err());
}

#[test]
fn envelope_without_report_is_not_usable() {
    let response = parse_report_response(r#"{ "success": true }"#).expect("parse");
    assert!(!response.is_usable());
    assert!(response.aggregated().is_empty());

    let response =
        parse_report_response(r#"{ "success": false, "report": { "llm_summary": "" } }"#)
            .expect("parse");
    assert!(!response.is_usable());
}

#[test]
fn missing_envelope_fields_default() {
    let response = parse_report_response("{}").expect("parse");
    assert!(!response.success);
    assert_eq!(response.message, None);
    assert!(response.report.is_none());
    assert!(response.ideal_biomechanics.is_empty());
}

#[test]
fn null_envelope_fields_are_treated_as_missing() {
    let body = r#"{
        "success": true,
        "report": { "comparison_report": {}, "llm_summary": null },
        "ideal_biomechanics": null
    }"#;
    let response = parse_report_response(body).expect("parse");
    assert!(response.is_usable());
    assert_eq!(response.report.expect("report").llm_summary, "");
    assert!(response.ideal_biomechanics.is_empty());
}

#[test]
fn aggregated_report_flows_into_classification() {
    let response = parse_report_response(keyed_body()).expect("parse");
    let aggregated = response.aggregated();

    let item_views: Vec<&str> = aggregated
        .items
        .iter()
        .map(|item| item.view.as_str())
        .collect();
    assert_eq!(item_views, ["side", "front"]);

    let elbow = &aggregated.items[1];
    let assessment = biomech_rs::core::RiskAssessment::for_record(elbow);
    assert_eq!(assessment.tier, RiskTier::Ideal);

    // Step Length has no ideal range in the report.
    let step = &aggregated.items[0];
    assert_eq!(
        biomech_rs::core::RiskAssessment::for_record(step).tier,
        RiskTier::Unavailable
    );
    assert!(step.lacks_comparison_basis());
}

#[test]
fn ideal_table_is_filtered_by_fuzzy_feature_match() {
    let response = parse_report_response(keyed_body()).expect("parse");
    let aggregated = response.aggregated();

    let filtered = filter_ideal_ranges(&response.ideal_biomechanics, &aggregated.items);
    let params: Vec<&String> = filtered.keys().collect();
    // "Elbow Angle" matches the extracted feature; "Hip Rotation" does not.
    assert_eq!(params, ["Elbow Angle"]);
    assert_eq!(filtered["Elbow Angle"].min, Some(140.0));
    assert_eq!(filtered["Elbow Angle"].units, "deg");
}

#[test]
fn fuzzy_match_ignores_case_and_punctuation() {
    let mut table: IndexMap<String, IdealRange> = IndexMap::new();
    table.insert(
        "Elbow-Angle (release)".to_owned(),
        IdealRange {
            min: Some(140.0),
            max: Some(180.0),
            units: "deg".to_owned(),
        },
    );

    let record = MetricRecord {
        feature: "elbow angle".to_owned(),
        ..MetricRecord::default()
    };

    let filtered = filter_ideal_ranges(&table, std::slice::from_ref(&record));
    assert_eq!(filtered.len(), 1);

    let unrelated = MetricRecord {
        feature: "knee flexion".to_owned(),
        ..MetricRecord::default()
    };
    let filtered = filter_ideal_ranges(&table, std::slice::from_ref(&unrelated));
    assert!(filtered.is_empty());
}

#[test]
fn summary_headings_are_uppercase_lines_ending_with_colon() {
    let lines = segment_summary("SUMMARY:\nGood balance.\nAREAS TO IMPROVE:\n\nFollow through.");
    assert_eq!(
        lines,
        vec![
            SummaryLine::Heading("SUMMARY:".to_owned()),
            SummaryLine::Text("Good balance.".to_owned()),
            SummaryLine::Heading("AREAS TO IMPROVE:".to_owned()),
            SummaryLine::Text(String::new()),
            SummaryLine::Text("Follow through.".to_owned()),
        ]
    );
}

#[test]
fn mixed_case_or_colonless_lines_are_not_headings() {
    let lines = segment_summary("Summary:\nNOTES");
    assert_eq!(
        lines,
        vec![
            SummaryLine::Text("Summary:".to_owned()),
            SummaryLine::Text("NOTES".to_owned()),
        ]
    );
}

#[test]
fn readiness_treats_any_200_as_ready() {
    assert!(report_ready(200));
    assert!(!report_ready(202));
    assert!(!report_ready(404));
    assert!(!report_ready(500));
}

#[test]
fn poll_interval_is_five_seconds() {
    assert_eq!(REPORT_POLL_INTERVAL, Duration::from_secs(5));
}
