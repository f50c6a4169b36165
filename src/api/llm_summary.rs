//! Segmentation of the free-text coach summary for display.

use serde::{Deserialize, Serialize};

/// One display line of the generated summary.
///
/// The generation prompt asks for section headings written in uppercase and
/// ending with a colon (for example `SUMMARY:`); everything else is body
/// text rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryLine {
    /// Trimmed heading line.
    Heading(String),
    /// Body line, untrimmed.
    Text(String),
}

/// Splits summary text into display lines, tagging headings.
///
/// A line is a heading when its trimmed form is non-empty, ends with `:`,
/// and equals its own uppercase.
#[must_use]
pub fn segment_summary(summary: &str) -> Vec<SummaryLine> {
    summary
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            let is_heading = !trimmed.is_empty()
                && trimmed.ends_with(':')
                && trimmed == trimmed.to_uppercase();
            if is_heading {
                SummaryLine::Heading(trimmed.to_owned())
            } else {
                SummaryLine::Text(line.to_owned())
            }
        })
        .collect()
}
