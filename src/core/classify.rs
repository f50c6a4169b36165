//! Four-zone risk classification of a metric against its ideal range.
//!
//! Deviation is measured in the metric's own units (degrees for joint
//! angles). The zone thresholds and the 25-points-per-zone fill allocation
//! are product constants shared with the gauge widget; they are not tunable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::types::MetricRecord;

/// Deviation span of the low-risk zone, and of the medium-risk zone above it.
const ZONE_SPAN: f64 = 5.0;
/// Deviation beyond this saturates the high-risk zone fill at 100.
const HIGH_RISK_SATURATION: f64 = 10.0;
/// Each zone occupies a quarter of the gauge.
const ZONE_FILL: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Ideal,
    LowRisk,
    MediumRisk,
    HighRisk,
    /// No ideal range (or no observed value) for this metric; a legitimate
    /// outcome, not an error.
    Unavailable,
}

impl RiskTier {
    /// Gauge fill color for this tier.
    #[must_use]
    pub fn fill_color(self) -> &'static str {
        match self {
            Self::Ideal => "#4CAF50",
            Self::LowRisk => "#FFEB3B",
            Self::MediumRisk => "#FF9800",
            Self::HighRisk => "#F44336",
            Self::Unavailable => "#aaa",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ideal => "Ideal",
            Self::LowRisk => "Low Risk",
            Self::MediumRisk => "Medium Risk",
            Self::HighRisk => "High Risk",
            Self::Unavailable => "Unavailable",
        };
        f.write_str(label)
    }
}

/// Classification outcome: a discrete tier plus a continuous gauge position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    /// Gauge fill in `[0, 100]`; `0.0` when the tier is `Unavailable`.
    pub fill_percent: f64,
}

impl RiskAssessment {
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            tier: RiskTier::Unavailable,
            fill_percent: 0.0,
        }
    }

    /// Classifies a record's observed value against its own ideal bounds.
    #[must_use]
    pub fn for_record(record: &MetricRecord) -> Self {
        classify(record.uploaded, record.ideal_min, record.ideal_max)
    }
}

/// Maps an observed value and its ideal range to a risk tier and gauge fill.
///
/// Pure and deterministic. Any absent input yields `Unavailable`. Inside the
/// range the fill tracks the value's position within the ideal zone
/// (first quarter of the gauge); outside, each successive zone adds 25
/// points, saturating once the deviation reaches twice the high-risk
/// threshold.
#[must_use]
pub fn classify(
    value: Option<f64>,
    ideal_min: Option<f64>,
    ideal_max: Option<f64>,
) -> RiskAssessment {
    let (Some(value), Some(ideal_min), Some(ideal_max)) = (value, ideal_min, ideal_max) else {
        return RiskAssessment::unavailable();
    };

    let deviation = if value < ideal_min {
        ideal_min - value
    } else if value > ideal_max {
        value - ideal_max
    } else {
        0.0
    };

    if deviation == 0.0 {
        // Collapsed ranges (min == max) still fill deterministically.
        let range_size = match ideal_max - ideal_min {
            size if size == 0.0 => 1.0,
            size => size,
        };
        let value_in_range = (value - ideal_min).clamp(0.0, range_size);
        RiskAssessment {
            tier: RiskTier::Ideal,
            fill_percent: (value_in_range / range_size) * ZONE_FILL,
        }
    } else if deviation <= ZONE_SPAN {
        RiskAssessment {
            tier: RiskTier::LowRisk,
            fill_percent: ZONE_FILL + (deviation / ZONE_SPAN) * ZONE_FILL,
        }
    } else if deviation <= 2.0 * ZONE_SPAN {
        RiskAssessment {
            tier: RiskTier::MediumRisk,
            fill_percent: 2.0 * ZONE_FILL + ((deviation - ZONE_SPAN) / ZONE_SPAN) * ZONE_FILL,
        }
    } else {
        let excess = (deviation - 2.0 * ZONE_SPAN).min(HIGH_RISK_SATURATION);
        RiskAssessment {
            tier: RiskTier::HighRisk,
            fill_percent: 3.0 * ZONE_FILL + (excess / HIGH_RISK_SATURATION) * ZONE_FILL,
        }
    }
}
