use biomech_rs::core::{RiskTier, classify};
use proptest::prelude::*;

proptest! {
    #[test]
    fn fill_stays_within_gauge_bounds(
        value in -1_000.0f64..1_000.0,
        min in -500.0f64..500.0,
        span in 0.0f64..500.0,
    ) {
        let assessment = classify(Some(value), Some(min), Some(min + span));
        prop_assert!(assessment.fill_percent >= 0.0);
        prop_assert!(assessment.fill_percent <= 100.0);
        prop_assert!(assessment.tier != RiskTier::Unavailable);
    }

    #[test]
    fn fill_is_monotone_in_deviation_above_range(
        min in -100.0f64..100.0,
        span in 0.1f64..100.0,
        deviation in 0.0f64..50.0,
        extra in 0.0f64..50.0,
    ) {
        let max = min + span;
        let nearer = classify(Some(max + deviation), Some(min), Some(max));
        let farther = classify(Some(max + deviation + extra), Some(min), Some(max));
        prop_assert!(farther.fill_percent >= nearer.fill_percent - 1e-9);
    }

    #[test]
    fn fill_is_monotone_in_deviation_below_range(
        min in -100.0f64..100.0,
        span in 0.1f64..100.0,
        deviation in 0.0f64..50.0,
        extra in 0.0f64..50.0,
    ) {
        let max = min + span;
        let nearer = classify(Some(min - deviation), Some(min), Some(max));
        let farther = classify(Some(min - deviation - extra), Some(min), Some(max));
        prop_assert!(farther.fill_percent >= nearer.fill_percent - 1e-9);
    }

    #[test]
    fn values_inside_range_are_always_ideal(
        min in -500.0f64..500.0,
        span in 0.0f64..500.0,
        position in 0.0f64..=1.0,
    ) {
        let max = min + span;
        let value = min + span * position;
        let assessment = classify(Some(value), Some(min), Some(max));
        prop_assert_eq!(assessment.tier, RiskTier::Ideal);
        prop_assert!(assessment.fill_percent <= 25.0 + 1e-9);
    }

    #[test]
    fn tier_agrees_with_fill_band(
        value in -1_000.0f64..1_000.0,
        min in -500.0f64..500.0,
        span in 0.1f64..500.0,
    ) {
        let assessment = classify(Some(value), Some(min), Some(min + span));
        let fill = assessment.fill_percent;
        match assessment.tier {
            RiskTier::Ideal => prop_assert!(fill <= 25.0),
            RiskTier::LowRisk => prop_assert!(fill > 25.0 && fill <= 50.0),
            RiskTier::MediumRisk => prop_assert!(fill > 50.0 && fill <= 75.0),
            RiskTier::HighRisk => prop_assert!(fill > 75.0 && fill <= 100.0),
            RiskTier::Unavailable => prop_assert!(false, "inputs were all present"),
        }
    }
}
