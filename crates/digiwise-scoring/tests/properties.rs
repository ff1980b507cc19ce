//! Invariants that must hold for every valid answer set:
//! - category and overall scores stay within [0, 100]
//! - equal weighting is the rounded arithmetic mean
//! - risk classification never decreases as the score rises
//! - scoring is a pure function of its inputs

use std::collections::BTreeMap;

use digiwise_core::models::answer::Answer;
use digiwise_scoring::catalogs::digital_wellness::DigitalWellness;
use digiwise_scoring::config::{RiskThresholds, ScoringConfig};
use digiwise_scoring::scoring::{
    classify_risk, compute_category_scores, compute_overall_score, score,
};
use digiwise_scoring::Catalog;
use proptest::prelude::*;

fn answer_set() -> impl Strategy<Value = Vec<Answer>> {
    let count = DigitalWellness.active_questions().len();
    proptest::collection::vec(0u8..=4, count).prop_map(|values| {
        DigitalWellness
            .active_questions()
            .iter()
            .zip(values)
            .map(|(q, value)| Answer::new(q.id, value))
            .collect()
    })
}

/// Five positive weights normalised to sum to 1.0.
fn weight_table() -> impl Strategy<Value = BTreeMap<String, f64>> {
    proptest::collection::vec(1u32..1000, 5).prop_map(|raw| {
        let total: u32 = raw.iter().sum();
        DigitalWellness
            .categories()
            .iter()
            .zip(raw)
            .map(|(c, w)| (c.id.clone(), f64::from(w) / f64::from(total)))
            .collect()
    })
}

proptest! {
    #[test]
    fn category_scores_stay_in_bounds(answers in answer_set()) {
        let scores = compute_category_scores(&answers, &DigitalWellness).unwrap();
        prop_assert_eq!(scores.len(), DigitalWellness.categories().len());
        for score in scores.values() {
            prop_assert!(*score <= 100);
        }
    }

    #[test]
    fn equal_weights_give_rounded_mean(answers in answer_set()) {
        let scores = compute_category_scores(&answers, &DigitalWellness).unwrap();
        let overall = compute_overall_score(&scores, None).unwrap();

        let sum: u64 = scores.values().map(|s| u64::from(*s)).sum();
        let n = scores.len() as u64;
        let expected = (2 * sum + n) / (2 * n);
        prop_assert_eq!(u64::from(overall), expected);
        prop_assert!(overall <= 100);
    }

    #[test]
    fn weighted_overall_stays_in_bounds(answers in answer_set(), weights in weight_table()) {
        let scores = compute_category_scores(&answers, &DigitalWellness).unwrap();
        let overall = compute_overall_score(&scores, Some(&weights)).unwrap();
        prop_assert!(overall <= 100);

        let min = *scores.values().min().unwrap();
        let max = *scores.values().max().unwrap();
        prop_assert!(overall >= min && overall <= max);
    }

    #[test]
    fn classification_is_monotonic(a in 0u8..=100, b in 0u8..=100) {
        let thresholds = RiskThresholds::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            classify_risk(low, &thresholds).unwrap() <= classify_risk(high, &thresholds).unwrap()
        );
    }

    #[test]
    fn scoring_is_idempotent(answers in answer_set()) {
        let config = ScoringConfig::default();
        let first = score(&answers, &DigitalWellness, &config).unwrap();
        let second = score(&answers, &DigitalWellness, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
