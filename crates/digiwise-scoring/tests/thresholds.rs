use digiwise_core::models::result::RiskLevel;
use digiwise_scoring::config::{RiskBand, RiskThresholds, ScoringConfig};
use digiwise_scoring::error::ScoringError;
use pretty_assertions::assert_eq;

fn band(level: RiskLevel, min: u8, max: u8) -> RiskBand {
    RiskBand { level, min, max }
}

fn message(thresholds: &RiskThresholds) -> String {
    match thresholds.validate() {
        Err(ScoringError::InvalidThresholdConfiguration(msg)) => msg,
        other => panic!("expected invalid threshold configuration, got {other:?}"),
    }
}

#[test]
fn default_table_matches_boundaries() {
    let defaults = RiskThresholds::default();
    assert!(defaults.validate().is_ok());
    assert_eq!(RiskThresholds::from_boundaries(&[25, 50, 75]).unwrap(), defaults);
    assert_eq!(
        defaults.bands,
        vec![
            band(RiskLevel::Low, 0, 25),
            band(RiskLevel::Moderate, 25, 50),
            band(RiskLevel::High, 50, 75),
            band(RiskLevel::Severe, 75, 100),
        ]
    );
}

#[test]
fn empty_table_is_invalid() {
    let msg = message(&RiskThresholds { bands: vec![] });
    assert!(msg.contains("no risk bands"));
}

#[test]
fn table_must_cover_zero_to_one_hundred() {
    let late_start = RiskThresholds {
        bands: vec![band(RiskLevel::Low, 5, 50), band(RiskLevel::High, 50, 100)],
    };
    assert!(message(&late_start).contains("starts at 5"));

    let early_end = RiskThresholds {
        bands: vec![band(RiskLevel::Low, 0, 50), band(RiskLevel::High, 50, 90)],
    };
    assert!(message(&early_end).contains("ends at 90"));
}

#[test]
fn gaps_and_overlaps_are_invalid() {
    let gap = RiskThresholds {
        bands: vec![band(RiskLevel::Low, 0, 25), band(RiskLevel::Moderate, 30, 100)],
    };
    assert!(message(&gap).starts_with("gap"));

    let overlap = RiskThresholds {
        bands: vec![band(RiskLevel::Low, 0, 30), band(RiskLevel::Moderate, 25, 100)],
    };
    assert!(message(&overlap).starts_with("overlap"));
}

#[test]
fn levels_must_strictly_increase() {
    let inverted = RiskThresholds {
        bands: vec![band(RiskLevel::High, 0, 50), band(RiskLevel::Low, 50, 100)],
    };
    assert!(message(&inverted).contains("must increase"));

    let repeated = RiskThresholds {
        bands: vec![band(RiskLevel::Low, 0, 50), band(RiskLevel::Low, 50, 100)],
    };
    assert!(message(&repeated).contains("must increase"));
}

#[test]
fn empty_band_is_invalid() {
    let degenerate = RiskThresholds {
        bands: vec![
            band(RiskLevel::Low, 0, 0),
            band(RiskLevel::Moderate, 0, 100),
        ],
    };
    assert!(message(&degenerate).contains("empty or inverted"));
}

#[test]
fn from_boundaries_rejects_bad_input() {
    assert!(RiskThresholds::from_boundaries(&[10, 20, 30, 40]).is_err());
    assert!(RiskThresholds::from_boundaries(&[50, 25]).is_err());
    assert!(RiskThresholds::from_boundaries(&[0, 50]).is_err());
}

#[test]
fn single_band_table_is_valid() {
    let thresholds = RiskThresholds::from_boundaries(&[]).unwrap();
    assert_eq!(thresholds.bands, vec![band(RiskLevel::Low, 0, 100)]);
    assert_eq!(thresholds.band_for(100).map(|b| b.level), Some(RiskLevel::Low));
}

#[test]
fn config_deserializes_with_defaults() {
    let config: ScoringConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ScoringConfig::default());
    assert!(config.validate().is_ok());

    let config: ScoringConfig = serde_json::from_str(
        r#"{"weights": {"sleep": 0.5, "productivity": 0.5},
            "thresholds": {"bands": [
                {"level": "low", "min": 0, "max": 60},
                {"level": "severe", "min": 60, "max": 100}
            ]}}"#,
    )
    .unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.thresholds.bands[1].level, RiskLevel::Severe);
}

#[test]
fn config_validation_checks_weight_total() {
    let config: ScoringConfig =
        serde_json::from_str(r#"{"weights": {"A": 0.6, "B": 0.6}}"#).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ScoringError::InvalidWeightConfiguration(_))
    ));
}
