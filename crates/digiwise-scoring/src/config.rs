use std::collections::BTreeMap;

use digiwise_core::models::result::RiskLevel;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;

/// Allowed drift of the weight total away from 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Upper bound of every score scale.
pub const MAX_SCORE: u8 = 100;

/// Category label → relative importance. Must sum to 1.0.
pub type CategoryWeights = BTreeMap<String, f64>;

/// Tunable inputs to the scoring engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringConfig {
    /// `None` weighs every category equally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<CategoryWeights>,
    #[serde(default)]
    pub thresholds: RiskThresholds,
}

impl ScoringConfig {
    /// Checks everything that can be checked without knowing the catalog.
    pub fn validate(&self) -> Result<(), ScoringError> {
        self.thresholds.validate()?;
        if let Some(weights) = &self.weights {
            check_weight_values(weights)?;
        }
        Ok(())
    }
}

/// One half-open score interval `[min, max)` mapped to a risk level.
/// The last band of a table also includes `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskBand {
    pub level: RiskLevel,
    pub min: u8,
    pub max: u8,
}

/// Ordered band table partitioning `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskThresholds {
    pub bands: Vec<RiskBand>,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        let band = |level, min, max| RiskBand { level, min, max };
        Self {
            bands: vec![
                band(RiskLevel::Low, 0, 25),
                band(RiskLevel::Moderate, 25, 50),
                band(RiskLevel::High, 50, 75),
                band(RiskLevel::Severe, 75, MAX_SCORE),
            ],
        }
    }
}

impl RiskThresholds {
    /// Build a table from interior boundaries, assigning levels from
    /// `low` upwards. `[25, 50, 75]` yields the four default bands.
    pub fn from_boundaries(boundaries: &[u8]) -> Result<Self, ScoringError> {
        if boundaries.len() >= RiskLevel::ALL.len() {
            return Err(ScoringError::InvalidThresholdConfiguration(format!(
                "{} boundaries given, at most {} supported",
                boundaries.len(),
                RiskLevel::ALL.len() - 1
            )));
        }

        let mut edges = Vec::with_capacity(boundaries.len() + 2);
        edges.push(0);
        edges.extend_from_slice(boundaries);
        edges.push(MAX_SCORE);

        let bands = edges
            .windows(2)
            .zip(RiskLevel::ALL)
            .map(|(pair, level)| RiskBand {
                level,
                min: pair[0],
                max: pair[1],
            })
            .collect();

        let thresholds = Self { bands };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// The table must start at 0, end at 100, leave no gaps or overlaps,
    /// and raise the risk level strictly from band to band.
    pub fn validate(&self) -> Result<(), ScoringError> {
        let invalid = |msg: String| Err(ScoringError::InvalidThresholdConfiguration(msg));

        let (Some(first), Some(last)) = (self.bands.first(), self.bands.last()) else {
            return invalid("no risk bands configured".to_string());
        };
        if first.min != 0 {
            return invalid(format!("first band starts at {}, expected 0", first.min));
        }
        if last.max != MAX_SCORE {
            return invalid(format!("last band ends at {}, expected {MAX_SCORE}", last.max));
        }

        for band in &self.bands {
            if band.min >= band.max {
                return invalid(format!(
                    "band {} is empty or inverted: [{}, {})",
                    band.level, band.min, band.max
                ));
            }
        }

        for pair in self.bands.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if upper.min != lower.max {
                let kind = if upper.min > lower.max { "gap" } else { "overlap" };
                return invalid(format!(
                    "{kind} between {} (ends {}) and {} (starts {})",
                    lower.level, lower.max, upper.level, upper.min
                ));
            }
            if upper.level <= lower.level {
                return invalid(format!(
                    "risk levels must increase: {} follows {}",
                    upper.level, lower.level
                ));
            }
        }

        Ok(())
    }

    /// Band containing `score`, assuming a validated table.
    pub fn band_for(&self, score: u8) -> Option<&RiskBand> {
        let last = self.bands.len().checked_sub(1)?;
        self.bands.iter().enumerate().find_map(|(i, band)| {
            let upper_ok = score < band.max || (i == last && score == band.max);
            (score >= band.min && upper_ok).then_some(band)
        })
    }
}

fn check_weight_values(weights: &CategoryWeights) -> Result<(), ScoringError> {
    for (category, weight) in weights {
        if !weight.is_finite() || *weight < 0.0 {
            return Err(ScoringError::InvalidWeightConfiguration(format!(
                "weight for '{category}' must be a non-negative number, got {weight}"
            )));
        }
    }

    let total: f64 = weights.values().sum();
    if (total - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ScoringError::InvalidWeightConfiguration(format!(
            "weights sum to {total}, expected 1.0"
        )));
    }
    Ok(())
}

/// Full weight check against the categories actually being scored:
/// values must be valid, every weighted category must be scored and
/// every scored category must carry a weight.
pub fn validate_weights<'a>(
    weights: &CategoryWeights,
    categories: impl IntoIterator<Item = &'a str>,
) -> Result<(), ScoringError> {
    check_weight_values(weights)?;

    let categories: Vec<&str> = categories.into_iter().collect();
    if let Some(unknown) = weights
        .keys()
        .find(|key| !categories.contains(&key.as_str()))
    {
        return Err(ScoringError::InvalidWeightConfiguration(format!(
            "weight references unknown category '{unknown}'"
        )));
    }
    if let Some(unweighted) = categories.iter().find(|c| !weights.contains_key(**c)) {
        return Err(ScoringError::InvalidWeightConfiguration(format!(
            "category '{unweighted}' has no weight"
        )));
    }
    Ok(())
}
