//! Aggregates for the administrator dashboard.

use std::collections::BTreeMap;

use digiwise_core::models::result::RiskLevel;
use digiwise_core::models::session::SessionResult;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DashboardStats {
    pub total_assessments: usize,
    pub completed_assessments: usize,
    /// Percentage of started assessments that were submitted.
    pub completion_rate: f64,
    /// `None` until at least one assessment is completed.
    pub average_overall_score: Option<f64>,
    /// Count per risk level; every level is present.
    pub risk_distribution: BTreeMap<RiskLevel, usize>,
    pub category_averages: BTreeMap<String, f64>,
}

impl DashboardStats {
    /// `started` counts every session begun, submitted or not. It is raised
    /// to the number of results if the caller undercounts.
    pub fn from_results(started: usize, results: &[SessionResult]) -> Self {
        let completed = results.len();
        let total = started.max(completed);

        let completion_rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };

        let average_overall_score = (completed > 0).then(|| {
            let sum: u64 = results
                .iter()
                .map(|r| u64::from(r.result.overall_score))
                .sum();
            sum as f64 / completed as f64
        });

        let mut risk_distribution: BTreeMap<RiskLevel, usize> =
            RiskLevel::ALL.into_iter().map(|level| (level, 0)).collect();
        for r in results {
            *risk_distribution.entry(r.result.risk_level).or_default() += 1;
        }

        let mut category_totals: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
        for r in results {
            for (category, score) in &r.result.category_scores {
                let entry = category_totals.entry(category.as_str()).or_default();
                entry.0 += u64::from(*score);
                entry.1 += 1;
            }
        }
        let category_averages = category_totals
            .into_iter()
            .map(|(category, (sum, count))| (category.to_string(), sum as f64 / count as f64))
            .collect();

        Self {
            total_assessments: total,
            completed_assessments: completed,
            completion_rate,
            average_overall_score,
            risk_distribution,
            category_averages,
        }
    }
}
