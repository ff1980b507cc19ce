//! Answers in, classified result out.
//!
//! Every operation here is a pure function of its inputs and may be called
//! concurrently. [`score`] is the entry point collaborators should use; the
//! individual steps are public so they can be exercised on their own.

use std::collections::{BTreeMap, BTreeSet};

use digiwise_core::models::answer::Answer;
use digiwise_core::models::question::Question;
use digiwise_core::models::result::{AssessmentResult, CategoryScores, RiskLevel};

use crate::Catalog;
use crate::config::{CategoryWeights, MAX_SCORE, RiskThresholds, ScoringConfig, validate_weights};
use crate::error::ScoringError;

/// Check that question ids and category ids are each unique within the
/// catalog. Lookups resolve an id to its first definition, so a repeated
/// id would leave the later definition unanswerable.
pub fn validate_catalog<C: Catalog + ?Sized>(catalog: &C) -> Result<(), ScoringError> {
    let mut categories = BTreeSet::new();
    for category in catalog.categories() {
        if !categories.insert(category.id.as_str()) {
            return Err(ScoringError::DuplicateCategory(category.id.clone()));
        }
    }

    let mut questions = BTreeSet::new();
    for question in catalog.questions() {
        if !questions.insert(question.id) {
            return Err(ScoringError::DuplicateQuestion(question.id));
        }
    }
    Ok(())
}

/// Percentage score per category declared by the catalog.
///
/// Each category is `sum(answers) / sum(max_value)` over its active
/// questions, rounded half-up. Fails unless the catalog is well formed and
/// every active question is answered exactly once with an in-range value.
pub fn compute_category_scores<C: Catalog + ?Sized>(
    answers: &[Answer],
    catalog: &C,
) -> Result<CategoryScores, ScoringError> {
    validate_catalog(catalog)?;

    // category → (answered sum, maximum possible sum)
    let mut totals: BTreeMap<&str, (u64, u64)> = catalog
        .categories()
        .iter()
        .map(|c| (c.id.as_str(), (0, 0)))
        .collect();

    for question in catalog.active_questions() {
        if let Some(entry) = totals.get_mut(question.category.as_str()) {
            entry.1 += u64::from(question.max_value);
        }
    }

    let mut answered = BTreeSet::new();
    for answer in answers {
        let question = resolve_answer(catalog, answer)?;
        if !answered.insert(answer.question_id) {
            return Err(ScoringError::DuplicateAnswer(answer.question_id));
        }
        // resolve_answer guarantees the category is declared
        if let Some(entry) = totals.get_mut(question.category.as_str()) {
            entry.0 += u64::from(answer.value);
        }
    }

    let missing: Vec<u32> = catalog
        .active_questions()
        .iter()
        .map(|q| q.id)
        .filter(|id| !answered.contains(id))
        .collect();
    if !missing.is_empty() {
        return Err(ScoringError::IncompleteAnswerSet { missing });
    }

    let mut scores = CategoryScores::new();
    for (category, (sum, max)) in totals {
        if max == 0 {
            return Err(ScoringError::EmptyCategory(category.to_string()));
        }
        let percent = round_half_up_ratio(sum * u64::from(MAX_SCORE), max);
        tracing::debug!(category, sum, max, percent, "category scored");
        scores.insert(category.to_string(), percent);
    }
    Ok(scores)
}

/// Aggregate category percentages into one overall percentage.
///
/// Without a weight table this is the plain mean, rounded half-up. With
/// one, the weights must cover exactly the scored categories and sum to 1.0.
pub fn compute_overall_score(
    category_scores: &CategoryScores,
    weights: Option<&CategoryWeights>,
) -> Result<u8, ScoringError> {
    if category_scores.is_empty() {
        return Err(ScoringError::NoCategories);
    }

    let Some(weights) = weights else {
        let sum: u64 = category_scores.values().map(|s| u64::from(*s)).sum();
        let count = category_scores.len() as u64;
        return Ok(round_half_up_ratio(sum, count));
    };

    validate_weights(weights, category_scores.keys().map(String::as_str))?;

    let weighted: f64 = category_scores
        .iter()
        .map(|(category, score)| {
            weights.get(category).copied().unwrap_or(0.0) * f64::from(*score)
        })
        .sum();
    // Snap away float noise (0.1 + 0.2 style) before rounding half-up.
    let snapped = (weighted * 1e6).round() / 1e6;
    let overall = (snapped + 0.5).floor().clamp(0.0, f64::from(MAX_SCORE));
    Ok(overall as u8)
}

/// Map an overall score to its risk level. Boundary scores fall into the
/// upper band.
pub fn classify_risk(
    overall_score: u8,
    thresholds: &RiskThresholds,
) -> Result<RiskLevel, ScoringError> {
    if overall_score > MAX_SCORE {
        return Err(ScoringError::ScoreOutOfRange(overall_score));
    }
    thresholds.validate()?;
    thresholds
        .band_for(overall_score)
        .map(|band| band.level)
        .ok_or_else(|| {
            ScoringError::InvalidThresholdConfiguration(format!(
                "no band covers score {overall_score}"
            ))
        })
}

/// Score a complete answer set.
pub fn score<C: Catalog + ?Sized>(
    answers: &[Answer],
    catalog: &C,
    config: &ScoringConfig,
) -> Result<AssessmentResult, ScoringError> {
    if let Err(e) = config.validate() {
        tracing::warn!(catalog = catalog.id(), error = %e, "rejected scoring configuration");
        return Err(e);
    }

    let category_scores = compute_category_scores(answers, catalog)?;
    let overall_score = compute_overall_score(&category_scores, config.weights.as_ref())?;
    let risk_level = classify_risk(overall_score, &config.thresholds)?;

    tracing::info!(
        catalog = catalog.id(),
        answers = answers.len(),
        overall_score,
        %risk_level,
        "assessment scored"
    );

    Ok(AssessmentResult {
        overall_score,
        category_scores,
        risk_level,
    })
}

/// Find the active question an answer refers to and check the answer
/// against it.
pub(crate) fn resolve_answer<'c, C: Catalog + ?Sized>(
    catalog: &'c C,
    answer: &Answer,
) -> Result<&'c Question, ScoringError> {
    let question = catalog
        .question(answer.question_id)
        .filter(|q| q.active)
        .ok_or(ScoringError::UnknownQuestion(answer.question_id))?;

    if !question.accepts(answer.value) {
        return Err(ScoringError::AnswerOutOfRange {
            question_id: question.id,
            value: answer.value,
            max_value: question.max_value,
        });
    }
    if catalog.category(&question.category).is_none() {
        return Err(ScoringError::UnknownCategory {
            question_id: question.id,
            category: question.category.clone(),
        });
    }
    Ok(question)
}

/// `round(numerator / denominator)` with halves rounded up, for
/// non-negative ratios no larger than 100.
fn round_half_up_ratio(numerator: u64, denominator: u64) -> u8 {
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    rounded.min(u64::from(MAX_SCORE)) as u8
}
