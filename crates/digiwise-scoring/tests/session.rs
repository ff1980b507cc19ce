use digiwise_core::models::answer::Answer;
use digiwise_core::models::result::RiskLevel;
use digiwise_scoring::Catalog;
use digiwise_scoring::catalogs::digital_wellness::DigitalWellness;
use digiwise_scoring::config::ScoringConfig;
use digiwise_scoring::error::ScoringError;
use digiwise_scoring::session::AssessmentSession;
use pretty_assertions::assert_eq;

fn answer_all(session: &mut AssessmentSession<'_>, value: u8) {
    let ids: Vec<u32> = DigitalWellness.active_questions().iter().map(|q| q.id).collect();
    for id in ids {
        session.record(Answer::new(id, value)).unwrap();
    }
}

#[test]
fn new_session_has_nothing_answered() {
    let session = AssessmentSession::start(&DigitalWellness);
    assert_eq!(session.progress(), (0, 20));
    assert!(!session.is_complete());
    assert_eq!(session.missing_questions().len(), 20);
    assert_eq!(session.catalog().id(), "digital_wellness");
}

#[test]
fn sessions_get_distinct_ids() {
    let a = AssessmentSession::start(&DigitalWellness);
    let b = AssessmentSession::start(&DigitalWellness);
    assert_ne!(a.id(), b.id());
}

#[test]
fn recording_tracks_progress_and_replaces() {
    let mut session = AssessmentSession::start(&DigitalWellness);
    assert_eq!(session.record(Answer::new(1, 2)).unwrap(), None);
    assert_eq!(session.record(Answer::new(2, 3)).unwrap(), None);
    assert_eq!(session.progress(), (2, 20));

    assert_eq!(session.record(Answer::new(1, 4)).unwrap(), Some(2));
    assert_eq!(session.progress(), (2, 20));
    assert_eq!(session.answers(), vec![Answer::new(1, 4), Answer::new(2, 3)]);
}

#[test]
fn invalid_answers_are_not_recorded() {
    let mut session = AssessmentSession::start(&DigitalWellness);
    assert_eq!(
        session.record(Answer::new(500, 1)).unwrap_err(),
        ScoringError::UnknownQuestion(500)
    );
    assert!(matches!(
        session.record(Answer::new(1, 9)),
        Err(ScoringError::AnswerOutOfRange { question_id: 1, value: 9, max_value: 4 })
    ));
    assert!(session.answers().is_empty());
}

#[test]
fn incomplete_session_cannot_be_submitted() {
    let mut session = AssessmentSession::start(&DigitalWellness);
    answer_all(&mut session, 1);
    let mut partial = AssessmentSession::start(&DigitalWellness);
    for answer in session.answers().into_iter().filter(|a| a.question_id != 7) {
        partial.record(answer).unwrap();
    }

    assert_eq!(
        partial.submit(&ScoringConfig::default()).unwrap_err(),
        ScoringError::IncompleteAnswerSet { missing: vec![7] }
    );
}

#[test]
fn complete_session_submits_once() {
    let mut session = AssessmentSession::start(&DigitalWellness);
    answer_all(&mut session, 2);
    assert!(session.is_complete());

    let id = session.id();
    let started_at = session.started_at();
    let record = session.submit(&ScoringConfig::default()).unwrap();

    assert_eq!(record.session_id, id);
    assert_eq!(record.catalog_id, "digital_wellness");
    assert_eq!(record.started_at, started_at);
    assert!(record.completed_at >= record.started_at);
    assert_eq!(record.result.overall_score, 50);
    assert_eq!(record.result.risk_level, RiskLevel::High);
    assert!(record.result.category_scores.values().all(|s| *s == 50));
}
