mod common;

use altea_core::models::evaluation::EvaluationStatus;
use altea_core::models::score::{ItemScore, ScoreValue};
use altea_evals::error::EvalError;
use altea_evals::lifecycle::{
    complete, create, re_evaluate, record_score, InMemoryEvaluations,
};
use altea_protocols::get_protocol;
use jiff::Timestamp;
use uuid::Uuid;

use common::FixtureProtocol;

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

#[test]
fn create_starts_in_progress_with_zero_summaries() {
    let client_id = Uuid::new_v4();
    let evaluation = create(client_id, &FixtureProtocol, "jordan", None);

    assert_eq!(evaluation.status, EvaluationStatus::InProgress);
    assert_eq!(evaluation.client_id, client_id);
    assert_eq!(evaluation.protocol_id, "fixture");
    assert!(evaluation.scores.is_empty());
    assert!(evaluation.completed_at.is_none());
    assert!(evaluation.previous_evaluation_id.is_none());

    assert_eq!(evaluation.summary.categories.len(), 3);
    assert_eq!(evaluation.summary.overall_score, 0.0);
    assert_eq!(evaluation.summary.overall_max_score, 40.0);
    assert_eq!(evaluation.summary.overall_percentage, 0);
}

#[test]
fn record_score_updates_the_owning_category_and_overall() {
    let mut evaluation = create(Uuid::new_v4(), &FixtureProtocol, "jordan", None);

    record_score(
        &mut evaluation,
        &FixtureProtocol,
        "lang-1",
        Some(ScoreValue::Points(4.0)),
        false,
        Some("independent across two sessions".to_string()),
    )
    .unwrap();

    let lang = &evaluation.summary.categories["lang"];
    assert_eq!(lang.scored_items, 1);
    assert_eq!(lang.total_score, 4.0);
    assert_eq!(lang.percentage, 20); // 4 of 20
    assert_eq!(evaluation.summary.overall_percentage, 10); // 4 of 40

    let record = &evaluation.scores["lang-1"];
    assert_eq!(record.value, Some(ScoreValue::Points(4.0)));
    assert_eq!(record.note.as_deref(), Some("independent across two sessions"));
}

#[test]
fn rerecording_the_same_score_leaves_the_summary_unchanged() {
    let mut evaluation = create(Uuid::new_v4(), &FixtureProtocol, "jordan", None);
    record_score(
        &mut evaluation,
        &FixtureProtocol,
        "comm-2",
        Some(ScoreValue::Points(3.0)),
        false,
        None,
    )
    .unwrap();

    let before = evaluation.summary.clone();
    record_score(
        &mut evaluation,
        &FixtureProtocol,
        "comm-2",
        Some(ScoreValue::Points(3.0)),
        false,
        None,
    )
    .unwrap();
    assert_eq!(evaluation.summary, before);
}

#[test]
fn out_of_range_score_is_rejected_without_touching_summaries() {
    let mut evaluation = create(Uuid::new_v4(), &FixtureProtocol, "jordan", None);
    record_score(
        &mut evaluation,
        &FixtureProtocol,
        "comm-1",
        Some(ScoreValue::Points(2.0)),
        false,
        None,
    )
    .unwrap();

    let before = evaluation.clone();
    let err = record_score(
        &mut evaluation,
        &FixtureProtocol,
        "comm-1",
        Some(ScoreValue::Points(5.0)),
        false,
        None,
    )
    .unwrap_err();

    assert!(matches!(err, EvalError::OutOfRange { .. }));
    assert_eq!(evaluation.summary, before.summary);
    assert_eq!(evaluation.scores, before.scores);
}

#[test]
fn negative_and_off_step_scores_are_rejected() {
    let mut evaluation = create(Uuid::new_v4(), &FixtureProtocol, "jordan", None);
    let err = record_score(
        &mut evaluation,
        &FixtureProtocol,
        "lang-2",
        Some(ScoreValue::Points(-1.0)),
        false,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, EvalError::OutOfRange { .. }));

    let vb_mapp = get_protocol("vb_mapp").unwrap();
    let mut milestones = create(Uuid::new_v4(), vb_mapp.as_ref(), "jordan", None);
    let err = record_score(
        &mut milestones,
        vb_mapp.as_ref(),
        "mand-1",
        Some(ScoreValue::Points(0.3)),
        false,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, EvalError::OutOfRange { .. }));

    record_score(
        &mut milestones,
        vb_mapp.as_ref(),
        "mand-1",
        Some(ScoreValue::Points(0.5)),
        false,
        None,
    )
    .unwrap();
    assert_eq!(milestones.summary.categories["mand"].total_score, 0.5);
}

#[test]
fn unknown_item_is_not_found() {
    let mut evaluation = create(Uuid::new_v4(), &FixtureProtocol, "jordan", None);
    let err = record_score(
        &mut evaluation,
        &FixtureProtocol,
        "zzz-1",
        Some(ScoreValue::Points(1.0)),
        false,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, EvalError::NotFound(_)));
}

#[test]
fn na_write_skips_range_validation_and_shrinks_the_denominator() {
    let mut evaluation = create(Uuid::new_v4(), &FixtureProtocol, "jordan", None);
    record_score(&mut evaluation, &FixtureProtocol, "motor-1", None, true, None).unwrap();

    assert_eq!(evaluation.summary.overall_max_score, 36.0);
    assert_eq!(evaluation.summary.categories["motor"].total_items, 1);
}

#[test]
fn clearing_a_score_keeps_the_item_in_the_denominator() {
    let mut evaluation = create(Uuid::new_v4(), &FixtureProtocol, "jordan", None);
    record_score(
        &mut evaluation,
        &FixtureProtocol,
        "motor-1",
        Some(ScoreValue::Points(4.0)),
        false,
        None,
    )
    .unwrap();
    record_score(&mut evaluation, &FixtureProtocol, "motor-1", None, false, None).unwrap();

    let motor = &evaluation.summary.categories["motor"];
    assert_eq!(motor.scored_items, 0);
    assert_eq!(motor.total_items, 2);
    assert_eq!(motor.max_possible_score, 8.0);
}

#[test]
fn rescoring_after_na_replaces_the_whole_record() {
    let mut evaluation = create(Uuid::new_v4(), &FixtureProtocol, "jordan", None);
    record_score(
        &mut evaluation,
        &FixtureProtocol,
        "lang-1",
        None,
        true,
        Some("not observed this session".to_string()),
    )
    .unwrap();
    record_score(
        &mut evaluation,
        &FixtureProtocol,
        "lang-1",
        Some(ScoreValue::Points(2.0)),
        false,
        None,
    )
    .unwrap();

    let record: &ItemScore = &evaluation.scores["lang-1"];
    assert!(!record.not_applicable);
    assert_eq!(record.value, Some(ScoreValue::Points(2.0)));
    // The earlier note is not preserved across the rewrite.
    assert!(record.note.is_none());
}

#[test]
fn completion_is_terminal() {
    let mut evaluation = create(Uuid::new_v4(), &FixtureProtocol, "jordan", None);
    record_score(
        &mut evaluation,
        &FixtureProtocol,
        "lang-1",
        Some(ScoreValue::Points(3.0)),
        false,
        None,
    )
    .unwrap();

    complete(&mut evaluation).unwrap();
    assert_eq!(evaluation.status, EvaluationStatus::Completed);
    assert!(evaluation.completed_at.is_some());

    let before = evaluation.summary.clone();
    let err = record_score(
        &mut evaluation,
        &FixtureProtocol,
        "lang-2",
        Some(ScoreValue::Points(3.0)),
        false,
        None,
    )
    .unwrap_err();
    assert!(matches!(err, EvalError::InvalidState(_)));
    assert_eq!(evaluation.summary, before);

    let err = complete(&mut evaluation).unwrap_err();
    assert!(matches!(err, EvalError::InvalidState(_)));
}

#[test]
fn re_evaluate_references_the_most_recently_completed_evaluation() {
    let client_id = Uuid::new_v4();
    let mut store = InMemoryEvaluations::new();

    let mut first = create(client_id, &FixtureProtocol, "jordan", None);
    first.created_at = ts("2025-01-10T09:00:00Z");
    complete(&mut first).unwrap();
    first.completed_at = Some(ts("2025-01-10T10:00:00Z"));
    let mut second = create(client_id, &FixtureProtocol, "jordan", None);
    second.created_at = ts("2025-03-02T09:00:00Z");
    complete(&mut second).unwrap();
    second.completed_at = Some(ts("2025-03-02T10:00:00Z"));
    let second_id = second.id;

    // Still open: never eligible as a comparand.
    let mut open = create(client_id, &FixtureProtocol, "jordan", None);
    open.created_at = ts("2025-05-01T09:00:00Z");

    store.insert(first);
    store.insert(second);
    store.insert(open);

    let next = re_evaluate(&store, client_id, &FixtureProtocol, "jordan");
    assert_eq!(next.previous_evaluation_id, Some(second_id));
    assert!(next.scores.is_empty());
    assert_eq!(next.summary.overall_score, 0.0);
}

#[test]
fn re_evaluate_with_no_history_has_no_back_reference() {
    let store = InMemoryEvaluations::new();
    let next = re_evaluate(&store, Uuid::new_v4(), &FixtureProtocol, "jordan");
    assert!(next.previous_evaluation_id.is_none());
}
