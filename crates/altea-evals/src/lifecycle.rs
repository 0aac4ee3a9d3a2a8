//! Evaluation lifecycle: `in_progress` → `completed`, one way. Every score
//! write recomputes the full summary from the score map so the cached
//! summary is always the pure projection the summary engine would produce.

use std::collections::{BTreeMap, HashMap};

use jiff::Timestamp;
use tracing::{debug, info};
use uuid::Uuid;

use altea_core::models::comparison::ComparisonReport;
use altea_core::models::evaluation::{Evaluation, EvaluationStatus};
use altea_core::models::score::{ItemScore, ScoreValue};
use altea_protocols::Protocol;

use crate::comparison;
use crate::error::EvalError;
use crate::summary;

/// Allocate a new in-progress evaluation with no scores.
///
/// `previous_evaluation_id` is a back-reference for later comparison only;
/// no scores are copied forward — a re-evaluation always collects a fresh
/// response set.
pub fn create(
    client_id: Uuid,
    protocol: &dyn Protocol,
    evaluator: &str,
    previous_evaluation_id: Option<Uuid>,
) -> Evaluation {
    let now = Timestamp::now();
    let evaluation = Evaluation {
        id: Uuid::new_v4(),
        client_id,
        protocol_id: protocol.id().to_string(),
        status: EvaluationStatus::InProgress,
        evaluator: evaluator.to_string(),
        previous_evaluation_id,
        scores: BTreeMap::new(),
        summary: summary::summarize(protocol, &BTreeMap::new()),
        created_at: now,
        updated_at: now,
        completed_at: None,
    };
    info!(
        evaluation_id = %evaluation.id,
        protocol = protocol.id(),
        "evaluation created"
    );
    evaluation
}

/// Upsert one item's score and recompute the summary.
///
/// A rejected write leaves the evaluation untouched: validation happens
/// before any mutation. Passing `not_applicable` skips range validation and
/// removes the item from every denominator. The written record replaces the
/// previous one whole — note and timestamp included.
pub fn record_score(
    evaluation: &mut Evaluation,
    protocol: &dyn Protocol,
    item_id: &str,
    value: Option<ScoreValue>,
    not_applicable: bool,
    note: Option<String>,
) -> Result<(), EvalError> {
    if evaluation.is_completed() {
        return Err(EvalError::InvalidState(evaluation.id));
    }
    let item = protocol.item(item_id)?;
    if !not_applicable
        && let Some(v) = &value
        && !item.scale.accepts(v)
    {
        return Err(EvalError::OutOfRange {
            item_id: item_id.to_string(),
            value: *v,
        });
    }

    evaluation.scores.insert(
        item_id.to_string(),
        ItemScore {
            item_id: item_id.to_string(),
            value,
            not_applicable,
            note,
            updated_at: Timestamp::now(),
        },
    );
    evaluation.summary = summary::summarize(protocol, &evaluation.scores);
    evaluation.updated_at = Timestamp::now();
    debug!(evaluation_id = %evaluation.id, item_id, "score recorded");
    Ok(())
}

/// Freeze the evaluation. Terminal: there is no way back to in-progress.
pub fn complete(evaluation: &mut Evaluation) -> Result<(), EvalError> {
    if evaluation.is_completed() {
        return Err(EvalError::InvalidState(evaluation.id));
    }
    let now = Timestamp::now();
    evaluation.status = EvaluationStatus::Completed;
    evaluation.completed_at = Some(now);
    evaluation.updated_at = now;
    info!(evaluation_id = %evaluation.id, "evaluation completed");
    Ok(())
}

/// Host-side lookup seam for comparand selection. The engine owns no
/// persistence; hosts adapt their storage layer to this trait.
pub trait EvaluationLookup {
    fn evaluations_for(&self, client_id: Uuid, protocol_id: &str) -> Vec<&Evaluation>;
}

/// Start a re-evaluation: a fresh evaluation whose back-reference points at
/// the most recent completed evaluation for the same client and protocol,
/// when one exists.
pub fn re_evaluate(
    store: &impl EvaluationLookup,
    client_id: Uuid,
    protocol: &dyn Protocol,
    evaluator: &str,
) -> Evaluation {
    let mut evaluation = create(client_id, protocol, evaluator, None);
    evaluation.previous_evaluation_id = comparison::select_previous(
        store.evaluations_for(client_id, protocol.id()),
        &evaluation,
    )
    .map(|previous| previous.id);
    evaluation
}

/// Compare an evaluation against its predecessor, resolving the comparand
/// through the store: the explicit back-reference when it points at a
/// completed evaluation, otherwise the selection rule.
pub fn compare_to_previous(
    store: &impl EvaluationLookup,
    current: &Evaluation,
) -> Option<ComparisonReport> {
    let candidates = store.evaluations_for(current.client_id, &current.protocol_id);
    let previous = current
        .previous_evaluation_id
        .and_then(|id| {
            candidates
                .iter()
                .copied()
                .find(|e| e.id == id && e.is_completed())
        })
        .or_else(|| comparison::select_previous(candidates.iter().copied(), current));
    comparison::compare(current, previous)
}

/// In-memory evaluation registry. A convenience host for tests and embedders
/// that keep everything resident; not a persistence layer.
#[derive(Debug, Default)]
pub struct InMemoryEvaluations {
    evaluations: HashMap<Uuid, Evaluation>,
}

impl InMemoryEvaluations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, evaluation: Evaluation) {
        self.evaluations.insert(evaluation.id, evaluation);
    }

    pub fn get(&self, id: Uuid) -> Option<&Evaluation> {
        self.evaluations.get(&id)
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut Evaluation> {
        self.evaluations.get_mut(&id)
    }
}

impl EvaluationLookup for InMemoryEvaluations {
    fn evaluations_for(&self, client_id: Uuid, protocol_id: &str) -> Vec<&Evaluation> {
        self.evaluations
            .values()
            .filter(|e| e.client_id == client_id && e.protocol_id == protocol_id)
            .collect()
    }
}
