use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::score::ItemScore;
use crate::models::summary::EvaluationSummary;

/// One administration of a protocol for one client.
///
/// Owns its score map and derived summary exclusively; the protocol catalog
/// is shared and read-only. `previous_evaluation_id` is a back-reference for
/// re-evaluation comparison — an id only, never an embedded record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub id: Uuid,
    pub client_id: Uuid,
    pub protocol_id: String,
    pub status: EvaluationStatus,
    pub evaluator: String,
    pub previous_evaluation_id: Option<Uuid>,
    pub scores: BTreeMap<String, ItemScore>,
    pub summary: EvaluationSummary,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
    pub completed_at: Option<jiff::Timestamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EvaluationStatus {
    InProgress,
    Completed,
}

impl Evaluation {
    pub fn is_completed(&self) -> bool {
        self.status == EvaluationStatus::Completed
    }
}
