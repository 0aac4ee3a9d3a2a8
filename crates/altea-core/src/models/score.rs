use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One evaluator response for one protocol item.
///
/// `not_applicable` removes the item from both the numerator and the
/// denominator of every summary it would otherwise contribute to; it is not
/// a zero score. `value` may be `None` for an item that was touched (noted,
/// or marked N/A) but never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemScore {
    pub item_id: String,
    pub value: Option<ScoreValue>,
    pub not_applicable: bool,
    pub note: Option<String>,
    pub updated_at: jiff::Timestamp,
}

/// A recorded score, tagged by the protocol family's scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreValue {
    /// Point-scale score (ABLLS-R 0–4, VB-MAPP 0/0.5/1).
    Points(f64),
    /// Achievement-scale response (Portage-style achieved / not achieved).
    Achieved(bool),
    /// Tri-state mastery rating (Carolina-style).
    Mastery(MasteryLevel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MasteryLevel {
    Absent,
    Developing,
    Mastered,
}

impl ScoreValue {
    /// Numeric contribution toward a raw score sum.
    pub fn points(&self) -> f64 {
        match self {
            ScoreValue::Points(v) => *v,
            ScoreValue::Achieved(true) => 1.0,
            ScoreValue::Achieved(false) => 0.0,
            ScoreValue::Mastery(level) => level.points(),
        }
    }
}

impl MasteryLevel {
    /// Absent/Developing/Mastered map to 0/1/2 raw points so mastery scores
    /// sum into the same overall aggregates as point scales.
    pub fn points(&self) -> f64 {
        match self {
            MasteryLevel::Absent => 0.0,
            MasteryLevel::Developing => 1.0,
            MasteryLevel::Mastered => 2.0,
        }
    }
}
