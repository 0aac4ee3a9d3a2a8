use serde::{Deserialize, Serialize};
use ts_rs::TS;

use altea_core::models::score::ScoreValue;

/// The scoring family a protocol belongs to. Selects which summary variant
/// the engine applies to every category of that protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleFamily {
    Points,
    Achievement,
    Mastery,
}

/// How a single item is scored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringScale {
    /// Numeric point scale from 0 to `max` in increments of `step`
    /// (ABLLS-R: 0–4 step 1; VB-MAPP milestones: 0–1 step 0.5).
    Points { max: f64, step: f64 },
    /// Achieved / not achieved, banded at a developmental age in months.
    Achievement { age_months: u16 },
    /// Absent / Developing / Mastered.
    Mastery,
}

impl ScoringScale {
    /// The item's contribution to a summary denominator.
    pub fn max_points(&self) -> f64 {
        match self {
            ScoringScale::Points { max, .. } => *max,
            ScoringScale::Achievement { .. } => 1.0,
            ScoringScale::Mastery => 2.0,
        }
    }

    /// Whether a recorded value is valid for this scale: the right score
    /// family, within range, and on a step boundary.
    pub fn accepts(&self, value: &ScoreValue) -> bool {
        match (self, value) {
            (ScoringScale::Points { max, step }, ScoreValue::Points(v)) => {
                if *v < 0.0 || *v > *max {
                    return false;
                }
                let remainder = v % step;
                // Allow floating point tolerance
                remainder < 1e-9 || (step - remainder) < 1e-9
            }
            (ScoringScale::Achievement { .. }, ScoreValue::Achieved(_)) => true,
            (ScoringScale::Mastery, ScoreValue::Mastery(_)) => true,
            _ => false,
        }
    }
}

/// One skill/task within a protocol category. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProtocolItem {
    /// Unique within the protocol; the leading segment encodes the owning
    /// category (`"A1"` → category `"A"`, `"mand-2"` → category `"mand"`).
    pub id: String,
    pub text: String,
    /// Stimulus / expected-response description, where the instrument has one.
    pub task_objective: Option<String>,
    pub scale: ScoringScale,
    /// Ordered scoring-criteria descriptions (lowest score first).
    pub criteria: Vec<String>,
    /// Intermediate grouping label between category and item (Carolina
    /// sequences); `None` for protocols without one.
    pub sequence: Option<String>,
}

/// An ordered scoring-aggregation unit ("domain" or "area" depending on the
/// instrument's own vocabulary).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProtocolCategory {
    pub id: String,
    pub title: String,
    pub items: Vec<ProtocolItem>,
}

/// The category id encoded in an item id: everything before the first `-`,
/// or the first character for letter-prefixed ids like ABLLS-R's `"B4"`.
pub fn item_category_id(item_id: &str) -> &str {
    match item_id.find('-') {
        Some(pos) => &item_id[..pos],
        None => item_id.get(..1).unwrap_or(""),
    }
}
