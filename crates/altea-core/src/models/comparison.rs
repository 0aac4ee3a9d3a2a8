use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Growth report between a current evaluation and its predecessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonReport {
    pub current_evaluation_id: Uuid,
    pub previous_evaluation_id: Uuid,
    pub overall_delta: i16,
    pub overall_trend: Trend,
    pub categories: Vec<CategoryDelta>,
    pub items: Vec<ItemDelta>,
}

/// Percentage-point movement for one category present in both evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryDelta {
    pub category_id: String,
    pub title: String,
    pub previous_percentage: u8,
    pub current_percentage: u8,
    pub delta: i16,
    pub trend: Trend,
}

/// Raw-score movement for one item scored in the current evaluation.
///
/// `previous`/`delta` are `None` for items with no scored predecessor; those
/// carry `newly_assessed` instead of an undefined delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemDelta {
    pub item_id: String,
    pub current: f64,
    pub previous: Option<f64>,
    pub delta: Option<f64>,
    pub newly_assessed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Improved,
    Regressed,
    Unchanged,
}

impl Trend {
    pub fn from_delta(delta: i16) -> Self {
        match delta {
            d if d > 0 => Trend::Improved,
            d if d < 0 => Trend::Regressed,
            _ => Trend::Unchanged,
        }
    }
}
