use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Derived roll-up for one protocol category.
///
/// A deterministic projection of the item-score map — never a source of truth
/// on its own. `total_items` counts the category's items minus those marked
/// not-applicable; unscored items still count toward `max_possible_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategorySummary {
    pub category_id: String,
    pub title: String,
    pub total_items: u32,
    pub scored_items: u32,
    pub total_score: f64,
    pub max_possible_score: f64,
    /// Rounded half-up; 0 when `max_possible_score` is 0. For mastery-scale
    /// categories this is the mastery ratio, not score/max.
    pub percentage: u8,
    pub detail: SummaryDetail,
}

/// Per-family extras carried alongside the common summary shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum SummaryDetail {
    Points,
    Achievement {
        /// Highest age band (in months) among achieved items; 0 when none.
        developmental_age_months: u16,
    },
    Mastery {
        mastered: u32,
        developing: u32,
    },
}

/// All category summaries plus the overall aggregates for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EvaluationSummary {
    pub categories: BTreeMap<String, CategorySummary>,
    pub overall_score: f64,
    pub overall_max_score: f64,
    pub overall_percentage: u8,
}

impl EvaluationSummary {
    pub fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
            overall_score: 0.0,
            overall_max_score: 0.0,
            overall_percentage: 0,
        }
    }

    /// Mastered / emerging totals across all mastery-scale categories.
    pub fn mastery_totals(&self) -> (u32, u32) {
        self.categories.values().fold((0, 0), |(m, d), summary| {
            if let SummaryDetail::Mastery { mastered, developing } = summary.detail {
                (m + mastered, d + developing)
            } else {
                (m, d)
            }
        })
    }
}
