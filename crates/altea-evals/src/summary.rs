//! Pure summary folds: a score map against a protocol catalog, nothing else.
//! Two calls with the same inputs produce identical output, so summaries can
//! be recomputed from scratch at any time.

use std::collections::BTreeMap;

use altea_core::models::score::{ItemScore, MasteryLevel, ScoreValue};
use altea_core::models::summary::{CategorySummary, EvaluationSummary, SummaryDetail};
use altea_protocols::catalog::{ProtocolCategory, ScaleFamily, ScoringScale};
use altea_protocols::Protocol;

/// Summarize every category of a protocol and the overall aggregates.
///
/// Score records whose item id no longer exists in the catalog are ignored;
/// the fold walks catalog items, not score records.
pub fn summarize(
    protocol: &dyn Protocol,
    scores: &BTreeMap<String, ItemScore>,
) -> EvaluationSummary {
    let mut categories = BTreeMap::new();
    let mut overall_score = 0.0;
    let mut overall_max = 0.0;

    for category in protocol.categories() {
        let summary = summarize_category(protocol.family(), category, scores);
        overall_score += summary.total_score;
        overall_max += summary.max_possible_score;
        categories.insert(category.id.clone(), summary);
    }

    EvaluationSummary {
        categories,
        overall_score,
        overall_max_score: overall_max,
        overall_percentage: percentage(overall_score, overall_max),
    }
}

/// Fold one category's items against the score map.
///
/// Items marked not-applicable are removed from the item count and the
/// denominator entirely. Unscored items still count toward the denominator.
pub fn summarize_category(
    family: ScaleFamily,
    category: &ProtocolCategory,
    scores: &BTreeMap<String, ItemScore>,
) -> CategorySummary {
    let mut total_items = 0u32;
    let mut scored_items = 0u32;
    let mut total_score = 0.0;
    let mut max_possible = 0.0;
    let mut mastered = 0u32;
    let mut developing = 0u32;
    let mut age_months = 0u16;

    for item in &category.items {
        let score = scores.get(&item.id);
        if score.is_some_and(|s| s.not_applicable) {
            continue;
        }
        total_items += 1;
        max_possible += item.scale.max_points();

        let Some(value) = score.and_then(|s| s.value) else {
            continue;
        };
        scored_items += 1;
        total_score += value.points();

        match value {
            ScoreValue::Achieved(true) => {
                if let ScoringScale::Achievement { age_months: band } = item.scale {
                    age_months = age_months.max(band);
                }
            }
            ScoreValue::Mastery(MasteryLevel::Mastered) => mastered += 1,
            ScoreValue::Mastery(MasteryLevel::Developing) => developing += 1,
            _ => {}
        }
    }

    let (pct, detail) = match family {
        ScaleFamily::Points => (percentage(total_score, max_possible), SummaryDetail::Points),
        ScaleFamily::Achievement => (
            percentage(total_score, max_possible),
            SummaryDetail::Achievement {
                developmental_age_months: age_months,
            },
        ),
        // Mastery categories report the mastery ratio, not score/max.
        ScaleFamily::Mastery => (
            percentage(f64::from(mastered), f64::from(total_items)),
            SummaryDetail::Mastery {
                mastered,
                developing,
            },
        ),
    };

    CategorySummary {
        category_id: category.id.clone(),
        title: category.title.clone(),
        total_items,
        scored_items,
        total_score,
        max_possible_score: max_possible,
        percentage: pct,
        detail,
    }
}

/// Round-half-up percentage; 0 when the denominator is empty.
pub fn percentage(score: f64, max: f64) -> u8 {
    if max <= 0.0 {
        return 0;
    }
    (score / max * 100.0).round() as u8
}
