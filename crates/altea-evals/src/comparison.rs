//! Re-evaluation comparison: category percentage deltas and item score deltas
//! between an evaluation and its predecessor.

use altea_core::models::comparison::{CategoryDelta, ComparisonReport, ItemDelta, Trend};
use altea_core::models::evaluation::{Evaluation, EvaluationStatus};

/// Compare a current evaluation against its predecessor.
///
/// Returns `None` when there is no comparand — a normal outcome for a
/// client's first evaluation, not a fault. Categories are compared only when
/// present in both summaries; items scored in the current evaluation but not
/// in the previous one are tagged newly assessed instead of carrying an
/// undefined delta.
pub fn compare(current: &Evaluation, previous: Option<&Evaluation>) -> Option<ComparisonReport> {
    let previous = previous?;

    let mut categories = Vec::new();
    for (category_id, cur) in &current.summary.categories {
        let Some(prev) = previous.summary.categories.get(category_id) else {
            continue;
        };
        let delta = i16::from(cur.percentage) - i16::from(prev.percentage);
        categories.push(CategoryDelta {
            category_id: category_id.clone(),
            title: cur.title.clone(),
            previous_percentage: prev.percentage,
            current_percentage: cur.percentage,
            delta,
            trend: Trend::from_delta(delta),
        });
    }

    let mut items = Vec::new();
    for (item_id, score) in &current.scores {
        if score.not_applicable {
            continue;
        }
        let Some(value) = score.value else {
            continue;
        };
        let current_points = value.points();
        let previous_points = previous
            .scores
            .get(item_id)
            .filter(|s| !s.not_applicable)
            .and_then(|s| s.value)
            .map(|v| v.points());
        items.push(ItemDelta {
            item_id: item_id.clone(),
            current: current_points,
            previous: previous_points,
            delta: previous_points.map(|p| current_points - p),
            newly_assessed: previous_points.is_none(),
        });
    }

    let overall_delta = i16::from(current.summary.overall_percentage)
        - i16::from(previous.summary.overall_percentage);

    Some(ComparisonReport {
        current_evaluation_id: current.id,
        previous_evaluation_id: previous.id,
        overall_delta,
        overall_trend: Trend::from_delta(overall_delta),
        categories,
        items,
    })
}

/// Pick the comparand: among completed evaluations for the same client and
/// protocol created before `current`, the one completed most recently.
/// In-progress evaluations are never eligible.
pub fn select_previous<'a, I>(candidates: I, current: &Evaluation) -> Option<&'a Evaluation>
where
    I: IntoIterator<Item = &'a Evaluation>,
{
    candidates
        .into_iter()
        .filter(|e| {
            e.id != current.id
                && e.client_id == current.client_id
                && e.protocol_id == current.protocol_id
                && e.status == EvaluationStatus::Completed
                && e.created_at < current.created_at
        })
        .max_by_key(|e| e.completed_at)
}
