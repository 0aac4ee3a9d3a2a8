use altea_core::models::summary::{EvaluationSummary, SummaryDetail};
use altea_protocols::Protocol;

/// Format computed summaries as structured text for the report generator.
/// Categories follow catalog order, not map order.
pub fn summary_text(protocol: &dyn Protocol, summary: &EvaluationSummary) -> String {
    let mut output = format!("## {}\n\n", protocol.name());

    for category in protocol.categories() {
        let Some(s) = summary.categories.get(&category.id) else {
            continue;
        };
        output.push_str(&format!("### {}\n", s.title));
        output.push_str(&format!(
            "- {} of {} items scored, {}/{} points ({}%)\n",
            s.scored_items, s.total_items, s.total_score, s.max_possible_score, s.percentage
        ));
        match &s.detail {
            SummaryDetail::Points => {}
            SummaryDetail::Achievement {
                developmental_age_months,
            } => {
                if *developmental_age_months > 0 {
                    output.push_str(&format!(
                        "- developmental age: {developmental_age_months} months\n"
                    ));
                }
            }
            SummaryDetail::Mastery {
                mastered,
                developing,
            } => {
                output.push_str(&format!("- {mastered} mastered, {developing} developing\n"));
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Overall: {}/{} ({}%)\n",
        summary.overall_score, summary.overall_max_score, summary.overall_percentage
    ));
    output
}
