use altea_protocols::catalog::{ProtocolCategory, ProtocolItem, ScaleFamily, ScoringScale};
use altea_protocols::Protocol;

/// Small point-scale checklist with known arithmetic: three categories of
/// 5 / 3 / 2 items, each item scored 0–4.
#[derive(Debug)]
pub struct FixtureProtocol;

impl Protocol for FixtureProtocol {
    fn id(&self) -> &str {
        "fixture"
    }

    fn name(&self) -> &str {
        "Fixture Checklist"
    }

    fn family(&self) -> ScaleFamily {
        ScaleFamily::Points
    }

    fn categories(&self) -> &[ProtocolCategory] {
        static CATEGORIES: std::sync::LazyLock<Vec<ProtocolCategory>> =
            std::sync::LazyLock::new(|| {
                let scale = ScoringScale::Points {
                    max: 4.0,
                    step: 1.0,
                };
                [("lang", "Language", 5), ("comm", "Communication", 3), ("motor", "Motor", 2)]
                    .iter()
                    .map(|(id, title, count)| ProtocolCategory {
                        id: id.to_string(),
                        title: title.to_string(),
                        items: (1..=*count)
                            .map(|n| ProtocolItem {
                                id: format!("{id}-{n}"),
                                text: format!("{title} task {n}"),
                                task_objective: None,
                                scale,
                                criteria: Vec::new(),
                                sequence: None,
                            })
                            .collect(),
                    })
                    .collect()
            });
        &CATEGORIES
    }
}
