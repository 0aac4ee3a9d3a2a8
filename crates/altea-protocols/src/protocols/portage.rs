use crate::catalog::{ProtocolCategory, ProtocolItem, ScaleFamily, ScoringScale};
use crate::Protocol;

/// Portage Guide to Early Education. Achievement-scale checklist across six
/// developmental areas; each item is banded at a developmental age in months,
/// and category summaries derive a developmental age from the highest
/// achieved band.
#[derive(Debug)]
pub struct Portage;

fn achievement_criteria() -> Vec<String> {
    [
        "Not achieved — skill absent or requires full assistance",
        "Achieved — performs the skill independently",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Protocol for Portage {
    fn id(&self) -> &str {
        "portage"
    }

    fn name(&self) -> &str {
        "Portage Guide"
    }

    fn family(&self) -> ScaleFamily {
        ScaleFamily::Achievement
    }

    fn categories(&self) -> &[ProtocolCategory] {
        static CATEGORIES: std::sync::LazyLock<Vec<ProtocolCategory>> =
            std::sync::LazyLock::new(|| {
                // (item text, age band in months, suggested activity)
                type AreaItems = &'static [(&'static str, u16, Option<&'static str>)];
                let area_defs: &[(&str, &str, AreaItems)] = &[
                    ("infant", "Infant Stimulation", &[
                        ("Follows a moving object with the eyes", 2, None),
                        ("Turns head toward a sound source", 3, Some(
                            "Shake a rattle gently to either side while the child is supine",
                        )),
                        ("Reaches for a dangling object", 4, None),
                        ("Transfers an object from hand to hand", 6, None),
                    ]),
                    ("social", "Socialization", &[
                        ("Smiles in response to adult attention", 3, None),
                        ("Plays peek-a-boo", 8, Some(
                            "Hide your face behind a cloth and let the child pull it away",
                        )),
                        ("Waves bye-bye", 10, None),
                        ("Plays alongside other children", 24, None),
                        ("Takes turns in simple games", 36, None),
                    ]),
                    ("language", "Language", &[
                        ("Coos and gurgles", 3, None),
                        ("Babbles repeated consonant sounds", 6, None),
                        ("Says a first meaningful word", 12, None),
                        ("Combines two words", 24, None),
                        ("Uses three-word sentences", 36, None),
                    ]),
                    ("selfhelp", "Self-Help", &[
                        ("Holds own bottle during feeding", 6, None),
                        ("Finger feeds small pieces of food", 9, None),
                        ("Drinks from a cup held by an adult", 12, None),
                        ("Removes own socks", 18, None),
                        ("Uses a spoon with little spilling", 24, Some(
                            "Offer thick foods that cling to the spoon before thin ones",
                        )),
                        ("Washes own hands", 36, None),
                    ]),
                    ("cognitive", "Cognitive", &[
                        ("Looks for a dropped object", 6, None),
                        ("Finds an object hidden under a cloth", 9, None),
                        ("Completes a simple formboard", 18, None),
                        ("Matches objects by color", 30, None),
                        ("Counts three objects aloud", 36, None),
                    ]),
                    ("motor", "Motor", &[
                        ("Sits without support", 6, None),
                        ("Crawls on hands and knees", 9, None),
                        ("Walks alone", 13, None),
                        ("Kicks a ball forward", 24, None),
                        ("Pedals a tricycle", 36, None),
                    ]),
                ];

                area_defs
                    .iter()
                    .map(|(id, title, items)| ProtocolCategory {
                        id: id.to_string(),
                        title: title.to_string(),
                        items: items
                            .iter()
                            .enumerate()
                            .map(|(idx, (text, age_months, activity))| ProtocolItem {
                                id: format!("{id}-{}", idx + 1),
                                text: text.to_string(),
                                task_objective: activity.map(|s| s.to_string()),
                                scale: ScoringScale::Achievement {
                                    age_months: *age_months,
                                },
                                criteria: achievement_criteria(),
                                sequence: None,
                            })
                            .collect(),
                    })
                    .collect()
            });
        &CATEGORIES
    }
}
