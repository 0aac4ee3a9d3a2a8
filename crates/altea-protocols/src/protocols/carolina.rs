use crate::catalog::{ProtocolCategory, ProtocolItem, ScaleFamily, ScoringScale};
use crate::Protocol;

/// Carolina Curriculum for Infants and Toddlers with Special Needs.
/// Five domains, each organized into teaching sequences; items rated
/// Absent / Developing / Mastered.
#[derive(Debug)]
pub struct Carolina;

fn mastery_criteria() -> Vec<String> {
    [
        "Absent — skill not observed",
        "Developing — emerging or partial performance",
        "Mastered — performed consistently and independently",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Protocol for Carolina {
    fn id(&self) -> &str {
        "carolina"
    }

    fn name(&self) -> &str {
        "Carolina Curriculum"
    }

    fn family(&self) -> ScaleFamily {
        ScaleFamily::Mastery
    }

    fn categories(&self) -> &[ProtocolCategory] {
        static CATEGORIES: std::sync::LazyLock<Vec<ProtocolCategory>> =
            std::sync::LazyLock::new(|| {
                // (sequence title, items within the sequence)
                type Sequences = &'static [(&'static str, &'static [&'static str])];
                let domain_defs: &[(&str, &str, Sequences)] = &[
                    ("personal", "Personal-Social", &[
                        ("Self-Regulation & Responsibility", &[
                            "Calms when comforted by a familiar adult",
                            "Occupies self with toys for short periods",
                            "Follows simple household rules with reminders",
                        ]),
                        ("Interpersonal Skills", &[
                            "Responds differently to familiar and unfamiliar people",
                            "Initiates social games with caregivers",
                            "Shows concern when another child is distressed",
                        ]),
                        ("Self-Concept", &[
                            "Recognizes self in a mirror",
                            "Refers to self by name",
                        ]),
                    ]),
                    ("cog", "Cognition", &[
                        ("Attention & Memory", &[
                            "Attends to a novel object for thirty seconds",
                            "Anticipates the next step of a familiar routine",
                            "Recalls the location of hidden objects",
                        ]),
                        ("Concepts & Vocabulary", &[
                            "Sorts objects into two categories",
                            "Identifies big and little on request",
                        ]),
                        ("Visual Perception", &[
                            "Completes a three-piece puzzle",
                            "Matches simple shapes to openings",
                        ]),
                    ]),
                    ("comm", "Communication", &[
                        ("Receptive Skills", &[
                            "Responds to own name",
                            "Identifies familiar objects when named",
                            "Follows two-step related directions",
                        ]),
                        ("Expressive Skills", &[
                            "Uses gestures to communicate wants",
                            "Names familiar objects spontaneously",
                            "Combines words into two-word phrases",
                        ]),
                    ]),
                    ("fine", "Fine Motor", &[
                        ("Reach & Grasp", &[
                            "Reaches for and grasps a small toy",
                            "Uses a pincer grasp for small items",
                        ]),
                        ("Bilateral Skills", &[
                            "Holds an object in each hand simultaneously",
                            "Stabilizes paper with one hand while marking with the other",
                        ]),
                        ("Tool Use", &[
                            "Scoops with a spoon or shovel",
                            "Snips with scissors",
                        ]),
                    ]),
                    ("gross", "Gross Motor", &[
                        ("Prone & Supine", &[
                            "Lifts head and chest while prone",
                            "Rolls from back to stomach",
                        ]),
                        ("Upright Posture & Locomotion", &[
                            "Pulls to stand at furniture",
                            "Walks without support",
                            "Walks up stairs holding a rail",
                        ]),
                        ("Ball Skills", &[
                            "Throws a ball forward",
                            "Kicks a stationary ball",
                        ]),
                    ]),
                ];

                domain_defs
                    .iter()
                    .map(|(id, title, sequences)| {
                        let mut items = Vec::new();
                        for (seq_idx, (seq_title, texts)) in sequences.iter().enumerate() {
                            for (item_idx, text) in texts.iter().enumerate() {
                                items.push(ProtocolItem {
                                    id: format!("{id}-{}-{}", seq_idx + 1, item_idx + 1),
                                    text: text.to_string(),
                                    task_objective: None,
                                    scale: ScoringScale::Mastery,
                                    criteria: mastery_criteria(),
                                    sequence: Some(seq_title.to_string()),
                                });
                            }
                        }
                        ProtocolCategory {
                            id: id.to_string(),
                            title: title.to_string(),
                            items,
                        }
                    })
                    .collect()
            });
        &CATEGORIES
    }
}
