use crate::catalog::{ProtocolCategory, ProtocolItem, ScaleFamily, ScoringScale};
use crate::Protocol;

/// VB-MAPP: Verbal Behavior Milestones Assessment and Placement Program.
/// 16 skill areas across 3 developmental levels, milestones scored 0/0.5/1.
#[derive(Debug)]
pub struct VbMapp;

fn milestone_criteria() -> Vec<String> {
    [
        "0 — milestone not demonstrated",
        "0.5 — emerging or demonstrated with prompts",
        "1 — demonstrated to criterion",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Protocol for VbMapp {
    fn id(&self) -> &str {
        "vb_mapp"
    }

    fn name(&self) -> &str {
        "VB-MAPP"
    }

    fn family(&self) -> ScaleFamily {
        ScaleFamily::Points
    }

    fn categories(&self) -> &[ProtocolCategory] {
        static CATEGORIES: std::sync::LazyLock<Vec<ProtocolCategory>> =
            std::sync::LazyLock::new(|| {
                let scale = ScoringScale::Points {
                    max: 1.0,
                    step: 0.5,
                };

                // One milestone per developmental level (1 / 2 / 3).
                let skill_areas: &[(&str, &str, [&str; 3])] = &[
                    ("mand", "Mand", [
                        "Emits two different mands with prompts present",
                        "Mands for ten different missing items without prompts",
                        "Mands with ten different verbs or adjectives",
                    ]),
                    ("tact", "Tact", [
                        "Tacts two familiar items",
                        "Tacts twenty-five items when asked",
                        "Tacts four different actions in pictures",
                    ]),
                    ("echoic", "Echoic", [
                        "Repeats two specific sounds on request",
                        "Repeats ten two-syllable combinations",
                        "Repeats short phrases with clear articulation",
                    ]),
                    ("intraverbal", "Intraverbal", [
                        "Completes two familiar fill-in phrases",
                        "Answers ten different what questions",
                        "Answers four different wh-questions about a topic",
                    ]),
                    ("listener_responding", "Listener Responding", [
                        "Attends to a speaker's voice by orienting",
                        "Selects the correct item from an array of four",
                        "Follows three-step related instructions",
                    ]),
                    ("motor_imitation", "Motor Imitation", [
                        "Imitates two gross motor movements",
                        "Imitates ten actions on command",
                        "Imitates a novel two-step action sequence",
                    ]),
                    ("visual_perceptual", "Visual Perceptual Skills and Match-to-Sample", [
                        "Visually tracks a moving stimulus",
                        "Matches identical objects in an array of six",
                        "Sorts non-identical items into categories",
                    ]),
                    ("independent_play", "Independent Play", [
                        "Manipulates a toy for thirty seconds",
                        "Engages with cause-and-effect toys independently",
                        "Completes multi-part play activities alone",
                    ]),
                    ("social_behavior", "Social Behavior and Social Play", [
                        "Makes eye contact with a familiar adult",
                        "Engages in parallel play near peers",
                        "Engages in cooperative play with a peer",
                    ]),
                    ("spontaneous_vocal", "Spontaneous Vocal Behavior", [
                        "Vocalizes five times in an observation period",
                        "Emits varied babbling with intonation",
                        "Spontaneously emits recognizable words during play",
                    ]),
                    ("listener_by_function", "Listener Responding by Function, Feature, and Class", [
                        "Selects an item by its function from an array",
                        "Selects items by feature across ten examples",
                        "Selects items by class across twenty-five examples",
                    ]),
                    ("reading", "Reading", [
                        "Attends to a book during shared reading",
                        "Matches five words to pictures",
                        "Reads five words aloud",
                    ]),
                    ("writing", "Writing", [
                        "Makes marks on paper with a writing tool",
                        "Traces letters within guidelines",
                        "Copies own name legibly",
                    ]),
                    ("math", "Math", [
                        "Attends to counting during play",
                        "Counts out five objects on request",
                        "Matches numerals to quantities up to ten",
                    ]),
                    ("group_classroom", "Group and Classroom Skills", [
                        "Sits in a group for one minute without disruption",
                        "Responds to group instructions without individual prompts",
                        "Works independently on a classroom task",
                    ]),
                    ("linguistics", "Linguistic Structure", [
                        "Produces varied vowel-consonant combinations",
                        "Uses two-word utterances with noun-verb structure",
                        "Uses four-word sentences with grammatical markers",
                    ]),
                ];

                skill_areas
                    .iter()
                    .map(|(id, name, milestones)| ProtocolCategory {
                        id: id.to_string(),
                        title: name.to_string(),
                        items: milestones
                            .iter()
                            .enumerate()
                            .map(|(idx, text)| ProtocolItem {
                                id: format!("{id}-{}", idx + 1),
                                text: text.to_string(),
                                task_objective: None,
                                scale,
                                criteria: milestone_criteria(),
                                sequence: None,
                            })
                            .collect(),
                    })
                    .collect()
            });
        &CATEGORIES
    }
}
