use crate::catalog::{ProtocolCategory, ProtocolItem, ScaleFamily, ScoringScale};
use crate::Protocol;

/// ABLLS-R: Assessment of Basic Language and Learning Skills – Revised.
/// 25 lettered skill areas (A–Y), each task scored 0–4.
#[derive(Debug)]
pub struct AbllsR;

fn point_criteria() -> Vec<String> {
    [
        "0 — skill not demonstrated",
        "1 — demonstrated with full physical prompting",
        "2 — demonstrated with partial prompting",
        "3 — demonstrated with verbal or gestural prompting",
        "4 — demonstrated independently across settings",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Protocol for AbllsR {
    fn id(&self) -> &str {
        "ablls_r"
    }

    fn name(&self) -> &str {
        "ABLLS-R"
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

                let category_defs: &[(&str, &str, &[&str])] = &[
                    // Basic Learner Skills
                    ("A", "Cooperation and Reinforcer Effectiveness", &[
                        "Takes a reinforcer when offered",
                        "Reaches toward a desired item",
                        "Looks at the instructor when name is called",
                        "Waits briefly for a reinforcer without problem behavior",
                        "Works for a token or delayed reinforcer",
                    ]),
                    ("B", "Visual Performance", &[
                        "Matches identical objects",
                        "Matches identical pictures",
                        "Completes a simple inset puzzle",
                        "Sorts objects by color",
                        "Sequences pictures in order",
                    ]),
                    ("C", "Receptive Language", &[
                        "Follows an instruction to look at an item",
                        "Touches a named common object",
                        "Follows a one-step instruction in context",
                        "Points to named body parts",
                        "Follows a two-step instruction",
                    ]),
                    ("D", "Motor Imitation", &[
                        "Imitates a gross motor movement",
                        "Imitates an action with an object",
                        "Imitates a fine motor movement",
                        "Imitates a sequence of two actions",
                    ]),
                    ("E", "Vocal Imitation", &[
                        "Repeats a single speech sound",
                        "Repeats syllable combinations",
                        "Repeats short words",
                        "Repeats two-word phrases",
                    ]),
                    ("F", "Requests", &[
                        "Requests a desired item with one word",
                        "Requests help from an adult",
                        "Requests using a short phrase",
                        "Requests a missing item needed for a task",
                    ]),
                    ("G", "Labeling", &[
                        "Labels common objects",
                        "Labels pictures of familiar items",
                        "Labels ongoing actions",
                        "Labels familiar people",
                    ]),
                    ("H", "Intraverbals", &[
                        "Completes a line of a familiar song",
                        "Answers simple social questions",
                        "Fills in the missing word of a familiar phrase",
                        "Answers questions about object functions",
                    ]),
                    ("I", "Spontaneous Vocalizations", &[
                        "Vocalizes spontaneously during play",
                        "Directs vocalizations toward an adult",
                        "Spontaneously names items of interest",
                    ]),
                    ("J", "Syntax and Grammar", &[
                        "Uses two-word combinations",
                        "Uses plural forms",
                        "Uses present progressive verb forms",
                        "Uses simple sentences with a subject and verb",
                    ]),
                    ("K", "Play and Leisure", &[
                        "Engages with a toy independently",
                        "Completes a cause-and-effect toy routine",
                        "Plays functionally with pretend props",
                        "Sustains independent play for five minutes",
                    ]),
                    ("L", "Social Interaction", &[
                        "Tolerates the proximity of peers",
                        "Returns a greeting",
                        "Takes turns with adult support",
                        "Initiates an interaction with a peer",
                    ]),
                    ("M", "Group Instruction", &[
                        "Sits in a small group activity",
                        "Attends to the teacher during group instruction",
                        "Responds to group-directed instructions",
                    ]),
                    ("N", "Classroom Routines", &[
                        "Transitions between activities when prompted",
                        "Follows a step of the daily routine independently",
                        "Retrieves and puts away own materials",
                    ]),
                    // Academic Skills
                    ("O", "Generalized Responding", &[
                        "Responds to known tasks with novel materials",
                        "Responds to known tasks for a novel instructor",
                        "Responds to known tasks in a novel setting",
                    ]),
                    ("P", "Reading", &[
                        "Matches identical letters",
                        "Names letters of the alphabet",
                        "Reads own name",
                        "Reads common sight words",
                    ]),
                    ("Q", "Math", &[
                        "Rote counts to ten",
                        "Counts objects with one-to-one correspondence",
                        "Matches numerals to quantities",
                        "Names written numerals",
                    ]),
                    ("R", "Writing", &[
                        "Makes marks with a crayon",
                        "Traces a line",
                        "Copies simple shapes",
                        "Writes own name",
                    ]),
                    ("S", "Spelling", &[
                        "Spells own name aloud",
                        "Spells short familiar words aloud",
                        "Writes dictated familiar words",
                    ]),
                    // Self-Help Skills
                    ("T", "Dressing", &[
                        "Removes socks",
                        "Pulls on loose pants",
                        "Fastens large buttons",
                        "Puts on a coat independently",
                    ]),
                    ("U", "Eating", &[
                        "Drinks from an open cup",
                        "Uses a spoon without spilling",
                        "Uses a fork to spear food",
                    ]),
                    ("V", "Grooming", &[
                        "Washes hands with assistance",
                        "Dries hands with a towel",
                        "Brushes teeth with assistance",
                    ]),
                    ("W", "Toileting", &[
                        "Sits on the toilet when placed",
                        "Indicates the need to use the toilet",
                        "Completes the toileting routine with prompts",
                    ]),
                    // Motor Skills
                    ("X", "Gross Motor", &[
                        "Walks without support",
                        "Kicks a stationary ball",
                        "Jumps with both feet",
                        "Climbs stairs with alternating feet",
                    ]),
                    ("Y", "Fine Motor", &[
                        "Grasps small objects with a pincer grasp",
                        "Stacks blocks into a tower",
                        "Strings large beads",
                        "Snips paper with scissors",
                    ]),
                ];

                category_defs
                    .iter()
                    .map(|(letter, title, items)| ProtocolCategory {
                        id: letter.to_string(),
                        title: format!("{letter}. {title}"),
                        items: items
                            .iter()
                            .enumerate()
                            .map(|(idx, text)| ProtocolItem {
                                id: format!("{letter}{}", idx + 1),
                                text: text.to_string(),
                                task_objective: None,
                                scale,
                                criteria: point_criteria(),
                                sequence: None,
                            })
                            .collect(),
                    })
                    .collect()
            });
        &CATEGORIES
    }
}
