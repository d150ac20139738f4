use crate::constants::TOTAL_SLIDES;

/// Where a group of elements is placed inside the content area.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Area {
    Full,
    Left,
    Right,
}

/// Starting pose an element eases in from.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Entrance {
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
    pub alternate: bool, // Mirror `dx` on every odd element
}

impl Entrance {
    pub const fn rise(dy: f32, scale: f32) -> Self {
        Self { dx: 0.0, dy, scale, alternate: false }
    }

    pub const fn slide(dx: f32) -> Self {
        Self { dx, dy: 0.0, scale: 1.0, alternate: false }
    }
}

/// Elements that enter together with a fixed stagger between them.
#[derive(Debug)]
pub struct ElementGroup {
    pub labels: &'static [&'static str],
    pub area: Area,
    pub columns: u32,
    pub start_ms: u32,
    pub stagger_ms: u32,
    pub duration_ms: u32,
    pub entrance: Entrance,
}

#[derive(Debug)]
pub struct SlideSpec {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static [&'static str],
    pub groups: &'static [ElementGroup],
}

impl SlideSpec {
    /// Time until the last element of the slide has settled.
    pub fn choreography_ms(&self) -> u32 {
        self.groups
            .iter()
            .map(|g| g.start_ms + g.stagger_ms * (g.labels.len() as u32).saturating_sub(1) + g.duration_ms)
            .max()
            .unwrap_or(0)
    }
}

pub struct Deck {
    slides: &'static [SlideSpec],
}

impl Deck {
    pub fn builtin() -> Self {
        Self { slides: SLIDES }
    }

    pub fn slides(&self) -> &'static [SlideSpec] {
        self.slides
    }

    pub fn len(&self) -> u32 {
        self.slides.len() as u32
    }

    /// Slide `n`, counted from 1.
    pub fn slide(&self, n: u32) -> Option<&SlideSpec> {
        let index = n.checked_sub(1)? as usize;
        self.slides.get(index)
    }

    pub fn title(&self, n: u32) -> String {
        match self.slide(n) {
            Some(slide) if !slide.title.is_empty() => slide.title.to_string(),
            _ => format!("Slide {}", n),
        }
    }
}

const SLIDES: &[SlideSpec; TOTAL_SLIDES as usize] = &[
    SlideSpec {
        title: "AI Agents",
        subtitle: "From chatbots to autonomous systems",
        body: &[],
        groups: &[
            ElementGroup {
                labels: &[
                    "Chatbot\nanswers questions",
                    "Assistant\nhelps with tasks",
                    "Agent\npursues goals",
                ],
                area: Area::Full,
                columns: 3,
                start_ms: 0,
                stagger_ms: 150,
                duration_ms: 600,
                entrance: Entrance::rise(30.0, 0.9),
            },
            ElementGroup {
                labels: &[
                    "Initiative:   none  |  on request  |  own\nMemory:   session  |  profile  |  long-term\nTools:   none  |  few  |  many, chained",
                ],
                area: Area::Full,
                columns: 1,
                start_ms: 600,
                stagger_ms: 0,
                duration_ms: 800,
                entrance: Entrance::rise(40.0, 1.0),
            },
        ],
    },
    SlideSpec {
        title: "Signs of an agent",
        subtitle: "What separates an agent from a script",
        body: &[],
        groups: &[ElementGroup {
            labels: &[
                "Autonomy",
                "Goal orientation",
                "Planning",
                "Tool use",
                "Memory",
                "Learning from feedback",
            ],
            area: Area::Full,
            columns: 3,
            start_ms: 0,
            stagger_ms: 100,
            duration_ms: 600,
            entrance: Entrance::rise(30.0, 0.95),
        }],
    },
    SlideSpec {
        title: "Pros and cons",
        subtitle: "What agents bring and what they cost",
        body: &[],
        groups: &[
            ElementGroup {
                labels: &["Pros"],
                area: Area::Left,
                columns: 1,
                start_ms: 0,
                stagger_ms: 0,
                duration_ms: 700,
                entrance: Entrance::slide(-50.0),
            },
            ElementGroup {
                labels: &["Cons"],
                area: Area::Right,
                columns: 1,
                start_ms: 200,
                stagger_ms: 0,
                duration_ms: 700,
                entrance: Entrance::slide(50.0),
            },
            ElementGroup {
                labels: &[
                    "Work around the clock",
                    "Scale without hiring",
                    "Handle routine end to end",
                    "Combine many tools",
                ],
                area: Area::Left,
                columns: 1,
                start_ms: 0,
                stagger_ms: 100,
                duration_ms: 400,
                entrance: Entrance::slide(20.0),
            },
            ElementGroup {
                labels: &[
                    "Hallucinations",
                    "Hard to audit",
                    "Cost of mistakes",
                    "Security of tool access",
                ],
                area: Area::Right,
                columns: 1,
                start_ms: 200,
                stagger_ms: 100,
                duration_ms: 400,
                entrance: Entrance::slide(20.0),
            },
        ],
    },
    SlideSpec {
        title: "Timeline",
        subtitle: "How we got here",
        body: &[],
        groups: &[ElementGroup {
            labels: &[
                "1966  ELIZA",
                "1990s  Expert systems",
                "2011  Voice assistants",
                "2017  Transformers",
                "2022  Chat LLMs",
                "2023+  Tool-using agents",
            ],
            area: Area::Full,
            columns: 2,
            start_ms: 0,
            stagger_ms: 120,
            duration_ms: 600,
            entrance: Entrance {
                dx: -50.0,
                dy: 20.0,
                scale: 1.0,
                alternate: true,
            },
        }],
    },
    SlideSpec {
        title: "Maturity levels",
        subtitle: "From copilots to autonomous operators",
        body: &[],
        groups: &[
            ElementGroup {
                labels: &["L1\nPrompted", "L2\nAssisted", "L3\nDelegated", "L4\nSupervised", "L5\nAutonomous"],
                area: Area::Full,
                columns: 5,
                start_ms: 0,
                stagger_ms: 100,
                duration_ms: 600,
                entrance: Entrance::rise(30.0, 0.9),
            },
            ElementGroup {
                labels: &[
                    "Scope of actions",
                    "Human checkpoints",
                    "Error recovery",
                    "Planning horizon",
                    "Memory depth",
                    "Accountability",
                ],
                area: Area::Full,
                columns: 3,
                start_ms: 600,
                stagger_ms: 80,
                duration_ms: 400,
                entrance: Entrance::rise(20.0, 1.0),
            },
        ],
    },
    SlideSpec {
        title: "Architecture",
        subtitle: "The moving parts of an agent",
        body: &[],
        groups: &[ElementGroup {
            labels: &["Model", "Planner", "Memory", "Tools", "Executor", "Guardrails"],
            area: Area::Full,
            columns: 3,
            start_ms: 0,
            stagger_ms: 80,
            duration_ms: 500,
            entrance: Entrance::rise(30.0, 0.8),
        }],
    },
    SlideSpec {
        title: "Open problems",
        subtitle: "What still goes wrong",
        body: &[],
        groups: &[ElementGroup {
            labels: &[
                "Reliability over long tasks",
                "Evaluation and benchmarks",
                "Cost and latency",
                "Prompt injection",
                "Responsibility for actions",
            ],
            area: Area::Full,
            columns: 1,
            start_ms: 0,
            stagger_ms: 150,
            duration_ms: 600,
            entrance: Entrance::slide(-60.0),
        }],
    },
    SlideSpec {
        title: "Planning",
        subtitle: "Breaking goals into steps",
        body: &[
            "Decompose the goal into sub-tasks",
            "Choose a tool for each step",
            "Re-plan when a step fails",
            "Stop when the goal is met or budget runs out",
        ],
        groups: &[],
    },
    SlideSpec {
        title: "Memory",
        subtitle: "What an agent remembers",
        body: &[
            "Working memory: the current context window",
            "Episodic memory: past runs and outcomes",
            "Semantic memory: documents and facts",
            "Retrieval decides what comes back into context",
        ],
        groups: &[],
    },
    SlideSpec {
        title: "Tools",
        subtitle: "Acting on the world",
        body: &[
            "Search, code execution, file access",
            "APIs of business systems",
            "Browsers and desktop automation",
            "Every tool widens both power and risk",
        ],
        groups: &[],
    },
    SlideSpec {
        title: "Multi-agent systems",
        subtitle: "Teams of specialised agents",
        body: &[
            "Roles: planner, researcher, critic, executor",
            "Communication through shared state or messages",
            "Coordination overhead grows with team size",
        ],
        groups: &[],
    },
    SlideSpec {
        title: "Safety",
        subtitle: "Keeping agents in bounds",
        body: &[
            "Least-privilege tool access",
            "Human approval for irreversible actions",
            "Sandboxes and audit logs",
            "Red-teaming before release",
        ],
        groups: &[],
    },
    SlideSpec {
        title: "Adoption",
        subtitle: "Where agents pay off today",
        body: &[
            "Customer support triage",
            "Software maintenance",
            "Research and reporting",
            "Back-office data entry",
        ],
        groups: &[],
    },
    SlideSpec {
        title: "Takeaways",
        subtitle: "Thank you",
        body: &[
            "Agents are systems, not just models",
            "Autonomy is a dial, not a switch",
            "Start narrow, measure, then widen scope",
        ],
        groups: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_has_fourteen_slides() {
        assert_eq!(Deck::builtin().len(), TOTAL_SLIDES);
    }

    #[test]
    fn slides_are_one_indexed() {
        let deck = Deck::builtin();
        assert!(deck.slide(0).is_none());
        assert_eq!(deck.slide(1).map(|s| s.title), Some("AI Agents"));
        assert!(deck.slide(TOTAL_SLIDES).is_some());
        assert!(deck.slide(TOTAL_SLIDES + 1).is_none());
    }

    #[test]
    fn title_falls_back_to_slide_number() {
        let deck = Deck::builtin();
        assert_eq!(deck.title(2), "Signs of an agent");
        assert_eq!(deck.title(99), "Slide 99");
    }

    #[test]
    fn only_first_seven_slides_are_choreographed() {
        let deck = Deck::builtin();
        for n in 1..=deck.len() {
            let slide = deck.slide(n).unwrap();
            assert_eq!(!slide.groups.is_empty(), n <= 7, "slide {}", n);
        }
    }

    #[test]
    fn choreography_length_includes_last_stagger() {
        let deck = Deck::builtin();
        // Table starts at 600 ms and runs 800 ms
        assert_eq!(deck.slide(1).unwrap().choreography_ms(), 1400);
        // Criteria: 600 + 5 * 80 + 400
        assert_eq!(deck.slide(5).unwrap().choreography_ms(), 1400);
        assert_eq!(deck.slide(8).unwrap().choreography_ms(), 0);
    }
}
