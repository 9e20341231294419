// ============================================
// src/grammar.rs
// 時制タイムライン
// ============================================

use tracing::{debug, warn};

pub const DEFAULT_TENSE: &str = "present-simple";

/// 時制1つ分の解説
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tense {
    pub key: &'static str,
    pub name: &'static str,
    pub badge: &'static str, // タイムライン上の略称
    pub summary: &'static str,
    pub structure: &'static str,
    pub uses: &'static [&'static str],
    pub time_expressions: &'static [&'static str],
    /// (例文, 用法)
    pub examples: &'static [(&'static str, &'static str)],
}

/// 過去 → 現在 → 未来 の順
pub const TENSES: &[Tense] = &[
    Tense {
        key: "past-simple",
        name: "Past Simple Tense",
        badge: "PS",
        summary: "For finished actions at a specific time in the past",
        structure: "Subject + Verb(past form)",
        uses: &[
            "Completed actions in the past",
            "A series of past events",
            "Past habits",
        ],
        time_expressions: &["yesterday", "last week", "in 2010", "ago", "when I was young"],
        examples: &[
            ("I visited London last year.", "Completed action"),
            ("She woke up, showered and left.", "Series of events"),
            ("We walked to school every day.", "Past habit"),
        ],
    },
    Tense {
        key: "present-simple",
        name: "Present Simple Tense",
        badge: "PR",
        summary: "For habits, facts and things that are generally true",
        structure: "Subject + Verb(+s/es)",
        uses: &["Habits and routines", "General truths", "Timetables and schedules"],
        time_expressions: &["always", "usually", "often", "every day", "on Mondays"],
        examples: &[
            ("I drink coffee every morning.", "Daily routine"),
            ("Water boils at 100 degrees.", "General truth"),
            ("The train leaves at 8 pm.", "Timetable"),
        ],
    },
    Tense {
        key: "present-continuous",
        name: "Present Continuous Tense",
        badge: "PC",
        summary: "For actions happening right now or temporary situations",
        structure: "Subject + am/is/are + Verb(+ing)",
        uses: &[
            "Actions happening now",
            "Temporary situations",
            "Future plans (near future)",
        ],
        time_expressions: &["now", "right now", "currently", "at the moment", "these days"],
        examples: &[
            ("I am drinking coffee right now.", "Action happening now"),
            ("She is working on a project.", "Temporary situation"),
            ("They are meeting us tomorrow.", "Planned future action"),
        ],
    },
    Tense {
        key: "present-perfect",
        name: "Present Perfect Tense",
        badge: "PP",
        summary: "For past actions connected to the present",
        structure: "Subject + have/has + Verb(past participle)",
        uses: &[
            "Life experiences",
            "Actions with a present result",
            "Situations that started in the past and continue",
        ],
        time_expressions: &["ever", "never", "already", "yet", "since", "for"],
        examples: &[
            ("I have visited Japan twice.", "Life experience"),
            ("She has lost her keys.", "Present result"),
            ("We have lived here since 2015.", "Continuing situation"),
        ],
    },
    Tense {
        key: "future-simple",
        name: "Future Simple Tense",
        badge: "FS",
        summary: "For predictions, promises and decisions made now",
        structure: "Subject + will + Verb(base form)",
        uses: &["Predictions", "Promises and offers", "Instant decisions"],
        time_expressions: &["tomorrow", "next week", "soon", "in the future", "later"],
        examples: &[
            ("It will rain tomorrow.", "Prediction"),
            ("I will help you with that.", "Offer"),
            ("I'll have the soup, please.", "Instant decision"),
        ],
    },
];

/// タイムライン上で選ばれている時制 (常に1つだけ)
#[derive(Debug, Clone)]
pub struct TenseTimeline {
    active: usize,
}

impl Default for TenseTimeline {
    fn default() -> Self {
        Self {
            active: position_of(DEFAULT_TENSE).unwrap_or(0),
        }
    }
}

fn position_of(key: &str) -> Option<usize> {
    TENSES.iter().position(|t| t.key == key)
}

impl TenseTimeline {
    pub fn tenses(&self) -> &'static [Tense] {
        TENSES
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// 選択中の時制の解説
    pub fn content(&self) -> &'static Tense {
        &TENSES[self.active]
    }

    /// キーで選ぶ。知らないキーなら既定の時制
    pub fn select(&mut self, key: &str) -> &'static Tense {
        self.active = match position_of(key) {
            Some(idx) => idx,
            None => {
                warn!(tense = key, "unknown tense, using {DEFAULT_TENSE}");
                position_of(DEFAULT_TENSE).unwrap_or(0)
            }
        };
        debug!(tense = self.content().key, "tense selected");
        self.content()
    }

    /// 右へ (未来側)。端で止まる
    pub fn next(&mut self) -> &'static Tense {
        if self.active + 1 < TENSES.len() {
            self.active += 1;
        }
        self.content()
    }

    /// 左へ (過去側)。端で止まる
    pub fn previous(&mut self) -> &'static Tense {
        self.active = self.active.saturating_sub(1);
        self.content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_present_simple() {
        let timeline = TenseTimeline::default();
        assert_eq!(timeline.content().key, "present-simple");
    }

    #[test]
    fn unknown_key_falls_back_to_default() {
        let mut timeline = TenseTimeline::default();
        timeline.select("present-continuous");
        assert_eq!(timeline.select("pluperfect-subjunctive").key, DEFAULT_TENSE);
    }

    #[test]
    fn moving_is_clamped_at_both_ends() {
        let mut timeline = TenseTimeline::default();
        for _ in 0..10 {
            timeline.previous();
        }
        assert_eq!(timeline.active_index(), 0);
        for _ in 0..10 {
            timeline.next();
        }
        assert_eq!(timeline.active_index(), TENSES.len() - 1);
    }

    #[test]
    fn present_continuous_has_three_examples() {
        let mut timeline = TenseTimeline::default();
        let tense = timeline.select("present-continuous");
        assert_eq!(tense.structure, "Subject + am/is/are + Verb(+ing)");
        assert_eq!(tense.examples.len(), 3);
        assert!(tense.time_expressions.contains(&"at the moment"));
    }
}
