// ============================================
// src/home.rs
// ホーム画面: タイプライター見出し・週間グラフ・今日の単語
// ============================================

use serde::{Deserialize, Serialize};

use crate::words::{DAILY_WORDS, DailyWord};

pub const HEADLINE_WORDS: &[&str] = &["Fluently", "Confidently", "Naturally", "Perfectly"];
pub const CURSOR_CHAR: char = '|';

// --------------------------------------------------
// タイプライター
// --------------------------------------------------

/// 1文字ごとの速度 (ms)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    pub type_speed_ms: u64,
    pub back_speed_ms: u64,
    /// 打ち終わってから消し始めるまで
    pub back_delay_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_speed_ms: 100,
            back_speed_ms: 50,
            back_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// 単語を1文字ずつ打っては消すのを繰り返す
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: &'static [&'static str],
    timing: TypewriterTiming,
    word: usize,
    shown: usize, // 表示中の文字数
    phase: Phase,
    next_at_ms: u64,
}

impl Typewriter {
    pub fn new(words: &'static [&'static str], timing: TypewriterTiming) -> Self {
        Self {
            words,
            timing,
            word: 0,
            shown: 0,
            phase: Phase::Typing,
            next_at_ms: timing.type_speed_ms,
        }
    }

    fn current_word(&self) -> &'static str {
        self.words.get(self.word).copied().unwrap_or("")
    }

    /// 現在表示中の文字列
    pub fn visible(&self) -> &'static str {
        let word = self.current_word();
        match word.char_indices().nth(self.shown) {
            Some((byte, _)) => &word[..byte],
            None => word,
        }
    }

    /// `now_ms` までに予定されていた分だけ進める
    pub fn tick(&mut self, now_ms: u64) {
        if self.words.is_empty() {
            return;
        }
        // 長時間止まっていた場合は追いかけずに今から再開
        let longest = self.timing.back_delay_ms.max(self.timing.type_speed_ms) * 4;
        if now_ms > self.next_at_ms + longest {
            self.next_at_ms = now_ms;
        }
        while now_ms >= self.next_at_ms {
            self.step();
        }
    }

    fn step(&mut self) {
        let len = self.current_word().chars().count();
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown >= len {
                    self.phase = Phase::Holding;
                    self.next_at_ms += self.timing.back_delay_ms.max(1);
                } else {
                    self.next_at_ms += self.timing.type_speed_ms.max(1);
                }
            }
            Phase::Holding | Phase::Deleting => {
                self.phase = Phase::Deleting;
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    self.next_at_ms += self.timing.type_speed_ms.max(1);
                } else {
                    self.next_at_ms += self.timing.back_speed_ms.max(1);
                }
            }
        }
    }
}

// --------------------------------------------------
// 週間の学習グラフ
// --------------------------------------------------

pub const WEEK_DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub struct ProgressSeries {
    pub name: &'static str,
    pub values: [u32; 7],
}

pub const WEEKLY_PROGRESS: &[ProgressSeries] = &[
    ProgressSeries {
        name: "Vocabulary",
        values: [65, 72, 78, 85, 89, 92, 95],
    },
    ProgressSeries {
        name: "Grammar",
        values: [45, 58, 65, 72, 78, 85, 88],
    },
    ProgressSeries {
        name: "Speaking",
        values: [35, 42, 48, 55, 62, 68, 75],
    },
];

// 円周と、アニメーション後の残り
const RING_CIRCUMFERENCE: f64 = 251.2;
const RING_TARGET_OFFSET: f64 = 125.6;

/// 進捗リングの割合 (0.0 ~ 1.0)
pub fn progress_ring_ratio() -> f64 {
    1.0 - RING_TARGET_OFFSET / RING_CIRCUMFERENCE
}

/// 日付 (1〜31) で今日の単語を決める
pub fn word_of_the_day(day_of_month: u32) -> &'static DailyWord {
    &DAILY_WORDS[day_of_month as usize % DAILY_WORDS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter() -> Typewriter {
        Typewriter::new(HEADLINE_WORDS, TypewriterTiming::default())
    }

    #[test]
    fn types_one_char_per_interval() {
        let mut tw = typewriter();
        tw.tick(0);
        assert_eq!(tw.visible(), "");
        tw.tick(100);
        assert_eq!(tw.visible(), "F");
        tw.tick(350);
        assert_eq!(tw.visible(), "Flu");
    }

    #[test]
    fn holds_full_word_then_deletes_and_moves_on() {
        let mut tw = typewriter();
        // "Fluently" は8文字: 800ms で打ち終わる
        tw.tick(800);
        assert_eq!(tw.visible(), "Fluently");
        tw.tick(2799);
        assert_eq!(tw.visible(), "Fluently");
        tw.tick(2800);
        assert_eq!(tw.visible(), "Fluentl");

        // 残り7文字を50msずつ消す
        tw.tick(2800 + 50 * 7);
        assert_eq!(tw.visible(), "");
        tw.tick(2800 + 50 * 7 + 100);
        assert_eq!(tw.visible(), "C");
    }

    #[test]
    fn loops_back_to_first_word() {
        let mut tw = typewriter();
        let mut now = 0;
        let mut seen = Vec::new();
        while seen.len() < HEADLINE_WORDS.len() + 1 {
            now += 50;
            tw.tick(now);
            let shown = tw.visible();
            if HEADLINE_WORDS.contains(&shown) && seen.last() != Some(&shown) {
                seen.push(shown);
            }
        }
        assert_eq!(&seen[..HEADLINE_WORDS.len()], HEADLINE_WORDS);
        assert_eq!(seen[HEADLINE_WORDS.len()], "Fluently");
    }

    #[test]
    fn ring_is_half_full() {
        assert!((progress_ring_ratio() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn daily_word_rotates_by_day() {
        assert_eq!(word_of_the_day(3).word, "Eloquent");
        assert_eq!(word_of_the_day(4).word, "Serendipity");
        assert_eq!(word_of_the_day(5).word, "Perspicacious");
    }

    #[test]
    fn series_cover_the_whole_week() {
        assert_eq!(WEEKLY_PROGRESS.len(), 3);
        assert!(WEEKLY_PROGRESS.iter().all(|s| s.values.len() == WEEK_DAYS.len()));
    }
}
