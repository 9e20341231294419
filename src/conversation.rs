// ============================================
// src/conversation.rs
// 会話練習のシミュレーター (シナリオ・返信タイマー・音声入力)
// ============================================

use std::collections::VecDeque;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, error, warn};

use crate::error::SpeechError;

pub const DEFAULT_RESPONSE_DELAY_MS: u64 = 1000;
pub const DEFAULT_SCENARIO: &str = "restaurant";

// --------------------------------------------------
// データ構造
// --------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
        }
    }
}

/// シナリオの台本 (最初に表示される会話)
pub struct Scenario {
    pub key: &'static str,
    pub title: &'static str,
    pub opening: &'static [(Sender, &'static str)],
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "restaurant",
        title: "At the Restaurant",
        opening: &[
            (Sender::Ai, "Hello! Welcome to our restaurant. Do you have a reservation?"),
            (Sender::User, "No, I don't have a reservation. Do you have a table for two?"),
            (Sender::Ai, "Of course! We have a nice table by the window. Would you like to see the menu?"),
        ],
    },
    Scenario {
        key: "airport",
        title: "At the Airport",
        opening: &[
            (Sender::Ai, "Good morning! May I see your passport and boarding pass, please?"),
            (Sender::User, "Sure, here you go. Which gate should I go to?"),
            (Sender::Ai, "You're at gate 12A. Your flight boards in 30 minutes."),
        ],
    },
];

/// AIの返信候補 (ランダムに1つ選ぶ)
pub const CANNED_RESPONSES: [&str; 5] = [
    "That's a great point! Tell me more about that.",
    "I understand what you mean. How do you feel about that?",
    "Interesting perspective! What made you think that way?",
    "I see. Can you elaborate on that?",
    "That's fascinating! Have you considered other viewpoints?",
];

/// 入力欄に差し込める定型文
pub const QUICK_RESPONSES: &[&str] = &[
    "Could you repeat that, please?",
    "Thank you very much!",
    "I'd like to order, please.",
    "How much does it cost?",
    "Where is the restroom?",
];

/// キーに対応するシナリオ。知らないキーなら既定のレストランに戻る
pub fn find_scenario(key: &str) -> &'static Scenario {
    SCENARIOS
        .iter()
        .find(|s| s.key == key)
        .unwrap_or_else(|| {
            warn!(scenario = key, "unknown scenario, falling back to {DEFAULT_SCENARIO}");
            &SCENARIOS[0]
        })
}

// --------------------------------------------------
// 音声入力
// --------------------------------------------------

/// 音声認識エンジンから届くイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// 確定した認識結果
    Result(String),
    Error(String),
    /// 発話の終わり
    End,
}

/// 認識の設定 (単発・確定結果のみ)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionOptions {
    pub locale: String,
    pub continuous: bool,
    pub interim_results: bool,
}

impl Default for RecognitionOptions {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            continuous: false,
            interim_results: false,
        }
    }
}

pub trait SpeechRecognizer {
    fn start(&mut self) -> Result<(), SpeechError>;
    fn stop(&mut self);
    /// 溜まっているイベントを1つ取り出す
    fn poll(&mut self) -> Option<SpeechEvent>;
}

/// 音声認識が使えるかどうか (外から注入する)
pub enum SpeechCapability {
    Available(Box<dyn SpeechRecognizer>),
    Unavailable,
}

impl fmt::Debug for SpeechCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeechCapability::Available(_) => f.write_str("Available"),
            SpeechCapability::Unavailable => f.write_str("Unavailable"),
        }
    }
}

/// 用意されたフレーズを順番に「聞き取る」認識エンジン
#[derive(Debug, Clone)]
pub struct PhraseRecognizer {
    options: RecognitionOptions,
    phrases: VecDeque<String>,
    pending: VecDeque<SpeechEvent>,
    running: bool,
}

impl PhraseRecognizer {
    pub fn new(options: RecognitionOptions, phrases: impl IntoIterator<Item = String>) -> Self {
        Self {
            options,
            phrases: phrases.into_iter().collect(),
            pending: VecDeque::new(),
            running: false,
        }
    }
}

impl SpeechRecognizer for PhraseRecognizer {
    fn start(&mut self) -> Result<(), SpeechError> {
        if self.running {
            return Err(SpeechError::AlreadyRunning);
        }
        self.running = true;
        match self.phrases.pop_front() {
            Some(phrase) => self.pending.push_back(SpeechEvent::Result(phrase)),
            None => self
                .pending
                .push_back(SpeechEvent::Error("no-speech".to_string())),
        }
        // 単発モードなので1回で終わる
        if !self.options.continuous {
            self.pending.push_back(SpeechEvent::End);
        }
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn poll(&mut self) -> Option<SpeechEvent> {
        self.pending.pop_front()
    }
}

// --------------------------------------------------
// シミュレーター本体
// --------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingUserInput,
    AwaitingSimulatedResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Started,
    Stopped,
    Unsupported,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatorOptions {
    pub response_delay_ms: u64,
    /// シナリオ切り替え時に返信待ちを破棄するか
    pub cancel_pending_on_switch: bool,
}

impl Default for SimulatorOptions {
    fn default() -> Self {
        Self {
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
            cancel_pending_on_switch: true,
        }
    }
}

#[derive(Debug)]
pub struct ConversationSimulator {
    state: SessionState,
    scenario: Option<&'static str>,
    transcript: Vec<Message>,
    input: String,
    /// 返信予定時刻 (ms)
    pending_replies: VecDeque<u64>,

    speech: SpeechCapability,
    recording: bool,

    options: SimulatorOptions,
    rng: StdRng,
}

impl ConversationSimulator {
    pub fn new(options: SimulatorOptions, speech: SpeechCapability, rng: StdRng) -> Self {
        Self {
            state: SessionState::Idle,
            scenario: None,
            transcript: Vec::new(),
            input: String::new(),
            pending_replies: VecDeque::new(),
            speech,
            recording: false,
            options,
            rng,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn scenario(&self) -> Option<&'static str> {
        self.scenario
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn speech_available(&self) -> bool {
        matches!(self.speech, SpeechCapability::Available(_))
    }

    /// シナリオを読み込み、会話をリセットする
    pub fn select_scenario(&mut self, key: &str) -> &'static str {
        let scenario = find_scenario(key);
        debug!(scenario = scenario.key, "loading scenario");

        self.scenario = Some(scenario.key);
        self.transcript = scenario
            .opening
            .iter()
            .map(|(sender, text)| Message {
                sender: *sender,
                text: text.to_string(),
            })
            .collect();
        self.input.clear();

        if self.options.cancel_pending_on_switch {
            self.pending_replies.clear();
        }
        self.state = if self.pending_replies.is_empty() {
            SessionState::AwaitingUserInput
        } else {
            SessionState::AwaitingSimulatedResponse
        };
        scenario.key
    }

    /// `SCENARIOS` の中で隣のシナリオに切り替える
    pub fn cycle_scenario(&mut self, forward: bool) -> &'static str {
        let len = SCENARIOS.len();
        let current = self
            .scenario
            .and_then(|key| SCENARIOS.iter().position(|s| s.key == key))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else if current == 0 {
            len - 1
        } else {
            current - 1
        };
        self.select_scenario(SCENARIOS[next].key)
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn insert_quick_response(&mut self, text: &str) {
        self.set_input(text);
    }

    /// 入力を送信する。空白だけなら何もしない
    pub fn submit(&mut self, now_ms: u64) -> SubmitOutcome {
        if self.state == SessionState::Idle {
            return SubmitOutcome::Ignored;
        }
        let text = self.input.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.transcript.push(Message::user(text));
        self.input.clear();
        self.pending_replies
            .push_back(now_ms + self.options.response_delay_ms);
        self.state = SessionState::AwaitingSimulatedResponse;
        SubmitOutcome::Sent
    }

    /// 予定時刻を過ぎた返信を追加する。追加した数を返す
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while self.pending_replies.front().is_some_and(|due| *due <= now_ms) {
            self.pending_replies.pop_front();
            let reply = self.generate_response();
            self.transcript.push(Message::ai(reply));
            fired += 1;
        }
        if fired > 0 && self.pending_replies.is_empty() {
            self.state = SessionState::AwaitingUserInput;
        }
        fired
    }

    fn generate_response(&mut self) -> &'static str {
        CANNED_RESPONSES
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(CANNED_RESPONSES[0])
    }

    /// 録音の開始・停止を切り替える
    pub fn toggle_recording(&mut self) -> ToggleOutcome {
        if self.recording {
            self.stop_recording();
            return ToggleOutcome::Stopped;
        }
        let SpeechCapability::Available(recognizer) = &mut self.speech else {
            return ToggleOutcome::Unsupported;
        };
        match recognizer.start() {
            Ok(()) => {
                self.recording = true;
                ToggleOutcome::Started
            }
            Err(err) => {
                error!(%err, "could not start speech recognition");
                ToggleOutcome::Failed
            }
        }
    }

    pub fn stop_recording(&mut self) {
        self.recording = false;
        if let SpeechCapability::Available(recognizer) = &mut self.speech {
            recognizer.stop();
        }
    }

    /// 認識エンジンのイベントを処理する。会話の状態は変えない
    pub fn poll_speech(&mut self) {
        loop {
            let event = match &mut self.speech {
                SpeechCapability::Available(recognizer) => recognizer.poll(),
                SpeechCapability::Unavailable => None,
            };
            let Some(event) = event else { break };

            match event {
                SpeechEvent::Result(transcript) => {
                    debug!(%transcript, "speech recognized");
                    self.input = transcript;
                    self.stop_recording();
                }
                SpeechEvent::Error(reason) => {
                    error!(%reason, "speech recognition error");
                    self.stop_recording();
                }
                SpeechEvent::End => self.stop_recording(),
            }
        }
    }
}

/// シード指定があれば再現できる乱数を作る
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator(speech: SpeechCapability) -> ConversationSimulator {
        ConversationSimulator::new(SimulatorOptions::default(), speech, seeded_rng(Some(42)))
    }

    fn phrases(list: &[&str]) -> SpeechCapability {
        SpeechCapability::Available(Box::new(PhraseRecognizer::new(
            RecognitionOptions::default(),
            list.iter().map(|s| s.to_string()),
        )))
    }

    #[test]
    fn restaurant_then_hi_gets_one_reply() {
        let mut sim = simulator(SpeechCapability::Unavailable);
        sim.select_scenario("restaurant");
        assert_eq!(sim.transcript().len(), 3);

        sim.set_input("Hi");
        assert_eq!(sim.submit(0), SubmitOutcome::Sent);
        assert_eq!(sim.transcript().len(), 4);
        assert_eq!(sim.transcript()[3], Message::user("Hi"));
        assert_eq!(sim.input(), "");
        assert_eq!(sim.state(), SessionState::AwaitingSimulatedResponse);

        assert_eq!(sim.tick(999), 0);
        assert_eq!(sim.tick(1000), 1);
        assert_eq!(sim.transcript().len(), 5);

        let reply = &sim.transcript()[4];
        assert_eq!(reply.sender, Sender::Ai);
        assert!(CANNED_RESPONSES.contains(&reply.text.as_str()));
        assert_eq!(sim.state(), SessionState::AwaitingUserInput);

        assert_eq!(sim.tick(5000), 0);
        assert_eq!(sim.transcript().len(), 5);
    }

    #[test]
    fn blank_submission_is_a_no_op() {
        let mut sim = simulator(SpeechCapability::Unavailable);
        sim.select_scenario("airport");
        for input in ["", "   ", "\t\n"] {
            sim.set_input(input);
            assert_eq!(sim.submit(0), SubmitOutcome::Ignored);
        }
        assert_eq!(sim.transcript().len(), 3);
        assert_eq!(sim.state(), SessionState::AwaitingUserInput);
    }

    #[test]
    fn submission_before_any_scenario_is_ignored() {
        let mut sim = simulator(SpeechCapability::Unavailable);
        sim.set_input("Hello");
        assert_eq!(sim.submit(0), SubmitOutcome::Ignored);
        assert_eq!(sim.state(), SessionState::Idle);
        assert!(sim.transcript().is_empty());
    }

    #[test]
    fn unknown_scenario_falls_back_to_restaurant() {
        let mut sim = simulator(SpeechCapability::Unavailable);
        assert_eq!(sim.select_scenario("spaceship"), "restaurant");
        assert!(sim.transcript()[0].text.contains("restaurant"));
    }

    #[test]
    fn switching_scenario_cancels_pending_reply() {
        let mut sim = simulator(SpeechCapability::Unavailable);
        sim.select_scenario("restaurant");
        sim.set_input("Hi");
        sim.submit(0);
        sim.select_scenario("airport");

        assert_eq!(sim.tick(2000), 0);
        assert_eq!(sim.transcript().len(), 3);
        assert_eq!(sim.state(), SessionState::AwaitingUserInput);
    }

    #[test]
    fn stale_reply_lands_in_new_scenario_when_not_cancelled() {
        let options = SimulatorOptions {
            cancel_pending_on_switch: false,
            ..SimulatorOptions::default()
        };
        let mut sim =
            ConversationSimulator::new(options, SpeechCapability::Unavailable, seeded_rng(Some(1)));
        sim.select_scenario("restaurant");
        sim.set_input("Hi");
        sim.submit(0);
        sim.select_scenario("airport");
        assert_eq!(sim.state(), SessionState::AwaitingSimulatedResponse);

        assert_eq!(sim.tick(1000), 1);
        assert_eq!(sim.transcript().len(), 4);
        assert!(sim.transcript()[0].text.contains("passport"));
    }

    #[test]
    fn cycling_scenarios_wraps() {
        let mut sim = simulator(SpeechCapability::Unavailable);
        sim.select_scenario("restaurant");
        assert_eq!(sim.cycle_scenario(true), "airport");
        assert_eq!(sim.cycle_scenario(true), "restaurant");
        assert_eq!(sim.cycle_scenario(false), "airport");
    }

    #[test]
    fn unsupported_speech_reports_and_keeps_state() {
        let mut sim = simulator(SpeechCapability::Unavailable);
        sim.select_scenario("restaurant");
        assert_eq!(sim.toggle_recording(), ToggleOutcome::Unsupported);
        assert!(!sim.is_recording());
        assert_eq!(sim.state(), SessionState::AwaitingUserInput);
    }

    #[test]
    fn speech_result_fills_input_without_submitting() {
        let mut sim = simulator(phrases(&["Can I see the menu?"]));
        sim.select_scenario("restaurant");

        assert_eq!(sim.toggle_recording(), ToggleOutcome::Started);
        assert!(sim.is_recording());
        sim.poll_speech();

        assert!(!sim.is_recording());
        assert_eq!(sim.input(), "Can I see the menu?");
        assert_eq!(sim.transcript().len(), 3);
        assert_eq!(sim.state(), SessionState::AwaitingUserInput);
    }

    #[test]
    fn speech_error_only_resets_recording_flag() {
        let mut sim = simulator(phrases(&[]));
        sim.select_scenario("restaurant");
        sim.set_input("draft");

        sim.toggle_recording();
        sim.poll_speech();

        assert!(!sim.is_recording());
        assert_eq!(sim.input(), "draft");
        assert_eq!(sim.transcript().len(), 3);
    }

    #[test]
    fn toggling_twice_stops_recording() {
        let mut sim = simulator(phrases(&["hello"]));
        assert_eq!(sim.toggle_recording(), ToggleOutcome::Started);
        assert_eq!(sim.toggle_recording(), ToggleOutcome::Stopped);
        assert!(!sim.is_recording());
    }

    #[test]
    fn quick_response_replaces_input() {
        let mut sim = simulator(SpeechCapability::Unavailable);
        sim.push_char('x');
        sim.insert_quick_response(QUICK_RESPONSES[1]);
        assert_eq!(sim.input(), "Thank you very much!");
        sim.backspace();
        assert_eq!(sim.input(), "Thank you very much");
    }

    #[test]
    fn recognition_defaults_to_single_shot_final_results() {
        let options = RecognitionOptions::default();
        assert_eq!(options.locale, "en-US");
        assert!(!options.continuous);
        assert!(!options.interim_results);
    }

    #[test]
    fn starting_twice_is_rejected() {
        let mut recognizer =
            PhraseRecognizer::new(RecognitionOptions::default(), vec!["hi".to_string()]);
        assert!(recognizer.start().is_ok());
        assert_eq!(recognizer.start(), Err(SpeechError::AlreadyRunning));
        assert_eq!(recognizer.poll(), Some(SpeechEvent::Result("hi".to_string())));
        assert_eq!(recognizer.poll(), Some(SpeechEvent::End));
        assert_eq!(recognizer.poll(), None);
    }
}
