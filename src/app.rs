// ============================================
// src/app.rs
// アプリ全体の状態とキー入力の振り分け
// ============================================

use clap::ValueEnum;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::conversation::{
    ConversationSimulator, QUICK_RESPONSES, SimulatorOptions, SpeechCapability, SubmitOutcome,
    ToggleOutcome, seeded_rng,
};
use crate::error::EmptyDeckError;
use crate::flashcards::Navigator;
use crate::grammar::{TENSES, TenseTimeline};
use crate::home::{HEADLINE_WORDS, Typewriter, word_of_the_day};
use crate::notify::{Notifier, Severity};
use crate::search::{self, CategoryFilter, CategorySelector};
use crate::settings::Settings;
use crate::words::{DailyWord, FLASHCARDS, WORD_LIST, WordListEntry};

// --------------------------------------------------
// 画面
// --------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    Home,
    Vocabulary,
    Grammar,
    Conversation,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Home,
        Screen::Vocabulary,
        Screen::Grammar,
        Screen::Conversation,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Vocabulary => "Vocabulary",
            Screen::Grammar => "Grammar",
            Screen::Conversation => "Conversation",
        }
    }

    fn index(self) -> usize {
        Screen::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn next(self) -> Screen {
        Screen::ALL[(self.index() + 1) % Screen::ALL.len()]
    }

    pub fn previous(self) -> Screen {
        let idx = self.index();
        Screen::ALL[if idx == 0 { Screen::ALL.len() - 1 } else { idx - 1 }]
    }
}

/// PageUp/PageDown で動く行数
const WORD_PAGE: usize = 10;

// --------------------------------------------------
// アプリの状態
// --------------------------------------------------

pub struct App {
    pub screen: Screen,

    // 単語
    pub navigator: Navigator,
    pub categories: CategorySelector,
    pub query: String,
    /// 検索欄に入力中か
    pub search_focused: bool,
    /// 絞り込み後の単語リストで選択中の行
    pub selected_word: usize,

    pub grammar: TenseTimeline,
    pub conversation: ConversationSimulator,
    pub notifier: Notifier,

    // ホーム
    pub typewriter: Typewriter,
    pub daily_word: &'static DailyWord,

    quick_response: usize,
    rng: StdRng,
    now_ms: u64,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        settings: &Settings,
        speech: SpeechCapability,
        seed: Option<u64>,
        day_of_month: u32,
    ) -> Result<Self, EmptyDeckError> {
        let options = SimulatorOptions {
            response_delay_ms: settings.response_delay_ms,
            cancel_pending_on_switch: settings.cancel_pending_on_switch,
        };
        // 返信用とシャッフル用で別の乱数列にする
        let mut conversation =
            ConversationSimulator::new(options, speech, seeded_rng(seed.map(|s| s ^ 0x5eed)));
        conversation.select_scenario(&settings.default_scenario);

        Ok(Self {
            screen: settings.start_screen,
            navigator: Navigator::new(FLASHCARDS.to_vec())?,
            categories: CategorySelector::default(),
            query: String::new(),
            search_focused: false,
            selected_word: 0,
            grammar: TenseTimeline::default(),
            conversation,
            notifier: Notifier::new(settings.notification_ms),
            typewriter: Typewriter::new(HEADLINE_WORDS, settings.typewriter),
            daily_word: word_of_the_day(day_of_month),
            quick_response: 0,
            rng: seeded_rng(seed),
            now_ms: 0,
            should_quit: false,
        })
    }

    /// 検索とカテゴリで絞り込んだ単語リスト
    pub fn visible_words(&self) -> Vec<&'static WordListEntry> {
        search::visible(WORD_LIST, &self.query, self.categories.active()).collect()
    }

    /// 選択中の単語 (リストが空なら `None`)
    pub fn selected_entry(&self) -> Option<&'static WordListEntry> {
        let words = self.visible_words();
        let last = words.len().checked_sub(1)?;
        words.get(self.selected_word.min(last)).copied()
    }

    fn move_word_selection(&mut self, delta: isize) {
        let last = self.visible_words().len().saturating_sub(1);
        self.selected_word = self.selected_word.saturating_add_signed(delta).min(last);
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notifier.notify(message, severity, self.now_ms);
    }

    /// タイマー処理 (返信・通知・タイプライター・音声認識)
    pub fn tick(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        let replies = self.conversation.tick(now_ms);
        if replies > 0 {
            debug!(replies, "simulated replies appended");
        }
        self.conversation.poll_speech();
        self.notifier.tick(now_ms);
        self.typewriter.tick(now_ms);
    }

    /// 端末のフォーカスが外れたら録音を止める
    pub fn handle_focus_lost(&mut self) {
        if self.conversation.is_recording() {
            info!("focus lost, stopping recording");
            self.conversation.stop_recording();
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.search_focused = false;
        self.screen = screen;
    }

    // MARK:キー入力の処理
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('d') if ctrl => {
                self.notifier.dismiss_latest();
                return;
            }
            KeyCode::Tab => {
                self.switch_screen(self.screen.next());
                return;
            }
            KeyCode::BackTab => {
                self.switch_screen(self.screen.previous());
                return;
            }
            KeyCode::Esc => {
                if self.search_focused {
                    self.search_focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Vocabulary if self.search_focused => self.handle_search_key(key),
            Screen::Vocabulary => self.handle_vocabulary_key(key),
            Screen::Grammar => self.handle_grammar_key(key),
            Screen::Conversation => self.handle_conversation_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('p') {
            self.notify("Playing audio...", Severity::Info);
        }
    }

    fn handle_vocabulary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') => {
                self.navigator.flip();
            }
            KeyCode::Right => {
                self.navigator.next();
            }
            KeyCode::Left => {
                self.navigator.previous();
            }
            KeyCode::Char('s') => self.navigator.shuffle(&mut self.rng),
            KeyCode::Char('k') => {
                self.navigator.mark_known();
                self.notify("Word marked as known!", Severity::Success);
            }
            KeyCode::Char('r') => {
                self.navigator.mark_for_review();
                self.notify("Word added to review queue!", Severity::Info);
            }
            KeyCode::Char('p') => {
                let word = self.navigator.current().word;
                self.notify(format!("Playing pronunciation for \"{word}\""), Severity::Info);
            }
            KeyCode::Char('c') => {
                let category = self.categories.select_next();
                self.selected_word = 0;
                debug!(%category, "category selected");
            }
            KeyCode::Char('C') => {
                let category = self.categories.select_previous();
                self.selected_word = 0;
                debug!(%category, "category selected");
            }
            KeyCode::Char('a') => {
                self.categories.select(CategoryFilter::All);
                self.selected_word = 0;
            }
            KeyCode::Down => self.move_word_selection(1),
            KeyCode::Up => self.move_word_selection(-1),
            KeyCode::PageDown => self.move_word_selection(WORD_PAGE as isize),
            KeyCode::PageUp => self.move_word_selection(-(WORD_PAGE as isize)),
            KeyCode::Enter => {
                if let Some(entry) = self.selected_entry() {
                    let word = entry.word;
                    self.notify(format!("Playing pronunciation for \"{word}\""), Severity::Info);
                }
            }
            KeyCode::Char('/') => self.search_focused = true,
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.search_focused = false,
            KeyCode::Backspace => {
                self.query.pop();
                self.selected_word = 0;
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.selected_word = 0;
            }
            _ => {}
        }
    }

    fn handle_grammar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right => {
                self.grammar.next();
            }
            KeyCode::Left => {
                self.grammar.previous();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                if let Some(tense) = TENSES.get(idx) {
                    self.grammar.select(tense.key);
                }
            }
            _ => {}
        }
    }

    fn handle_conversation_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.conversation.push_char('\n');
            }
            KeyCode::Enter => {
                if self.conversation.submit(self.now_ms) == SubmitOutcome::Sent {
                    debug!("message submitted");
                }
            }
            KeyCode::Char('r') if ctrl => match self.conversation.toggle_recording() {
                ToggleOutcome::Unsupported => self.notify(
                    "Speech recognition not supported on this terminal",
                    Severity::Error,
                ),
                ToggleOutcome::Failed => {
                    self.notify("Could not start speech recognition", Severity::Warning)
                }
                ToggleOutcome::Started | ToggleOutcome::Stopped => {}
            },
            KeyCode::Char('o') if ctrl => {
                let text = QUICK_RESPONSES[self.quick_response % QUICK_RESPONSES.len()];
                self.quick_response += 1;
                self.conversation.insert_quick_response(text);
            }
            KeyCode::Up => {
                self.conversation.cycle_scenario(false);
            }
            KeyCode::Down => {
                self.conversation.cycle_scenario(true);
            }
            KeyCode::Backspace => self.conversation.backspace(),
            KeyCode::Char(c) if !ctrl => self.conversation.push_char(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::{
        CANNED_RESPONSES, PhraseRecognizer, RecognitionOptions, SessionState,
    };
    use crate::words::WordType;

    fn app_on(screen: Screen) -> App {
        let settings = Settings {
            start_screen: screen,
            ..Settings::default()
        };
        App::new(&settings, SpeechCapability::Unavailable, Some(3), 1).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn tab_cycles_screens() {
        let mut app = app_on(Screen::Home);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Vocabulary);
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert_eq!(app.screen, Screen::Conversation);
    }

    #[test]
    fn vocabulary_shortcuts_drive_the_navigator() {
        let mut app = app_on(Screen::Vocabulary);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.navigator.is_revealed());
        press(&mut app, KeyCode::Right);
        assert_eq!(app.navigator.cursor(), 1);
        assert!(!app.navigator.is_revealed());
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.navigator.cursor(), FLASHCARDS.len() - 1);
    }

    #[test]
    fn marking_known_notifies_and_advances() {
        let mut app = app_on(Screen::Vocabulary);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.navigator.cursor(), 1);
        let latest = app.notifier.active().last().unwrap();
        assert_eq!(latest.message, "Word marked as known!");
        assert_eq!(latest.severity, Severity::Success);

        app.tick(3000);
        assert!(app.notifier.active().is_empty());
    }

    #[test]
    fn search_focus_captures_letters() {
        let mut app = app_on(Screen::Vocabulary);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "quick");
        assert_eq!(app.query, "quick");
        // 検索中は "k" で「覚えた」にならない
        assert_eq!(app.navigator.cursor(), 0);
        assert_eq!(app.visible_words().len(), 1);

        press(&mut app, KeyCode::Esc);
        assert!(!app.search_focused);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn category_key_filters_word_list() {
        let mut app = app_on(Screen::Vocabulary);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.categories.active(), CategoryFilter::Kind(WordType::Noun));
        assert!(app.visible_words().iter().all(|e| e.kind == WordType::Noun));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.visible_words().len(), WORD_LIST.len());
    }

    #[test]
    fn word_list_selection_reaches_past_first_page() {
        let mut app = app_on(Screen::Vocabulary);
        for _ in 0..45 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.selected_word, 55);
        assert_eq!(app.selected_entry(), Some(&WORD_LIST[55]));

        press(&mut app, KeyCode::Enter);
        let expected = format!("Playing pronunciation for \"{}\"", WORD_LIST[55].word);
        assert_eq!(app.notifier.active().last().unwrap().message, expected);
        // フラッシュカードは動かない
        assert_eq!(app.navigator.cursor(), 0);
    }

    #[test]
    fn word_list_selection_is_clamped() {
        let mut app = app_on(Screen::Vocabulary);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_word, 0);
        for _ in 0..(WORD_LIST.len() / WORD_PAGE + 2) {
            press(&mut app, KeyCode::PageDown);
        }
        assert_eq!(app.selected_word, WORD_LIST.len() - 1);

        // 絞り込みを変えると先頭に戻る
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.selected_word, 0);

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "zz-no-match");
        assert_eq!(app.selected_entry(), None);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Enter);
        assert!(app.notifier.active().is_empty());
    }

    #[test]
    fn conversation_round_trip_through_keys() {
        let mut app = app_on(Screen::Conversation);
        assert_eq!(app.conversation.transcript().len(), 3);

        type_text(&mut app, "Hi");
        app.tick(500);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.conversation.transcript().len(), 4);

        app.tick(1499);
        assert_eq!(app.conversation.transcript().len(), 4);
        app.tick(1500);
        let transcript = app.conversation.transcript();
        assert_eq!(transcript.len(), 5);
        assert!(CANNED_RESPONSES.contains(&transcript[4].text.as_str()));
        assert_eq!(app.conversation.state(), SessionState::AwaitingUserInput);
    }

    #[test]
    fn recording_without_speech_shows_error() {
        let mut app = app_on(Screen::Conversation);
        ctrl(&mut app, 'r');
        let latest = app.notifier.active().last().unwrap();
        assert_eq!(latest.severity, Severity::Error);
        assert!(!app.conversation.is_recording());
        assert_eq!(app.conversation.input(), "");
    }

    #[test]
    fn dictated_phrase_lands_in_input() {
        let settings = Settings {
            start_screen: Screen::Conversation,
            ..Settings::default()
        };
        let speech = SpeechCapability::Available(Box::new(PhraseRecognizer::new(
            RecognitionOptions::default(),
            vec!["A table for two".to_string()],
        )));
        let mut app = App::new(&settings, speech, Some(3), 1).unwrap();

        ctrl(&mut app, 'r');
        assert!(app.conversation.is_recording());
        app.tick(10);
        assert!(!app.conversation.is_recording());
        assert_eq!(app.conversation.input(), "A table for two");
        assert_eq!(app.conversation.transcript().len(), 3);
    }

    #[test]
    fn focus_loss_stops_recording() {
        let settings = Settings::default();
        let speech = SpeechCapability::Available(Box::new(PhraseRecognizer::new(
            RecognitionOptions::default(),
            vec!["hello".to_string()],
        )));
        let mut app = App::new(&settings, speech, None, 1).unwrap();
        app.switch_screen(Screen::Conversation);
        ctrl(&mut app, 'r');
        app.handle_focus_lost();
        assert!(!app.conversation.is_recording());
    }

    #[test]
    fn quick_responses_cycle() {
        let mut app = app_on(Screen::Conversation);
        ctrl(&mut app, 'o');
        assert_eq!(app.conversation.input(), QUICK_RESPONSES[0]);
        ctrl(&mut app, 'o');
        assert_eq!(app.conversation.input(), QUICK_RESPONSES[1]);
    }

    #[test]
    fn scenario_keys_switch_script() {
        let mut app = app_on(Screen::Conversation);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.conversation.scenario(), Some("airport"));
    }

    #[test]
    fn grammar_number_keys_select_tense() {
        let mut app = app_on(Screen::Grammar);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.grammar.content().key, "present-continuous");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.grammar.content().key, "present-perfect");
    }

    #[test]
    fn ctrl_d_dismisses_notification_early() {
        let mut app = app_on(Screen::Home);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.notifier.active().len(), 1);
        ctrl(&mut app, 'd');
        assert!(app.notifier.active().is_empty());
    }
}
