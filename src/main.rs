// ============================================
// src/main.rs (メインファイル)
// ============================================

use std::fs;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use tracing::info;

mod app;
mod conversation;
mod error;
mod flashcards;
mod grammar;
mod home;
mod logging;
mod notify;
mod search;
mod settings;
mod ui;
mod words;

use app::{App, Screen};
use conversation::{PhraseRecognizer, RecognitionOptions, SpeechCapability};
use settings::{Settings, default_settings_path};

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    event::{self, DisableFocusChange, EnableFocusChange, Event},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use ratatui::prelude::*;

// --------------------------------------------------
// コマンドライン引数
// --------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "fluentwiz", version, about = "English practice in the terminal")]
struct Cli {
    /// 最初に開く画面
    #[arg(short, long, value_enum)]
    screen: Option<Screen>,

    /// 会話のシナリオ (restaurant, airport)
    #[arg(long)]
    scenario: Option<String>,

    /// シャッフルと返信の乱数シード
    #[arg(long)]
    seed: Option<u64>,

    /// 設定ファイルのパス
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 音声入力の代わりに1行ずつ読み上げるファイル
    #[arg(long)]
    dictation: Option<PathBuf>,

    /// ログレベル (RUST_LOG と同じ書式)
    #[arg(long)]
    log_level: Option<String>,

    /// 現在の設定をファイルに書き出して終了
    #[arg(long)]
    write_config: bool,
}

fn speech_capability(dictation: Option<&Path>, settings: &Settings) -> Result<SpeechCapability> {
    let Some(path) = dictation else {
        return Ok(SpeechCapability::Unavailable);
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read dictation file {}", path.display()))?;
    let phrases = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect::<Vec<_>>();

    let options = RecognitionOptions {
        locale: settings.speech_locale.clone(),
        ..RecognitionOptions::default()
    };
    Ok(SpeechCapability::Available(Box::new(PhraseRecognizer::new(
        options, phrases,
    ))))
}

// --------------------------------------------------
// メイン関数 (TUIセットアップと実行ループ)
// --------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_path = logging::init(cli.log_level.as_deref());

    let mut settings = Settings::load(cli.config.as_deref());
    if let Some(screen) = cli.screen {
        settings.start_screen = screen;
    }
    if let Some(scenario) = cli.scenario.clone() {
        settings.default_scenario = scenario;
    }

    if cli.write_config {
        let path = cli
            .config
            .clone()
            .or_else(default_settings_path)
            .context("no config directory available")?;
        settings.save_to(&path)?;
        println!("settings written to {}", path.display());
        return Ok(());
    }

    let speech = speech_capability(cli.dictation.as_deref(), &settings)?;
    let mut app = App::new(&settings, speech, cli.seed, Local::now().day())?;
    info!(screen = ?settings.start_screen, log = ?log_path, "starting");

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &mut app);
    restore_terminal()?;
    result?;

    info!("bye");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?; // 代替スクリーンを使用
    stdout().execute(EnableFocusChange)?; // フォーカスが外れたら録音を止めるため
    stdout().execute(Hide)?; // カーソルを非表示
    let backend = CrosstermBackend::new(stdout());
    Ok(Terminal::new(backend)?)
}

fn restore_terminal() -> Result<()> {
    stdout().execute(Show)?; // カーソルを再表示
    stdout().execute(DisableFocusChange)?;
    stdout().execute(LeaveAlternateScreen)?; // 代替スクリーンを終了
    disable_raw_mode()?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<impl Backend>, app: &mut App) -> Result<()> {
    let start = Instant::now();

    while !app.should_quit {
        app.tick(start.elapsed().as_millis() as u64);
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::FocusLost => app.handle_focus_lost(),
                _ => {}
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_screen_and_seed() {
        let cli = Cli::parse_from(["fluentwiz", "--screen", "conversation", "--seed", "7"]);
        assert_eq!(cli.screen, Some(Screen::Conversation));
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn dictation_file_enables_speech() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("phrases.txt");
        fs::write(&path, "Hello there\n\n  A table for two  \n").unwrap();

        let speech = speech_capability(Some(&path), &Settings::default()).unwrap();
        assert!(matches!(speech, SpeechCapability::Available(_)));
        assert!(matches!(
            speech_capability(None, &Settings::default()).unwrap(),
            SpeechCapability::Unavailable
        ));
    }
}
