// ============================================
// src/settings.rs
// 設定ファイルの構造と読み書きロジック
// ============================================

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::app::Screen;
use crate::conversation::{DEFAULT_RESPONSE_DELAY_MS, DEFAULT_SCENARIO};
use crate::error::{FluentError, Result};
use crate::home::TypewriterTiming;
use crate::notify::DEFAULT_NOTIFICATION_MS;

const SETTINGS_FILE: &str = "settings.json";

/// ユーザー設定 (足りない項目は既定値で埋める)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub start_screen: Screen,
    pub default_scenario: String,
    /// AIが返信するまでの待ち時間
    pub response_delay_ms: u64,
    pub notification_ms: u64,
    pub cancel_pending_on_switch: bool,
    pub speech_locale: String,
    pub typewriter: TypewriterTiming,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_screen: Screen::Home,
            default_scenario: DEFAULT_SCENARIO.to_string(),
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
            notification_ms: DEFAULT_NOTIFICATION_MS,
            cancel_pending_on_switch: true,
            speech_locale: "en-US".to_string(),
            typewriter: TypewriterTiming::default(),
        }
    }
}

// MARK:OSごとの保存先
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "fluentwiz", "FluentWiz")
}

/// 設定ファイルの既定パス
pub fn default_settings_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
}

/// ログなどを置くディレクトリ (なければ作る)
pub fn data_dir() -> Result<PathBuf> {
    let dirs = project_dirs().ok_or(FluentError::NoConfigDir)?;
    let dir = dirs.data_dir().to_path_buf();
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl Settings {
    /// MARK:ファイルから読み込む (エラーはそのまま返す)
    pub fn load_from(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// 読み込めなければ既定値を使う
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_settings_path() {
                Some(path) => path,
                None => return Self::default(),
            },
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                info!(path = %path.display(), "settings loaded");
                settings
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read settings, using defaults");
                Self::default()
            }
        }
    }

    /// MARK:JSONで保存する
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(Some(&dir.path().join("nope.json")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);

        let settings = Settings {
            start_screen: Screen::Conversation,
            default_scenario: "airport".to_string(),
            cancel_pending_on_switch: false,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_is_filled_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{ "response_delay_ms": 250, "typewriter": { "type_speed_ms": 80 } }"#)
            .unwrap();

        let settings = Settings::load(Some(&path));
        assert_eq!(settings.response_delay_ms, 250);
        assert_eq!(settings.typewriter.type_speed_ms, 80);
        assert_eq!(settings.typewriter.back_delay_ms, 2000);
        assert_eq!(settings.default_scenario, "restaurant");
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Settings::load_from(&path), Err(FluentError::Json(_))));
        assert_eq!(Settings::load(Some(&path)), Settings::default());
    }
}
