// ============================================
// src/logging.rs
// ログ出力 (画面を汚さないようにファイルへ書く)
// ============================================

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings;

const LOG_FILE: &str = "fluentwiz.log";

fn env_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// ログを初期化し、書き込み先のパスを返す。失敗してもアプリは続行する
pub fn init(level: Option<&str>) -> Option<PathBuf> {
    let path = settings::data_dir().ok()?.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(env_filter(level))
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_is_used() {
        assert_eq!(env_filter(Some("debug")).to_string(), "debug");
    }

    #[test]
    fn bad_level_falls_back_to_info() {
        assert_eq!(env_filter(Some("fluentwiz=loud")).to_string(), "info");
    }
}
