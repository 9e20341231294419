// ============================================
// src/error.rs
// エラー型
// ============================================

use thiserror::Error;

/// 空のデッキが渡された
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("flashcard deck is empty")]
pub struct EmptyDeckError;

/// 音声認識のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("speech recognition is already running")]
    AlreadyRunning,
}

#[derive(Debug, Error)]
pub enum FluentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),

    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error("no config directory available on this platform")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, FluentError>;
