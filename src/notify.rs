// ============================================
// src/notify.rs
// 画面右上に出る一時的な通知
// ============================================

use tracing::info;

pub const DEFAULT_NOTIFICATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub expires_at_ms: u64,
}

/// 表示中の通知 (古い順)
#[derive(Debug, Clone)]
pub struct Notifier {
    active: Vec<Notification>,
    lifetime_ms: u64,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_MS)
    }
}

impl Notifier {
    pub fn new(lifetime_ms: u64) -> Self {
        Self {
            active: Vec::new(),
            lifetime_ms,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now_ms: u64) {
        let message = message.into();
        info!(?severity, %message, "notification");

        self.active.push(Notification {
            message,
            severity,
            expires_at_ms: now_ms + self.lifetime_ms,
        });
    }

    /// 期限切れの通知を消す
    pub fn tick(&mut self, now_ms: u64) {
        self.active.retain(|n| n.expires_at_ms > now_ms);
    }

    /// 一番新しい通知を手動で閉じる
    pub fn dismiss_latest(&mut self) -> Option<Notification> {
        self.active.pop()
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_lifetime() {
        let mut notifier = Notifier::default();
        notifier.notify("Playing audio...", Severity::Info, 100);

        notifier.tick(3099);
        assert_eq!(notifier.active().len(), 1);
        notifier.tick(3100);
        assert!(notifier.active().is_empty());
    }

    #[test]
    fn dismiss_latest_removes_newest_first() {
        let mut notifier = Notifier::default();
        notifier.notify("first", Severity::Info, 0);
        notifier.notify("second", Severity::Error, 0);

        let dismissed = notifier.dismiss_latest().unwrap();
        assert_eq!(dismissed.message, "second");
        assert_eq!(notifier.active().last().unwrap().message, "first");
    }

    #[test]
    fn custom_lifetime_is_respected() {
        let mut notifier = Notifier::new(10);
        notifier.notify("short", Severity::Warning, 5);
        assert_eq!(notifier.active()[0].expires_at_ms, 15);
        notifier.tick(15);
        assert!(notifier.active().is_empty());
    }
}
