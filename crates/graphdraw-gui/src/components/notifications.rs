use eframe::egui;
use egui_notify::{Anchor, Toast, Toasts};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
}

impl NotificationLevel {
    /// How long a toast of this level stays up.
    pub fn duration(self) -> Duration {
        match self {
            NotificationLevel::Info | NotificationLevel::Success => Duration::from_secs(3),
            NotificationLevel::Warning => Duration::from_secs(5),
        }
    }
}

/// Transient toasts for outcomes that do not need acknowledging.
///
/// Failures go through [`super::message_dialog::MessageDialog`] instead.
pub struct NotificationManager {
    toasts: Toasts,
}

impl NotificationManager {
    pub fn new() -> Self {
        let toasts = Toasts::new()
            .with_anchor(Anchor::BottomRight)
            .with_margin(egui::vec2(8.0, 32.0));
        Self { toasts }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Toast ({:?}): {}", level, message);
        let mut toast = match level {
            NotificationLevel::Info => Toast::info(message),
            NotificationLevel::Success => Toast::success(message),
            NotificationLevel::Warning => Toast::warning(message),
        };
        toast.duration(Some(level.duration()));
        self.toasts.add(toast);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Warning, message);
    }

    /// Render notifications (call once per frame)
    pub fn render(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
