// SPDX-License-Identifier: MPL-2.0
//! Toast data model: identity, severity, and deferred message resolution.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Process-unique handle for one toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Mints the next id from a process-wide counter.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives both the accent color and how long a toast stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// An operation finished as expected.
    #[default]
    Success,
    /// Neutral status update.
    Info,
    /// Something was skipped or degraded, but work continued.
    Warning,
    /// A failure the merchant has to acknowledge.
    Error,
}

impl Severity {
    /// Accent color shown on the toast's edge bar and icon.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Self::Success => palette::SUCCESS_500,
            Self::Info => palette::INFO_500,
            Self::Warning => palette::WARNING_500,
            Self::Error => palette::ERROR_500,
        }
    }

    /// How long a toast of this severity stays on screen by itself.
    ///
    /// Errors return `None`: they stay until dismissed.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Self::Success | Self::Info => Some(Duration::from_secs(3)),
            Self::Warning => Some(Duration::from_secs(5)),
            Self::Error => None,
        }
    }
}

/// A toast message queued for display.
///
/// The message is stored as an i18n key plus interpolation arguments and only
/// resolved to text at render time, so a locale change mid-flight never shows
/// stale wording.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
}

impl Notification {
    /// Builds a toast carrying the given severity and message key.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    /// Shorthand for a [`Severity::Success`] toast.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Shorthand for a [`Severity::Info`] toast.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Shorthand for a [`Severity::Warning`] toast.
    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    /// Shorthand for a [`Severity::Error`] toast.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Attaches one interpolation argument, builder style.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The unresolved i18n key of this toast's message.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Arguments the key is interpolated with on resolution.
    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Resolves the message to display text for the active locale.
    #[must_use]
    pub fn resolve(&self, i18n: &I18n) -> String {
        if self.message_args.is_empty() {
            return i18n.tr(&self.message_key);
        }

        let args: Vec<(&str, &str)> = self
            .message_args
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        i18n.tr_with_args(&self.message_key, &args)
    }

    /// Creation timestamp, the reference point for expiry.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns whether this notification should auto-dismiss as of `now`.
    ///
    /// Taking the clock as a parameter keeps expiry logic testable without
    /// sleeping in tests.
    #[must_use]
    pub fn should_auto_dismiss_at(&self, now: Instant) -> bool {
        match self.severity.auto_dismiss_duration() {
            Some(lifetime) => now.saturating_duration_since(self.created_at) >= lifetime,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_toast_gets_its_own_id() {
        let first = Notification::success("toast");
        let second = Notification::success("toast");
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn accent_colors_differ_per_severity() {
        let all = [
            Severity::Success,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn only_errors_lack_a_lifetime() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        assert!(Severity::Success.auto_dismiss_duration().is_some());
        assert!(Severity::Info.auto_dismiss_duration().is_some());
        assert!(Severity::Warning.auto_dismiss_duration().is_some());
    }

    #[test]
    fn warnings_outlive_successes() {
        let short = Severity::Success.auto_dismiss_duration().unwrap();
        let long = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(long > short);
    }

    #[test]
    fn with_arg_accumulates_in_order() {
        let toast = Notification::error("upload-failed")
            .with_arg("filename", "shoe.png")
            .with_arg("size", "1024");

        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "upload-failed");
        assert_eq!(toast.message_args()[0].0, "filename");
        assert_eq!(toast.message_args()[1].1, "1024");
    }

    #[test]
    fn shorthand_constructors_pick_their_severity() {
        assert_eq!(Notification::success("k").severity(), Severity::Success);
        assert_eq!(Notification::info("k").severity(), Severity::Info);
        assert_eq!(Notification::warning("k").severity(), Severity::Warning);
        assert_eq!(Notification::error("k").severity(), Severity::Error);
    }

    #[test]
    fn expiry_follows_the_supplied_clock() {
        let toast = Notification::success("toast");
        let born = toast.created_at();

        assert!(!toast.should_auto_dismiss_at(born));
        assert!(!toast.should_auto_dismiss_at(born + Duration::from_secs(2)));
        assert!(toast.should_auto_dismiss_at(born + Duration::from_secs(3)));
    }

    #[test]
    fn errors_survive_any_amount_of_time() {
        let toast = Notification::error("toast");
        let born = toast.created_at();

        assert!(!toast.should_auto_dismiss_at(born + Duration::from_secs(3600)));
    }

    #[test]
    fn resolve_interpolates_arguments() {
        let i18n = I18n::default();

        let plain = Notification::info("gallery-empty-title");
        assert!(!plain.resolve(&i18n).starts_with("MISSING:"));

        let with_arg =
            Notification::warning("notification-import-rejected").with_arg("file", "cat.gif");
        assert!(with_arg.resolve(&i18n).contains("cat.gif"));
    }
}
