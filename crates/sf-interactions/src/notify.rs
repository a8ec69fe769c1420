//! Toast notifications.
//!
//! [`Notifier`] is the one service every controller shares. The browser
//! implementation keeps a single lazily created container per page and drives
//! the [`ToastSchedule`] with timers; tests record what was shown.

use std::time::Duration;

use crate::config::ToastTimings;
use crate::error::StorefrontError;

pub const CONTAINER_ID: &str = "toast-container";
pub const CONTAINER_CLASS: &str = "toast-container";
pub const SHOW_CLASS: &str = "toast--show";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    /// Lenient parse for values coming from page scripts; unknown kinds are info.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("success") => ToastKind::Success,
            Some("error") => ToastKind::Error,
            _ => ToastKind::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    /// `None` for an empty message: nothing is shown.
    pub fn new(message: &str, kind: ToastKind) -> Option<Self> {
        if message.is_empty() {
            return None;
        }
        Some(Self {
            message: message.to_owned(),
            kind,
        })
    }

    pub fn class_name(&self) -> String {
        format!("toast toast--{}", self.kind.as_str())
    }
}

/// Offsets from insertion at which a toast changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSchedule {
    pub show_after: Duration,
    pub hide_after: Duration,
    pub remove_after: Duration,
}

impl From<ToastTimings> for ToastSchedule {
    fn from(t: ToastTimings) -> Self {
        let show_after = Duration::from_millis(u64::from(t.enter_delay_ms));
        let hide_after = Duration::from_millis(u64::from(t.display_ms));
        Self {
            show_after,
            hide_after,
            remove_after: hide_after + Duration::from_millis(u64::from(t.exit_ms)),
        }
    }
}

pub trait Notifier {
    fn notify(&self, message: &str, kind: ToastKind);
}

/// Shows the error of a failed interaction and hands the result back.
pub fn report<T>(notifier: &dyn Notifier, result: Result<T, StorefrontError>) -> Result<T, StorefrontError> {
    if let Err(err) = &result {
        notifier.notify(err.message(), ToastKind::Error);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_builds_nothing() {
        assert!(Toast::new("", ToastKind::Success).is_none());
    }

    #[test]
    fn class_follows_kind() {
        let toast = Toast::new("Tersimpan", ToastKind::from_name(Some("success"))).unwrap();
        assert_eq!(toast.class_name(), "toast toast--success");
        let toast = Toast::new("?", ToastKind::from_name(Some("warning"))).unwrap();
        assert_eq!(toast.class_name(), "toast toast--info");
        assert_eq!(ToastKind::from_name(None), ToastKind::Info);
    }

    #[test]
    fn default_schedule() {
        let s = ToastSchedule::from(ToastTimings::default());
        assert_eq!(s.show_after, Duration::from_millis(10));
        assert_eq!(s.hide_after, Duration::from_millis(3_000));
        assert_eq!(s.remove_after, Duration::from_millis(3_300));
    }
}
