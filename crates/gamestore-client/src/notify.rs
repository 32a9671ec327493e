use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Display) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn success(message: impl Display) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn error(message: impl Display) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    fn new(level: NotificationLevel, message: impl Display) -> Self {
        Notification {
            level,
            message: message.to_string(),
        }
    }
}

/// Receives user facing messages emitted by store actions.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Asks the user before destructive actions.
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Info | NotificationLevel::Success => {
                tracing::info!("{}", notification.message)
            }
            NotificationLevel::Error => tracing::error!("{}", notification.message),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}
