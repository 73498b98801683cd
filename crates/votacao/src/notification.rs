//! Ephemeral notification banner state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Suffix of the `toast--*` css modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }
}

/// Holds at most one notification. A push replaces whatever is shown.
///
/// Each page owns its own slot; nothing here is global.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
}

impl NotificationSlot {
    /// Replaces the current notification. Blank messages are dropped so the
    /// banner never shows an empty toast; returns whether the slot changed.
    pub fn push(&mut self, notification: Notification) -> bool {
        if notification.message.trim().is_empty() {
            return false;
        }
        self.current = Some(notification);
        true
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}
