//! Transient user-facing notifications ("toasts").
//!
//! DESIGN
//! ======
//! Failures are handled where they occur and end up here as a short message;
//! nothing is rethrown to a global boundary.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Upper bound on simultaneously visible notices; the oldest is dropped.
pub const MAX_VISIBLE_NOTICES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: String,
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

/// Queue of visible notices, newest last.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
}

impl NoticeState {
    /// Add a notice, returning its id so the caller can schedule dismissal.
    pub fn push(&mut self, notice: Notice) -> String {
        let id = notice.id.clone();
        self.items.push(notice);
        if self.items.len() > MAX_VISIBLE_NOTICES {
            let overflow = self.items.len() - MAX_VISIBLE_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }
}
