use serde::{Deserialize, Serialize};

// How long a success toast stays on screen before dismissing itself.
pub const SUCCESS_DISMISS_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Error,
}

// A transient toast. Success notices dismiss themselves; error notices stay
// until the user dismisses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            auto_dismiss_ms: Some(SUCCESS_DISMISS_MS),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            auto_dismiss_ms: None,
        }
    }

    pub fn level_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.auto_dismiss_ms.is_none()
    }
}
