use serde::Serialize;

/// Toasts auto-hide after this many milliseconds.
pub const TOAST_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

/// Transient user feedback attached to write-path responses. The
/// client shows it and hides it after the fixed duration.
#[derive(Debug, Clone, Serialize)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub duration_ms: u32,
}

impl Toast {
    fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            duration_ms: TOAST_DURATION_MS,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }
}
