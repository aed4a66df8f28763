pub mod update;

use std::time::{Duration, Instant};

use crate::domains::ui::messages::Message as UiMessage;

pub use update::update_feedback_ui;

pub type NoticeId = u64;

/// How long a notice stays on screen before the prune tick drops it.
pub const NOTICE_TTL: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A user-visible notification; every notice is also mirrored to the log
/// when raised.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub level: NoticeLevel,
    pub text: String,
    pub posted: Instant,
}

impl Notice {
    pub fn new(id: NoticeId, level: NoticeLevel, text: String) -> Self {
        Self {
            id,
            level,
            text,
            posted: Instant::now(),
        }
    }
}

#[derive(Clone)]
pub enum FeedbackMessage {
    Dismiss(NoticeId),
    PruneExpired,
}

impl From<FeedbackMessage> for UiMessage {
    fn from(msg: FeedbackMessage) -> Self {
        UiMessage::Feedback(msg)
    }
}

impl FeedbackMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dismiss(_) => "UI::DismissNotice",
            Self::PruneExpired => "UI::PruneExpiredNotices",
        }
    }
}

impl std::fmt::Debug for FeedbackMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dismiss(id) => write!(f, "UI::DismissNotice({id})"),
            Self::PruneExpired => write!(f, "UI::PruneExpiredNotices"),
        }
    }
}
