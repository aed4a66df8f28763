pub mod subscriptions;

use crate::domains::ui::feedback_ui::FeedbackMessage;
use crate::domains::ui::nav_ui::NavMessage;

#[derive(Clone)]
pub enum Message {
    /// Navigation bar visibility
    Nav(NavMessage),
    /// Feedback notices
    Feedback(FeedbackMessage),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nav(msg) => msg.name(),
            Self::Feedback(msg) => msg.name(),
        }
    }
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nav(msg) => write!(f, "{msg:?}"),
            Self::Feedback(msg) => write!(f, "{msg:?}"),
        }
    }
}
