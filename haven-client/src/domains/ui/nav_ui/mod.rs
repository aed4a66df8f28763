//! Scroll-driven navigation bar visibility.
//!
//! The bar hides when the user scrolls down past a small threshold and
//! reappears on any upward scroll. Visual updates are coalesced to one
//! per rendered frame: the first scroll offset of a frame schedules an
//! update, later offsets in the same frame are dropped, and the frame
//! tick applies the decision.

pub mod update;

use crate::domains::ui::messages::Message as UiMessage;

pub use update::update_nav_ui;

/// Minimum offset before the bar may hide; avoids flicker near the top.
pub const HIDE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Default)]
pub struct NavBarState {
    /// Last offset applied on a frame tick, clamped to zero.
    pub last_offset: f32,
    /// Offset captured when the pending frame was scheduled.
    pub pending_offset: f32,
    /// Whether a visual update is already queued for the next frame.
    pub frame_scheduled: bool,
    pub hidden: bool,
}

impl NavBarState {
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

#[derive(Clone, Copy)]
pub enum NavMessage {
    /// The home scrollable reported a new vertical offset.
    Scrolled(f32),
    /// The next frame is being drawn; apply the pending decision.
    FrameTick,
}

impl From<NavMessage> for UiMessage {
    fn from(msg: NavMessage) -> Self {
        UiMessage::Nav(msg)
    }
}

impl NavMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Scrolled(_) => "UI::NavScrolled",
            Self::FrameTick => "UI::NavFrameTick",
        }
    }
}

impl std::fmt::Debug for NavMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scrolled(offset) => write!(f, "UI::NavScrolled({offset})"),
            Self::FrameTick => write!(f, "UI::NavFrameTick"),
        }
    }
}
