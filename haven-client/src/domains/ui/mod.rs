pub mod feedback_ui;
pub mod messages;
pub mod nav_ui;
pub mod theme;
pub mod update;
pub mod views;

use feedback_ui::{Notice, NoticeId, NoticeLevel};
use nav_ui::NavBarState;

#[derive(Debug, Default)]
pub struct UiDomain {
    pub state: UiState,
}

impl UiDomain {
    pub fn new() -> Self {
        Self {
            state: UiState::new(),
        }
    }
}

#[derive(Debug)]
pub struct UiState {
    /// Scroll-driven navigation bar; `None` when the shell renders
    /// without one, in which case nav messages are silent no-ops.
    pub nav_bar: Option<NavBarState>,
    /// Active feedback notices, newest last.
    pub notices: Vec<Notice>,
    next_notice_id: NoticeId,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            nav_bar: Some(NavBarState::default()),
            notices: Vec::new(),
            next_notice_id: 0,
        }
    }

    /// Raise a notice and mirror it to the log.
    pub fn push_notice(&mut self, level: NoticeLevel, text: String) {
        match level {
            NoticeLevel::Info | NoticeLevel::Success => log::info!("[Notice] {text}"),
            NoticeLevel::Warning => log::warn!("[Notice] {text}"),
            NoticeLevel::Error => log::error!("[Notice] {text}"),
        }

        self.next_notice_id += 1;
        self.notices.push(Notice::new(self.next_notice_id, level, text));
    }

    pub fn dismiss_notice(&mut self, id: NoticeId) {
        self.notices.retain(|notice| notice.id != id);
    }

    pub fn prune_expired_notices(&mut self) {
        self.notices
            .retain(|notice| notice.posted.elapsed() < feedback_ui::NOTICE_TTL);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
