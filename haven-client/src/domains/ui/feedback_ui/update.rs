use iced::Task;

use crate::{
    common::messages::DomainUpdateResult, domains::ui::feedback_ui::FeedbackMessage,
    state::State,
};

pub fn update_feedback_ui(state: &mut State, message: FeedbackMessage) -> DomainUpdateResult {
    match message {
        FeedbackMessage::Dismiss(id) => {
            state.domains.ui.state.dismiss_notice(id);
        }
        FeedbackMessage::PruneExpired => {
            state.domains.ui.state.prune_expired_notices();
        }
    }
    DomainUpdateResult::task(Task::none())
}
