use crate::{
    common::messages::DomainUpdateResult,
    domains::ui::{feedback_ui, messages as ui, nav_ui},
    state::State,
};

/// Handle UI domain messages
pub fn update_ui(state: &mut State, message: ui::Message) -> DomainUpdateResult {
    match message {
        ui::Message::Nav(msg) => nav_ui::update_nav_ui(state, msg),
        ui::Message::Feedback(msg) => feedback_ui::update_feedback_ui(state, msg),
    }
}
