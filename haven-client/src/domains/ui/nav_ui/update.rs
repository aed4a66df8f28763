use iced::Task;

use crate::{
    common::messages::DomainUpdateResult,
    domains::ui::nav_ui::{HIDE_THRESHOLD, NavMessage},
    state::State,
};

pub fn update_nav_ui(state: &mut State, message: NavMessage) -> DomainUpdateResult {
    let Some(nav) = state.domains.ui.state.nav_bar.as_mut() else {
        // No bar in this shell; nothing to drive.
        return DomainUpdateResult::task(Task::none());
    };

    match message {
        NavMessage::Scrolled(offset) => {
            if !nav.frame_scheduled {
                nav.pending_offset = offset;
                nav.frame_scheduled = true;
            }
            DomainUpdateResult::task(Task::none())
        }
        NavMessage::FrameTick => {
            if nav.frame_scheduled {
                nav.hidden = nav.pending_offset > nav.last_offset
                    && nav.pending_offset > HIDE_THRESHOLD;
                nav.last_offset = nav.pending_offset.max(0.0);
                nav.frame_scheduled = false;
            }
            DomainUpdateResult::task(Task::none())
        }
    }
}
