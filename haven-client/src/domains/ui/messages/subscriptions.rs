use std::time::Duration;

use iced::{Subscription, window};

use crate::common::messages::DomainMessage;
use crate::domains::ui::feedback_ui::FeedbackMessage;
use crate::domains::ui::nav_ui::NavMessage;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    let mut subscriptions = Vec::new();

    // Deliver the frame tick only while a nav update is actually pending,
    // so the bar mutates at most once per rendered frame.
    if state
        .domains
        .ui
        .state
        .nav_bar
        .as_ref()
        .is_some_and(|nav| nav.frame_scheduled)
    {
        subscriptions.push(
            window::frames().map(|_| DomainMessage::Ui(NavMessage::FrameTick.into())),
        );
    }

    if !state.domains.ui.state.notices.is_empty() {
        subscriptions.push(
            iced::time::every(Duration::from_secs(1))
                .map(|_| DomainMessage::Ui(FeedbackMessage::PruneExpired.into())),
        );
    }

    Subscription::batch(subscriptions)
}
