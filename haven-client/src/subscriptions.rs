//! Root-level subscription composition

use iced::Subscription;

use crate::common::messages::DomainMessage;
use crate::state::State;

/// Composes all domain subscriptions into a single batch
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    Subscription::batch([
        // UI domain subscriptions (nav frame ticks, notice expiry)
        crate::domains::ui::messages::subscriptions::subscription(state),
    ])
}
