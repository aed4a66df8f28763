//! Root-level view composition
//!
//! Layers, bottom to top: the home page, the navigation bar (only while
//! visible), any active SOS modal, and the notice overlay.

use iced::widget::Stack;
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::alert::flow::SosFlow;
use crate::domains::ui::views::{home, nav_bar, notice_overlay, sos_modals};
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let mut layers = Stack::new()
        .push(home::view_home(state))
        .width(Length::Fill)
        .height(Length::Fill);

    if state
        .domains
        .ui
        .state
        .nav_bar
        .as_ref()
        .is_some_and(|nav| nav.is_visible())
    {
        layers = layers.push(nav_bar::view_nav_bar());
    }

    match &state.domains.alert.state.flow {
        SosFlow::Confirming {
            position,
            message_input,
        } => {
            layers = layers.push(sos_modals::view_confirm_modal(*position, message_input));
        }
        SosFlow::ManualEntry {
            location_input,
            message_input,
        } => {
            layers = layers.push(sos_modals::view_manual_modal(location_input, message_input));
        }
        _ => {}
    }

    if !state.domains.ui.state.notices.is_empty() {
        layers = layers.push(notice_overlay::view_notice_overlay(state));
    }

    layers.into()
}
