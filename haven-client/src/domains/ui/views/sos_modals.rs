//! Modal dialogs for the SOS flow: coordinate confirmation and manual
//! location entry.
//!
//! Both render as an opaque scrim over the page. Only the manual modal
//! treats a click on the scrim as Cancel; the confirmation modal must be
//! dismissed through its buttons.

use iced::widget::{
    Space, button, center, column, container, mouse_area, opaque, row, text, text_input,
};
use iced::{Alignment, Element, Length};

use haven_model::Position;

use crate::common::messages::DomainMessage;
use crate::domains::alert::messages::Message as AlertMessage;
use crate::domains::ui::theme::{self, HavenTheme};

pub fn message_input_id() -> text_input::Id {
    text_input::Id::new("sos-message")
}

pub fn location_input_id() -> text_input::Id {
    text_input::Id::new("sos-location-input")
}

pub fn view_confirm_modal<'a>(
    position: Position,
    message_input: &'a str,
) -> Element<'a, DomainMessage> {
    let title = text("Send SOS alert")
        .size(20)
        .color(HavenTheme::TEXT_PRIMARY);

    let position_line = text(format!("Your position: {position}"))
        .size(13)
        .color(HavenTheme::TEXT_SUBDUED);

    let message = text_input("Add a short message (optional)", message_input)
        .id(message_input_id())
        .on_input(|value| DomainMessage::Alert(AlertMessage::ConfirmMessageChanged(value)))
        .on_submit(DomainMessage::Alert(AlertMessage::ConfirmSend))
        .padding(12)
        .size(14);

    let card = column![
        title,
        Space::with_height(4),
        position_line,
        Space::with_height(16),
        message,
        Space::with_height(16),
        action_row(
            DomainMessage::Alert(AlertMessage::Cancel),
            DomainMessage::Alert(AlertMessage::ConfirmSend),
        ),
    ]
    .width(Length::Fill);

    modal_shell(card.into(), None)
}

pub fn view_manual_modal<'a>(
    location_input: &'a str,
    message_input: &'a str,
) -> Element<'a, DomainMessage> {
    let title = text("Share your location")
        .size(20)
        .color(HavenTheme::TEXT_PRIMARY);

    let hint = text("We could not determine your position. Describe where you are.")
        .size(13)
        .color(HavenTheme::TEXT_SUBDUED);

    let location = text_input("Your location or nearby landmarks", location_input)
        .id(location_input_id())
        .on_input(|value| DomainMessage::Alert(AlertMessage::ManualLocationChanged(value)))
        .padding(12)
        .size(14);

    let message = text_input("Add a short message (optional)", message_input)
        .id(text_input::Id::new("sos-location-message"))
        .on_input(|value| DomainMessage::Alert(AlertMessage::ManualMessageChanged(value)))
        .on_submit(DomainMessage::Alert(AlertMessage::ManualSend))
        .padding(12)
        .size(14);

    let card = column![
        title,
        Space::with_height(4),
        hint,
        Space::with_height(16),
        location,
        Space::with_height(10),
        message,
        Space::with_height(16),
        action_row(
            DomainMessage::Alert(AlertMessage::Cancel),
            DomainMessage::Alert(AlertMessage::ManualSend),
        ),
    ]
    .width(Length::Fill);

    modal_shell(card.into(), Some(DomainMessage::Alert(AlertMessage::Cancel)))
}

fn action_row<'a>(on_cancel: DomainMessage, on_send: DomainMessage) -> Element<'a, DomainMessage> {
    let cancel = button(text("Cancel").size(14))
        .padding([8.0, 18.0])
        .style(theme::ghost_button)
        .on_press(on_cancel);

    let send = button(text("Send").size(14))
        .padding([8.0, 18.0])
        .style(theme::primary_button)
        .on_press(on_send);

    row![Space::with_width(Length::Fill), cancel, send]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
}

/// Wrap a modal card in an opaque scrim. A click on the scrim emits
/// `on_backdrop` when one is given; the card itself swallows its events.
fn modal_shell<'a>(
    card: Element<'a, DomainMessage>,
    on_backdrop: Option<DomainMessage>,
) -> Element<'a, DomainMessage> {
    let card = container(card)
        .width(Length::Fixed(360.0))
        .padding(20)
        .style(theme::card_container);

    let backdrop = center(opaque(card)).style(theme::scrim_container);

    let area = mouse_area(backdrop);
    let area = match on_backdrop {
        Some(message) => area.on_press(message),
        None => area,
    };

    opaque(area).into()
}
