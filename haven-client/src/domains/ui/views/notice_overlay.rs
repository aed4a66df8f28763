//! Notice overlay view
//!
//! Renders feedback notices stacked in the top-right corner, above every
//! other layer.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Length, Padding};

use crate::common::messages::DomainMessage;
use crate::domains::ui::feedback_ui::{FeedbackMessage, Notice};
use crate::domains::ui::theme::{self, HavenTheme};
use crate::state::State;

pub fn view_notice_overlay(state: &State) -> Element<'_, DomainMessage> {
    let notices = &state.domains.ui.state.notices;

    let cards: Vec<Element<'_, DomainMessage>> =
        notices.iter().map(view_single_notice).collect();

    container(column(cards).spacing(8).width(Length::Shrink))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: 64.0,
            right: 16.0,
            bottom: 16.0,
            left: 16.0,
        })
        .align_x(Alignment::End)
        .align_y(Alignment::Start)
        .into()
}

fn view_single_notice(notice: &Notice) -> Element<'_, DomainMessage> {
    let accent = theme::notice_accent(notice.level);

    let dismiss = button(text("\u{00d7}").size(14))
        .padding(4)
        .style(theme::ghost_button)
        .on_press(DomainMessage::Ui(FeedbackMessage::Dismiss(notice.id).into()));

    let content = row![
        text(&notice.text).size(13).color(HavenTheme::TEXT_PRIMARY),
        Space::with_width(12),
        dismiss,
    ]
    .align_y(Alignment::Center);

    container(content)
        .padding([8.0, 12.0])
        .style(move |_theme| iced::widget::container::Style {
            background: Some(HavenTheme::SURFACE.into()),
            border: iced::Border {
                color: accent,
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: iced::Shadow {
                color: iced::Color {
                    a: 0.3,
                    ..iced::Color::BLACK
                },
                offset: iced::Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            ..Default::default()
        })
        .into()
}
