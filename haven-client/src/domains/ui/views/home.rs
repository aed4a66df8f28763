use iced::widget::{Space, button, column, container, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::alert::flow::SosFlow;
use crate::domains::alert::messages::Message as AlertMessage;
use crate::domains::ui::nav_ui::NavMessage;
use crate::domains::ui::theme::{self, HavenTheme};
use crate::domains::ui::views::nav_bar::NAV_BAR_HEIGHT;
use crate::state::State;

pub fn view_home(state: &State) -> Element<'_, DomainMessage> {
    let status_line = match &state.domains.alert.state.flow {
        SosFlow::Locating => "Getting your position...",
        SosFlow::Submitting { .. } => "Sending your alert...",
        _ => "One press alerts the response desk with your position.",
    };

    let hero = column![
        text("Are you in danger?")
            .size(26)
            .color(HavenTheme::TEXT_PRIMARY),
        Space::with_height(6),
        text(status_line).size(14).color(HavenTheme::TEXT_SUBDUED),
        Space::with_height(24),
        button(text("SOS").size(44))
            .padding([36.0, 48.0])
            .style(theme::sos_button)
            .on_press(DomainMessage::Alert(AlertMessage::SosPressed)),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let how_it_works = section(
        "What happens when you press SOS",
        [
            "We look up your position so responders know where to go.",
            "You confirm before anything is sent, and can add a short note.",
            "If positioning fails, you can describe where you are instead.",
            "Your alert goes to the response desk immediately after you confirm.",
        ],
    );

    let stay_safe = section(
        "While you wait for help",
        [
            "Stay where you are if it is safe to do so.",
            "Keep your phone charged and close to you.",
            "Move to an open, well-lit area if you can.",
            "Tell someone nearby that help is on the way.",
        ],
    );

    let content = column![
        Space::with_height(NAV_BAR_HEIGHT + 28.0),
        hero,
        Space::with_height(36),
        how_it_works,
        Space::with_height(24),
        stay_safe,
        Space::with_height(48),
    ]
    .padding([0.0, 24.0])
    .width(Length::Fill);

    let page = scrollable(content)
        .on_scroll(|viewport| {
            DomainMessage::Ui(NavMessage::Scrolled(viewport.absolute_offset().y).into())
        })
        .width(Length::Fill)
        .height(Length::Fill);

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::page_container)
        .into()
}

fn section<'a, const N: usize>(
    title: &'a str,
    lines: [&'a str; N],
) -> Element<'a, DomainMessage> {
    let mut body = column![
        text(title).size(17).color(HavenTheme::TEXT_PRIMARY),
        Space::with_height(10),
    ];

    for line in lines {
        body = body.push(
            text(format!("\u{2022}  {line}"))
                .size(14)
                .color(HavenTheme::TEXT_SUBDUED),
        );
        body = body.push(Space::with_height(6));
    }

    container(body)
        .width(Length::Fill)
        .padding(16)
        .style(theme::card_container)
        .into()
}
