use iced::widget::{Space, button, container, row, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::alert::messages::Message as AlertMessage;
use crate::domains::ui::theme::{self, HavenTheme};

/// Height reserved for the bar; page content is offset by this amount so
/// hiding the bar never reflows the page.
pub const NAV_BAR_HEIGHT: f32 = 52.0;

pub fn view_nav_bar<'a>() -> Element<'a, DomainMessage> {
    let brand = text("Haven").size(20).color(HavenTheme::TEXT_PRIMARY);

    let tagline = text("safety companion")
        .size(12)
        .color(HavenTheme::TEXT_SUBDUED);

    // Compact counterpart of the hero SOS control; both feed the same flow.
    let sos_shortcut = button(text("SOS").size(13))
        .padding([6.0, 14.0])
        .style(theme::sos_button)
        .on_press(DomainMessage::Alert(AlertMessage::SosPressed));

    let bar = row![
        brand,
        Space::with_width(8),
        tagline,
        Space::with_width(Length::Fill),
        sos_shortcut,
    ]
    .align_y(Alignment::Center);

    container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(NAV_BAR_HEIGHT))
        .padding([0.0, 16.0])
        .style(theme::header_container)
        .into()
}
