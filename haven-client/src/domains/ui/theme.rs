//! Shared colors and widget styles for the Haven shell.

use iced::widget::{button, container};
use iced::{Border, Color, Shadow, Theme, Vector};

use crate::domains::ui::feedback_ui::NoticeLevel;

pub struct HavenTheme;

impl HavenTheme {
    pub const BACKGROUND: Color = Color {
        r: 0.07,
        g: 0.08,
        b: 0.10,
        a: 1.0,
    };
    pub const SURFACE: Color = Color {
        r: 0.13,
        g: 0.14,
        b: 0.17,
        a: 1.0,
    };
    pub const HEADER: Color = Color {
        r: 0.10,
        g: 0.11,
        b: 0.14,
        a: 0.98,
    };
    pub const SCRIM: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.55,
    };
    pub const TEXT_PRIMARY: Color = Color {
        r: 0.93,
        g: 0.93,
        b: 0.95,
        a: 1.0,
    };
    pub const TEXT_SUBDUED: Color = Color {
        r: 0.62,
        g: 0.64,
        b: 0.68,
        a: 1.0,
    };
    pub const ALERT: Color = Color {
        r: 0.80,
        g: 0.15,
        b: 0.17,
        a: 1.0,
    };
    pub const ALERT_BRIGHT: Color = Color {
        r: 0.92,
        g: 0.24,
        b: 0.26,
        a: 1.0,
    };
    pub const BORDER: Color = Color {
        r: 0.28,
        g: 0.30,
        b: 0.34,
        a: 1.0,
    };
    pub const INFO: Color = Color {
        r: 0.35,
        g: 0.62,
        b: 0.90,
        a: 1.0,
    };
    pub const SUCCESS: Color = Color {
        r: 0.33,
        g: 0.72,
        b: 0.42,
        a: 1.0,
    };
    pub const WARNING: Color = Color {
        r: 0.88,
        g: 0.72,
        b: 0.25,
        a: 1.0,
    };
    pub const ERROR: Color = Color {
        r: 0.88,
        g: 0.30,
        b: 0.30,
        a: 1.0,
    };
}

pub fn notice_accent(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => HavenTheme::INFO,
        NoticeLevel::Success => HavenTheme::SUCCESS,
        NoticeLevel::Warning => HavenTheme::WARNING,
        NoticeLevel::Error => HavenTheme::ERROR,
    }
}

pub fn header_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(HavenTheme::HEADER.into()),
        border: Border {
            color: HavenTheme::BORDER,
            width: 0.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn page_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(HavenTheme::BACKGROUND.into()),
        text_color: Some(HavenTheme::TEXT_PRIMARY),
        ..Default::default()
    }
}

pub fn card_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(HavenTheme::SURFACE.into()),
        text_color: Some(HavenTheme::TEXT_PRIMARY),
        border: Border {
            color: HavenTheme::BORDER,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.35,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 3.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

pub fn scrim_container(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(HavenTheme::SCRIM.into()),
        ..Default::default()
    }
}

pub fn sos_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => HavenTheme::ALERT_BRIGHT,
        _ => HavenTheme::ALERT,
    };
    button::Style {
        background: Some(background.into()),
        text_color: HavenTheme::TEXT_PRIMARY,
        border: Border {
            color: HavenTheme::ALERT_BRIGHT,
            width: 1.0,
            radius: 999.0.into(),
        },
        ..Default::default()
    }
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => HavenTheme::ALERT_BRIGHT,
        _ => HavenTheme::ALERT,
    };
    button::Style {
        background: Some(background.into()),
        text_color: HavenTheme::TEXT_PRIMARY,
        border: Border {
            color: HavenTheme::BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => HavenTheme::TEXT_PRIMARY,
        _ => HavenTheme::TEXT_SUBDUED,
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}
