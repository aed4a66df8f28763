use iced::{Settings, Size, Theme};

use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the Haven application with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    iced::application("Haven", update::update, view::view)
        .settings(default_settings())
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .window(iced::window::Settings {
            size: Size::new(460.0, 780.0),
            resizable: true,
            decorations: true,
            ..Default::default()
        })
        .run_with(move || bootstrap::runtime_boot(&config))
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("haven-client".to_string());
    settings.antialiasing = true;
    settings
}

fn app_theme(_: &State) -> Theme {
    Theme::Dark
}
