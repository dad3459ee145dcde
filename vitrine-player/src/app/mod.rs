use std::sync::Arc;

use iced::{Application, Font, Program as IcedProgram, Settings, Theme};

use crate::messages::Message;
use crate::state::State;
use crate::theme::StorefrontTheme;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the Vitrine application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<impl IcedProgram<State = State, Message = Message, Theme = Theme>>
{
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Vitrine")
    .subscription(subscriptions::subscription)
    .font(lucide_icons::lucide_font_bytes())
    .theme(app_theme)
    .window(iced::window::Settings {
        size: iced::Size::new(1280.0, 640.0),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("vitrine-player".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::DEFAULT;
    settings
}

fn app_theme(_: &State) -> Theme {
    StorefrontTheme::theme()
}
