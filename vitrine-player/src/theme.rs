use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container},
};

/// Light storefront palette with a navy navigation accent.
#[derive(Debug, Clone, Copy)]
pub struct StorefrontTheme;

impl StorefrontTheme {
    pub const BACKGROUND: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const CARD_BG: Color = Color::from_rgb(0.976, 0.98, 0.984); // #F9FAFB
    pub const BORDER_COLOR: Color = Color::from_rgb(0.898, 0.906, 0.922); // #E5E7EB
    pub const IMAGE_PLACEHOLDER: Color = Color::from_rgb(0.8, 0.8, 0.8); // #CCCCCC

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1F2937
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.294, 0.333, 0.388); // #4B5563

    pub const ACCENT: Color = Color::from_rgb(0.145, 0.388, 0.922); // #2563EB
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.114, 0.306, 0.847); // #1D4ED8
    pub const NAV: Color = Color::from_rgb(0.173, 0.294, 0.494); // #2C4B7E

    pub const SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.45);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT;

        Theme::custom("Vitrine Light", palette)
    }
}

/// `color` with its alpha scaled by `opacity`.
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

#[derive(Debug)]
pub enum Container {
    Card,
    ActiveCard,
    ImagePlaceholder,
    Modal,
    ModalScrim,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Card => |_| container::Style {
                text_color: Some(StorefrontTheme::TEXT_PRIMARY),
                background: None,
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
            Container::ActiveCard => |_| container::Style {
                text_color: Some(StorefrontTheme::TEXT_PRIMARY),
                background: Some(Background::Color(StorefrontTheme::CARD_BG)),
                border: Border {
                    color: StorefrontTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 16.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
                    offset: iced::Vector::new(0.0, 8.0),
                    blur_radius: 24.0,
                },
                snap: false,
            },
            Container::ImagePlaceholder => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(
                    StorefrontTheme::IMAGE_PLACEHOLDER,
                )),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Container::Modal => |_| container::Style {
                text_color: Some(StorefrontTheme::TEXT_PRIMARY),
                background: Some(Background::Color(StorefrontTheme::BACKGROUND)),
                border: Border {
                    color: StorefrontTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow {
                    color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
                    offset: iced::Vector::new(0.0, 12.0),
                    blur_radius: 32.0,
                },
                snap: false,
            },
            Container::ModalScrim => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(StorefrontTheme::SCRIM)),
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
        }
    }
}

#[derive(Debug)]
pub enum Button {
    /// Rounded "Add to cart" pill.
    Pill,
    /// Outlined circular previous button.
    NavOutline,
    /// Filled circular next button.
    NavFilled,
    Text,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Pill => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        StorefrontTheme::ACCENT_HOVER
                    }
                    _ => StorefrontTheme::ACCENT,
                };

                button::Style {
                    text_color: Color::WHITE,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 0.0,
                        radius: 999.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::NavOutline => |_, status| {
                let background = match status {
                    button::Status::Hovered => {
                        Color::from_rgba(0.173, 0.294, 0.494, 0.08)
                    }
                    _ => Color::TRANSPARENT,
                };

                button::Style {
                    text_color: StorefrontTheme::NAV,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: StorefrontTheme::NAV,
                        width: 2.0,
                        radius: 999.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::NavFilled => |_, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        faded(StorefrontTheme::NAV, 0.85)
                    }
                    _ => StorefrontTheme::NAV,
                };

                button::Style {
                    text_color: Color::WHITE,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: StorefrontTheme::NAV,
                        width: 2.0,
                        radius: 999.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::Text => |_, status| button::Style {
                text_color: match status {
                    button::Status::Hovered => StorefrontTheme::ACCENT_HOVER,
                    _ => StorefrontTheme::ACCENT,
                },
                background: None,
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
        }
    }
}
