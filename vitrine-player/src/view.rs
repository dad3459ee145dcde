use std::time::Instant;

use iced::{
    Alignment, Element, Length,
    widget::{Space, button, column, container, row, text},
};

use crate::carousel;
use crate::dialog::{self, ButtonTrigger};
use crate::messages::Message;
use crate::state::State;
use crate::theme::{self, StorefrontTheme};

pub fn view(state: &State) -> Element<'_, Message> {
    let toggle_label = if state.is_mounted() {
        "Unmount carousel"
    } else {
        "Mount carousel"
    };

    let header = container(
        row![
            text("Vitrine").size(28).color(StorefrontTheme::TEXT_PRIMARY),
            Space::new().width(Length::Fill),
            button(text(toggle_label))
                .style(theme::Button::Text.style())
                .on_press(Message::ToggleMounted),
        ]
        .align_y(Alignment::Center),
    )
    .padding([0, 24]);

    let body: Element<'_, Message> = match &state.carousel {
        Some(carousel) => carousel::view::view(
            carousel,
            &state.catalog,
            &ButtonTrigger,
            Instant::now(),
        ),
        None => container(
            text("The carousel is unmounted.")
                .color(StorefrontTheme::TEXT_SECONDARY),
        )
        .center_x(Length::Fill)
        .into(),
    };

    let content = column![header, body]
        .spacing(32)
        .padding([24, 0])
        .width(Length::Fill)
        .height(Length::Fill);

    match &state.dialog {
        Some(request) => dialog::modal(content, request),
        None => content.into(),
    }
}
