//! Card strip rendering.
//!
//! Card sizes come from the same [`CardMetrics`] the controller measures
//! with, so what is drawn and what is hit-tested or centered always agree.

use std::time::Instant;

use iced::{
    Alignment, ContentFit, Element, Length,
    widget::{
        Space, button, column, container, image, mouse_area, row, scrollable,
        text,
    },
};
use lucide_icons::Icon;
use vitrine_core::{CardMetrics, ImageSlot};
use vitrine_model::Product;

use super::{CarouselState, messages::CarouselMessage};
use crate::catalog::Catalog;
use crate::dialog::{DialogRequest, DialogTrigger};
use crate::messages::Message;
use crate::theme::{self, StorefrontTheme, faded};

pub fn view<'a, T: DialogTrigger>(
    state: &'a CarouselState,
    catalog: &'a Catalog,
    trigger: &T,
    now: Instant,
) -> Element<'a, Message> {
    if catalog.is_empty() || !state.is_mounted() {
        return Space::new().into();
    }

    let metrics = state.controller.settings().metrics;

    let mut strip = row![]
        .spacing(metrics.spacing)
        .padding([0.0, metrics.edge_padding])
        .align_y(Alignment::Center);

    for (index, product) in catalog.products().iter().enumerate() {
        let emphasis = state.controller.emphasis(index, now);
        let slot = state.images.get(index);
        strip = strip.push(card(product, slot, emphasis, &metrics, trigger));
    }

    let scroll = scrollable(strip)
        .id(state.scrollable_id.clone())
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        ))
        .on_scroll(|viewport| {
            Message::Carousel(CarouselMessage::Scrolled(viewport))
        })
        .width(Length::Fill)
        .height(Length::Fixed(metrics.card_height(1.0)));

    let strip_area = mouse_area(scroll)
        .on_press(Message::Carousel(CarouselMessage::PointerPressed))
        .on_release(Message::Carousel(CarouselMessage::PointerReleased))
        .on_move(|point| {
            Message::Carousel(CarouselMessage::PointerMoved(point))
        });

    let nav = row![
        nav_button(Icon::ArrowLeft, theme::Button::NavOutline)
            .on_press(Message::Carousel(CarouselMessage::Previous)),
        nav_button(Icon::ArrowRight, theme::Button::NavFilled)
            .on_press(Message::Carousel(CarouselMessage::Next)),
    ]
    .spacing(16);

    let region = column![strip_area, container(nav).center_x(Length::Fill)]
        .spacing(32)
        .width(Length::Fill);

    mouse_area(region)
        .on_enter(Message::Carousel(CarouselMessage::PointerEntered))
        .on_exit(Message::Carousel(CarouselMessage::PointerExited))
        .into()
}

fn card<'a, T: DialogTrigger>(
    product: &'a Product,
    slot: Option<&'a ImageSlot<image::Handle>>,
    emphasis: f32,
    metrics: &CardMetrics,
    trigger: &T,
) -> Element<'a, Message> {
    let image_size = metrics.image_size(emphasis);

    let picture: Element<'a, Message> = match slot.and_then(ImageSlot::handle) {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(image_size))
            .height(Length::Fixed(image_size))
            .content_fit(ContentFit::Cover)
            .into(),
        None => container(Space::new())
            .width(Length::Fixed(image_size))
            .height(Length::Fixed(image_size))
            .style(theme::Container::ImagePlaceholder.style())
            .into(),
    };

    let panel_width = metrics.panel_width(emphasis);
    let details: Element<'a, Message> = if panel_width < 1.0 {
        Space::new().into()
    } else {
        let pill = text("Add to cart +").size(15).into();
        column![
            text(&product.title)
                .size(28)
                .wrapping(text::Wrapping::None)
                .color(faded(StorefrontTheme::TEXT_PRIMARY, emphasis)),
            text(product.description_or_blank())
                .size(15)
                .color(faded(StorefrontTheme::TEXT_SECONDARY, emphasis)),
            text(product.price_label())
                .size(20)
                .wrapping(text::Wrapping::None)
                .color(faded(StorefrontTheme::TEXT_PRIMARY, emphasis)),
            trigger.wrap(DialogRequest::from_product(product), pill),
        ]
        .spacing(12)
        .into()
    };

    let panel = container(details)
        .width(Length::Fixed(panel_width))
        .height(Length::Fixed(image_size))
        .align_y(Alignment::Center)
        .clip(true);

    let content = row![
        picture,
        Space::new().width(Length::Fixed(metrics.panel_gap)),
        panel
    ]
    .align_y(Alignment::Center);

    let style = if emphasis > 0.5 {
        theme::Container::ActiveCard
    } else {
        theme::Container::Card
    };

    container(content)
        .padding(metrics.padding(emphasis))
        .width(Length::Fixed(metrics.card_width(emphasis)))
        .style(style.style())
        .into()
}

fn nav_button<'a>(
    icon: Icon,
    style: theme::Button,
) -> iced::widget::Button<'a, Message> {
    button(
        container(text(icon_char(icon)).font(lucide_font()).size(24))
            .center(Length::Fixed(44.0)),
    )
    .padding(4)
    .style(style.style())
}

fn lucide_font() -> iced::Font {
    iced::Font::with_name("lucide")
}

fn icon_char(icon: Icon) -> String {
    icon.unicode().to_string()
}
