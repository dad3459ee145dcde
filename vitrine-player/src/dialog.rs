//! "Add to cart" dialog seam.
//!
//! Cards never build dialogs themselves. They hand a [`DialogRequest`] and
//! the clickable pill to a [`DialogTrigger`], which decides what pressing it
//! does. The app uses [`ButtonTrigger`] and a minimal modal; embedders can
//! supply their own trigger.

use iced::{
    Element, Length,
    widget::{Space, button, column, container, mouse_area, opaque, row, stack, text},
};
use vitrine_model::{ImageRef, Modifier, Price, Product, ProductId};

use crate::messages::Message;
use crate::theme::{self, StorefrontTheme};

/// Everything a dialog needs to describe one product.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogRequest {
    pub product_id: ProductId,
    pub image: ImageRef,
    pub title: String,
    pub description: Option<String>,
    pub price: Option<Price>,
    pub modifiers: Vec<Modifier>,
}

impl DialogRequest {
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            image: product.image.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            modifiers: product.modifiers.clone(),
        }
    }

    /// Display names of modifiers that carry a `name` field.
    pub fn modifier_names(&self) -> Vec<&str> {
        self.modifiers
            .iter()
            .filter_map(|modifier| modifier.0.get("name")?.as_str())
            .collect()
    }
}

pub trait DialogTrigger {
    /// Wrap `child` so that activating it opens the dialog for `request`.
    fn wrap<'a>(
        &self,
        request: DialogRequest,
        child: Element<'a, Message>,
    ) -> Element<'a, Message>;
}

/// Turns the child into a pill button emitting [`Message::OpenDialog`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonTrigger;

impl DialogTrigger for ButtonTrigger {
    fn wrap<'a>(
        &self,
        request: DialogRequest,
        child: Element<'a, Message>,
    ) -> Element<'a, Message> {
        button(child)
            .padding([10, 20])
            .style(theme::Button::Pill.style())
            .on_press(Message::OpenDialog(request.product_id))
            .into()
    }
}

/// Lay the product dialog over `base`. Clicking the scrim closes it.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    request: &'a DialogRequest,
) -> Element<'a, Message> {
    let mut details = column![
        text(&request.title)
            .size(24)
            .color(StorefrontTheme::TEXT_PRIMARY),
    ]
    .spacing(12);

    if let Some(description) = &request.description {
        details = details.push(
            text(description)
                .size(15)
                .color(StorefrontTheme::TEXT_SECONDARY),
        );
    }

    let names = request.modifier_names();
    if !names.is_empty() {
        details = details.push(
            text(format!("Options: {}", names.join(", ")))
                .size(14)
                .color(StorefrontTheme::TEXT_SECONDARY),
        );
    }

    let price = request.price.map(|p| p.to_string()).unwrap_or_default();
    details = details.push(
        row![
            text(price).size(20).color(StorefrontTheme::TEXT_PRIMARY),
            Space::new().width(Length::Fill),
            button(text("Close"))
                .style(theme::Button::Text.style())
                .on_press(Message::CloseDialog),
        ]
        .align_y(iced::Alignment::Center),
    );

    let card = container(details)
        .padding(24)
        .width(Length::Fixed(420.0))
        .style(theme::Container::Modal.style());

    let scrim = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::Container::ModalScrim.style());

    stack![
        base.into(),
        mouse_area(scrim).on_press(Message::CloseDialog),
        container(opaque(card)).center(Length::Fill),
    ]
    .into()
}
