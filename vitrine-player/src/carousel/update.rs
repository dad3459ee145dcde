use std::time::Instant;

use iced::{
    Task,
    widget::{operation::scroll_to, scrollable::AbsoluteOffset},
};
use vitrine_core::{FallbackAction, GestureOutcome};
use vitrine_model::ImageRef;

use super::{CarouselState, messages::CarouselMessage};
use crate::images;
use crate::messages::{ImageLoaded, Message};

pub fn update(
    state: &mut CarouselState,
    message: CarouselMessage,
    now: Instant,
) -> Task<Message> {
    let controller = &mut state.controller;

    match message {
        CarouselMessage::Previous => {
            controller.prev(now);
        }
        CarouselMessage::Next => {
            controller.next(now);
        }
        CarouselMessage::Scrolled(viewport) => {
            controller.set_viewport(
                viewport.bounds().width,
                viewport.absolute_offset().x,
            );
        }
        CarouselMessage::PointerEntered => controller.pointer_entered(now),
        CarouselMessage::PointerExited => {
            state.cursor_x = None;
            controller.pointer_left(now);
        }
        CarouselMessage::PointerMoved(point) => {
            state.cursor_x = Some(point.x);
        }
        CarouselMessage::PointerPressed => {
            if let Some(x) = state.cursor_x {
                controller.pointer_pressed(x, now);
            }
        }
        CarouselMessage::PointerReleased => {
            if let Some(x) = state.cursor_x {
                let target = controller.card_at(x, now);
                let outcome = controller.pointer_released(x, target, now);
                if outcome != GestureOutcome::Ignored {
                    log::trace!(
                        "carousel gesture {:?} at x={:.1} over {:?}",
                        outcome,
                        x,
                        target
                    );
                }
            }
        }
        CarouselMessage::KeyPressed(key) => {
            controller.key_pressed(key, now);
        }
    }

    Task::none()
}

/// Drive the controller's clock and forward any scroll step to the
/// scrollable.
pub fn tick(state: &mut CarouselState, now: Instant) -> Task<Message> {
    let outcome = state.controller.tick(now);

    if outcome.advanced {
        log::trace!(
            "carousel autoplay advanced to {:?}",
            state.controller.active_index()
        );
    }

    match outcome.scroll_to {
        Some(x) => scroll_to::<Message>(
            state.scrollable_id.clone(),
            AbsoluteOffset { x, y: 0.0 },
        ),
        None => Task::none(),
    }
}

/// The window changed size: record the new viewport width and re-center.
pub fn resize(state: &mut CarouselState, width: f32, now: Instant) {
    let offset = state
        .controller
        .viewport()
        .map(|viewport| viewport.offset_x)
        .unwrap_or(0.0);
    state.controller.set_viewport(width, offset);
    state.controller.center_active_item(now);
}

pub fn load_image(
    session: u64,
    index: usize,
    image: ImageRef,
    placeholder: bool,
) -> Task<Message> {
    Task::perform(images::load(image), move |result| {
        Message::ImageLoaded(ImageLoaded {
            session,
            index,
            placeholder,
            result,
        })
    })
}

/// Fetch every product image for a freshly mounted carousel.
pub fn load_images(
    state: &CarouselState,
    images: impl IntoIterator<Item = ImageRef>,
) -> Task<Message> {
    Task::batch(
        images
            .into_iter()
            .enumerate()
            .map(|(index, image)| load_image(state.session, index, image, false)),
    )
}

/// Store a finished fetch. A failed product image falls back to the
/// placeholder once; a failed placeholder leaves the slot empty.
pub fn image_loaded(
    state: &mut CarouselState,
    loaded: ImageLoaded,
    placeholder: Option<&ImageRef>,
) -> Task<Message> {
    if loaded.session != state.session || !state.is_mounted() {
        log::trace!("dropping image for stale carousel session {}", loaded.session);
        return Task::none();
    }

    let Some(slot) = state.images.get_mut(loaded.index) else {
        return Task::none();
    };

    match loaded.result {
        Ok(handle) => {
            slot.resolve(handle);
            Task::none()
        }
        Err(err) => match (slot.fail(), placeholder) {
            (FallbackAction::LoadPlaceholder, Some(placeholder)) => {
                log::warn!(
                    "image for card {} failed, using placeholder: {}",
                    loaded.index,
                    err
                );
                load_image(state.session, loaded.index, placeholder.clone(), true)
            }
            (FallbackAction::LoadPlaceholder, None) => {
                log::warn!("image for card {} failed: {}", loaded.index, err);
                slot.fail();
                Task::none()
            }
            (FallbackAction::GiveUp, _) => {
                log::warn!(
                    "placeholder for card {} failed, leaving it blank: {}",
                    loaded.index,
                    err
                );
                Task::none()
            }
        },
    }
}
