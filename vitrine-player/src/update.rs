use std::time::Instant;

use iced::Task;

use crate::carousel;
use crate::dialog::DialogRequest;
use crate::messages::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Carousel(message) => match state.carousel.as_mut() {
            Some(carousel) => {
                carousel::update::update(carousel, message, Instant::now())
            }
            None => Task::none(),
        },
        Message::Tick(now) => match state.carousel.as_mut() {
            Some(carousel) => carousel::update::tick(carousel, now),
            None => Task::none(),
        },
        Message::ImageLoaded(loaded) => match state.carousel.as_mut() {
            Some(carousel) => carousel::update::image_loaded(
                carousel,
                loaded,
                state.placeholder.as_ref(),
            ),
            None => Task::none(),
        },
        Message::OpenDialog(product_id) => {
            match state.catalog.find(&product_id) {
                Some(product) => {
                    log::debug!("opening dialog for {product_id}");
                    state.dialog = Some(DialogRequest::from_product(product));
                }
                None => log::warn!("dialog requested for unknown {product_id}"),
            }
            Task::none()
        }
        Message::CloseDialog => {
            state.dialog = None;
            Task::none()
        }
        Message::ToggleMounted => {
            if state.is_mounted() {
                state.unmount_carousel();
                Task::none()
            } else {
                state.mount_carousel(Instant::now())
            }
        }
        Message::WindowResized(size) => {
            state.window_size = Some(size);
            if let Some(carousel) = state.carousel.as_mut() {
                carousel::update::resize(carousel, size.width, Instant::now());
            }
            Task::none()
        }
        Message::NoOp => Task::none(),
    }
}
