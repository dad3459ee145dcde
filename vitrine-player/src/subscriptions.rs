use iced::Subscription;

use crate::carousel;
use crate::messages::Message;
use crate::state::State;

pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![iced::window::events().map(|(_id, event)| {
        match event {
            iced::window::Event::Opened { size, .. } => {
                Message::WindowResized(size)
            }
            iced::window::Event::Resized(size) => Message::WindowResized(size),
            _ => Message::NoOp,
        }
    })];

    if let Some(carousel) = &state.carousel {
        subscriptions.push(carousel::subscriptions::subscription(
            carousel,
            state.config.frame_interval(),
            state.config.timer_poll(),
        ));
    }

    Subscription::batch(subscriptions)
}
