use std::time::{Duration, Instant};

use iced::{
    Subscription, event,
    keyboard::{self, Key, key::Named},
};
use vitrine_core::NavKey;

use super::{CarouselState, messages::CarouselMessage};
use crate::messages::Message;

/// Subscriptions for a mounted carousel. Dropping the carousel drops the
/// keyboard listener and every tick with it.
pub fn subscription(
    state: &CarouselState,
    frame_interval: Duration,
    timer_poll: Duration,
) -> Subscription<Message> {
    if !state.is_mounted() {
        return Subscription::none();
    }

    let mut subscriptions = vec![keyboard()];

    let now = Instant::now();
    if state.controller.needs_frames(now) {
        subscriptions.push(iced::time::every(frame_interval).map(Message::Tick));
    } else if state.controller.has_pending_timers() {
        subscriptions.push(iced::time::every(timer_poll).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

fn keyboard() -> Subscription<Message> {
    event::listen_with(|event, status, _id| {
        if status == event::Status::Captured {
            return None;
        }

        let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) =
            event
        else {
            return None;
        };
        Some(Message::Carousel(CarouselMessage::KeyPressed(nav_key(&key))))
    })
}

pub fn nav_key(key: &Key) -> NavKey {
    match key.as_ref() {
        Key::Named(Named::ArrowLeft) => NavKey::Left,
        Key::Named(Named::ArrowRight) => NavKey::Right,
        _ => NavKey::Other,
    }
}
