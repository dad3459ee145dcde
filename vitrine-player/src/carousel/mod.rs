//! The product carousel as mounted inside the app.
//!
//! [`CarouselState`] owns a [`CarouselController`] plus the renderer-side
//! pieces the controller does not know about: decoded image handles, the
//! scrollable id used for programmatic scrolling and the last cursor
//! position inside the strip.

pub mod messages;
pub mod subscriptions;
pub mod update;
pub mod view;

use std::time::Instant;

use iced::widget::{Id as ScrollableId, image::Handle};
use vitrine_core::{CarouselController, ControllerSettings, ImageSlot};

#[derive(Debug)]
pub struct CarouselState {
    pub controller: CarouselController,
    pub images: Vec<ImageSlot<Handle>>,
    pub scrollable_id: ScrollableId,
    /// Cursor x relative to the strip viewport, while the cursor is over it.
    pub cursor_x: Option<f32>,
    pub session: u64,
}

impl CarouselState {
    pub fn mount(
        len: usize,
        settings: ControllerSettings,
        session: u64,
        now: Instant,
    ) -> Self {
        Self {
            controller: CarouselController::mount(len, settings, now),
            images: (0..len).map(|_| ImageSlot::new()).collect(),
            scrollable_id: ScrollableId::unique(),
            cursor_x: None,
            session,
        }
    }

    pub fn unmount(&mut self) {
        self.controller.unmount();
        self.cursor_x = None;
    }

    pub fn image(&self, index: usize) -> Option<&Handle> {
        self.images.get(index).and_then(ImageSlot::handle)
    }

    pub fn is_mounted(&self) -> bool {
        self.controller.is_mounted()
    }
}
