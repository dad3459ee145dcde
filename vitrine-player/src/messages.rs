use std::time::Instant;

use iced::{Size, widget::image::Handle};
use vitrine_model::ProductId;

use crate::carousel::messages::CarouselMessage;
use crate::images::ImageLoadError;

#[derive(Debug, Clone)]
pub enum Message {
    Carousel(CarouselMessage),
    ImageLoaded(ImageLoaded),

    OpenDialog(ProductId),
    CloseDialog,

    /// Unmount a mounted carousel or mount a fresh one.
    ToggleMounted,
    Tick(Instant),
    WindowResized(Size),

    NoOp,
}

/// Result of one image fetch. `session` identifies the mount that asked for
/// it so results arriving after an unmount are dropped.
#[derive(Debug, Clone)]
pub struct ImageLoaded {
    pub session: u64,
    pub index: usize,
    pub placeholder: bool,
    pub result: Result<Handle, ImageLoadError>,
}
