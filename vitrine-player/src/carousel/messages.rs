use iced::{Point, widget::scrollable};
use vitrine_core::NavKey;

#[derive(Debug, Clone)]
pub enum CarouselMessage {
    Previous,
    Next,
    Scrolled(scrollable::Viewport),

    // Pointer, relative to the strip's viewport
    PointerEntered,
    PointerExited,
    PointerMoved(Point),
    PointerPressed,
    PointerReleased,

    KeyPressed(NavKey),
}
