//! One-shot placeholder substitution for card images.

/// What the owner should do after an image failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackAction {
    /// Load the placeholder image instead.
    LoadPlaceholder,
    /// The placeholder itself failed; render without an image.
    GiveUp,
}

/// Load state of a single card image. `H` is whatever handle the renderer
/// uses for decoded images.
///
/// The placeholder is substituted at most once: a failing placeholder ends
/// in [`ImageSlot::Broken`] instead of retrying.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSlot<H> {
    Loading,
    Loaded(H),
    LoadingPlaceholder,
    PlaceholderLoaded(H),
    Broken,
}

impl<H> Default for ImageSlot<H> {
    fn default() -> Self {
        ImageSlot::Loading
    }
}

impl<H> ImageSlot<H> {
    pub fn new() -> Self {
        ImageSlot::Loading
    }

    /// Record a decoded image for whichever source is currently loading.
    pub fn resolve(&mut self, handle: H) {
        match self {
            ImageSlot::Loading | ImageSlot::Loaded(_) => {
                *self = ImageSlot::Loaded(handle);
            }
            ImageSlot::LoadingPlaceholder | ImageSlot::PlaceholderLoaded(_) => {
                *self = ImageSlot::PlaceholderLoaded(handle);
            }
            ImageSlot::Broken => {}
        }
    }

    /// Record a failed load and say what to do next.
    pub fn fail(&mut self) -> FallbackAction {
        match self {
            ImageSlot::Loading | ImageSlot::Loaded(_) => {
                *self = ImageSlot::LoadingPlaceholder;
                FallbackAction::LoadPlaceholder
            }
            ImageSlot::LoadingPlaceholder
            | ImageSlot::PlaceholderLoaded(_)
            | ImageSlot::Broken => {
                *self = ImageSlot::Broken;
                FallbackAction::GiveUp
            }
        }
    }

    pub fn handle(&self) -> Option<&H> {
        match self {
            ImageSlot::Loaded(handle) | ImageSlot::PlaceholderLoaded(handle) => {
                Some(handle)
            }
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ImageSlot::Loading | ImageSlot::LoadingPlaceholder)
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(
            self,
            ImageSlot::LoadingPlaceholder | ImageSlot::PlaceholderLoaded(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_load_keeps_original() {
        let mut slot = ImageSlot::new();
        slot.resolve("latte.png");
        assert_eq!(slot.handle(), Some(&"latte.png"));
        assert!(!slot.is_placeholder());
    }

    #[test]
    fn first_failure_substitutes_placeholder() {
        let mut slot = ImageSlot::new();
        assert_eq!(slot.fail(), FallbackAction::LoadPlaceholder);
        assert!(slot.is_loading());
        slot.resolve("placeholder.png");
        assert_eq!(slot, ImageSlot::PlaceholderLoaded("placeholder.png"));
    }

    #[test]
    fn failed_placeholder_does_not_retry() {
        let mut slot: ImageSlot<&str> = ImageSlot::new();
        assert_eq!(slot.fail(), FallbackAction::LoadPlaceholder);
        assert_eq!(slot.fail(), FallbackAction::GiveUp);
        assert_eq!(slot.fail(), FallbackAction::GiveUp);
        slot.resolve("late.png");
        assert_eq!(slot, ImageSlot::Broken);
        assert_eq!(slot.handle(), None);
    }
}
