//! Strip geometry: card sizes, offsets, centering and hit testing.
//!
//! A card's size depends on its emphasis, `0.0` for a resting card and `1.0`
//! for the active one. Intermediate values appear while the resize
//! transition runs.

use serde::{Deserialize, Serialize};

/// Pixel metrics for the card strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardMetrics {
    /// Square image edge of the active card.
    pub image_active: f32,
    /// Square image edge of a resting card.
    pub image_inactive: f32,
    /// Width of the detail panel when fully expanded.
    pub panel_width: f32,
    /// Gap between the image and the detail panel. Present even when the
    /// panel is collapsed.
    pub panel_gap: f32,
    /// Inner padding around the active card.
    pub active_padding: f32,
    /// Space between neighbouring cards.
    pub spacing: f32,
    /// Padding before the first and after the last card.
    pub edge_padding: f32,
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self {
            image_active: 280.0,
            image_inactive: 160.0,
            panel_width: 448.0,
            panel_gap: 32.0,
            active_padding: 24.0,
            spacing: 48.0,
            edge_padding: 16.0,
        }
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

impl CardMetrics {
    pub fn image_size(&self, emphasis: f32) -> f32 {
        lerp(self.image_inactive, self.image_active, emphasis)
    }

    pub fn panel_width(&self, emphasis: f32) -> f32 {
        lerp(0.0, self.panel_width, emphasis)
    }

    pub fn padding(&self, emphasis: f32) -> f32 {
        lerp(0.0, self.active_padding, emphasis)
    }

    /// Outer width of a card at the given emphasis.
    pub fn card_width(&self, emphasis: f32) -> f32 {
        self.image_size(emphasis)
            + self.panel_gap
            + self.panel_width(emphasis)
            + 2.0 * self.padding(emphasis)
    }

    /// Outer height of a card at the given emphasis.
    pub fn card_height(&self, emphasis: f32) -> f32 {
        self.image_size(emphasis) + 2.0 * self.padding(emphasis)
    }
}

/// Horizontal extent of one card inside the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub start: f32,
    pub width: f32,
}

impl CardBounds {
    pub fn end(&self) -> f32 {
        self.start + self.width
    }

    pub fn midpoint(&self) -> f32 {
        self.start + self.width / 2.0
    }

    pub fn contains(&self, x: f32) -> bool {
        x >= self.start && x < self.end()
    }
}

/// Measured positions of every card in content coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StripGeometry {
    cards: Vec<CardBounds>,
    content_width: f32,
}

impl StripGeometry {
    /// Measure the strip with an arbitrary emphasis per card.
    pub fn measure(
        metrics: &CardMetrics,
        len: usize,
        emphasis: impl Fn(usize) -> f32,
    ) -> Self {
        if len == 0 {
            return Self::default();
        }

        let mut cards = Vec::with_capacity(len);
        let mut cursor = metrics.edge_padding;
        for index in 0..len {
            let width = metrics.card_width(emphasis(index));
            cards.push(CardBounds {
                start: cursor,
                width,
            });
            cursor += width;
            if index + 1 < len {
                cursor += metrics.spacing;
            }
        }

        Self {
            cards,
            content_width: cursor + metrics.edge_padding,
        }
    }

    /// Geometry once every transition has finished: only `active` is
    /// emphasised.
    pub fn settled(metrics: &CardMetrics, len: usize, active: usize) -> Self {
        Self::measure(metrics, len, |index| {
            if index == active { 1.0 } else { 0.0 }
        })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<CardBounds> {
        self.cards.get(index).copied()
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn max_scroll(&self, viewport_width: f32) -> f32 {
        (self.content_width - viewport_width).max(0.0)
    }

    /// Scroll offset that puts the card's midpoint at the viewport's
    /// midpoint, clamped to the scrollable range.
    ///
    /// Returns `None` when the card does not exist or the viewport has no
    /// width yet.
    pub fn centered_offset(&self, index: usize, viewport_width: f32) -> Option<f32> {
        if viewport_width <= 0.0 {
            return None;
        }
        let card = self.card(index)?;
        let raw = card.midpoint() - viewport_width / 2.0;
        Some(raw.clamp(0.0, self.max_scroll(viewport_width)))
    }

    /// Index of the card under a content-space x coordinate. Points in the
    /// spacing between cards resolve to nothing.
    pub fn hit_test(&self, content_x: f32) -> Option<usize> {
        let after = self.cards.partition_point(|card| card.start <= content_x);
        let index = after.checked_sub(1)?;
        self.cards[index].contains(content_x).then_some(index)
    }
}
