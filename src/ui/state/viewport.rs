// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Handles the page scrollable's viewport state: current offset and bounds.

use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Current viewport bounds
    pub bounds: Option<Rectangle>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            bounds: None,
        }
    }
}

impl ViewportState {
    /// Updates the viewport state with new bounds and offset.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) {
        self.offset = offset;
        self.bounds = Some(bounds);
    }

    /// Forgets the cached bounds (after a window resize) so the height falls
    /// back until the next scroll event reports fresh bounds.
    pub fn invalidate_bounds(&mut self) {
        self.bounds = None;
    }

    /// Current vertical scroll offset.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.offset.y
    }

    /// Height of the visible window, falling back to `default_height`
    /// before the first scroll event arrives.
    #[must_use]
    pub fn height_or(&self, default_height: f32) -> f32 {
        self.bounds.map_or(default_height, |bounds| bounds.height)
    }
}
