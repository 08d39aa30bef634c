// SPDX-License-Identifier: MPL-2.0
//! Lazy loading state for the feature illustrations.
//!
//! Every illustration starts as a blurred placeholder. When the viewport
//! reporter signals the first approach, `request` arms a background render
//! exactly once; `complete` swaps in the full-size handle and drops the blur
//! marker. The swap is driven by the render's completion message, not by the
//! visibility event, so the blur persists for as long as the render takes.

use super::artwork;
use iced::widget::image::Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Placeholder,
    Loading,
    Loaded,
}

/// A feature illustration handle plus its blur marker.
#[derive(Debug, Clone)]
pub struct Illustration {
    pub handle: Handle,
    pub blurred: bool,
}

/// Tracks the load phase of every feature illustration.
#[derive(Debug)]
pub struct LazyImages {
    placeholders: Vec<Handle>,
    full: Vec<Option<Handle>>,
    phases: Vec<Phase>,
}

impl LazyImages {
    /// Creates state for `count` illustrations, rendering the placeholders
    /// up front (they are tiny).
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            placeholders: (0..count)
                .map(|index| artwork::to_handle(artwork::render_placeholder(index)))
                .collect(),
            full: vec![None; count],
            phases: vec![Phase::Placeholder; count],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Arms the full-size render for `index`. Returns `true` only on the
    /// first request; later calls (or out-of-range indices) are no-ops.
    pub fn request(&mut self, index: usize) -> bool {
        match self.phases.get(index) {
            Some(Phase::Placeholder) => {
                self.phases[index] = Phase::Loading;
                true
            }
            _ => false,
        }
    }

    /// Stores the finished full-size handle and clears the blur marker.
    pub fn complete(&mut self, index: usize, handle: Handle) {
        if index < self.phases.len() {
            self.full[index] = Some(handle);
            self.phases[index] = Phase::Loaded;
        }
    }

    /// Reverts `index` to its placeholder so a failed render keeps showing
    /// the blurred variant instead of nothing.
    pub fn abandon(&mut self, index: usize) {
        if let Some(phase) = self.phases.get_mut(index) {
            if *phase == Phase::Loading {
                *phase = Phase::Placeholder;
            }
        }
    }

    /// The handle to render for `index`, with its blur marker.
    #[must_use]
    pub fn illustration(&self, index: usize) -> Option<Illustration> {
        let phase = self.phases.get(index)?;
        match phase {
            Phase::Loaded => self.full[index].as_ref().map(|handle| Illustration {
                handle: handle.clone(),
                blurred: false,
            }),
            Phase::Placeholder | Phase::Loading => Some(Illustration {
                handle: self.placeholders[index].clone(),
                blurred: true,
            }),
        }
    }

    #[must_use]
    pub fn is_loaded(&self, index: usize) -> bool {
        self.phases.get(index) == Some(&Phase::Loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_handle(index: usize) -> Handle {
        artwork::to_handle(artwork::render_full(index))
    }

    #[test]
    fn new_images_start_blurred() {
        let images = LazyImages::new(4);
        assert_eq!(images.len(), 4);
        for index in 0..4 {
            let illustration = images.illustration(index).expect("in range");
            assert!(illustration.blurred);
        }
    }

    #[test]
    fn request_arms_exactly_once() {
        let mut images = LazyImages::new(2);
        assert!(images.request(0));
        assert!(!images.request(0), "second request must not re-arm");
    }

    #[test]
    fn request_out_of_range_is_a_no_op() {
        let mut images = LazyImages::new(2);
        assert!(!images.request(7));
    }

    #[test]
    fn complete_clears_the_blur_marker() {
        let mut images = LazyImages::new(2);
        images.request(1);
        images.complete(1, full_handle(1));

        let illustration = images.illustration(1).expect("in range");
        assert!(!illustration.blurred);
        assert!(images.is_loaded(1));
        // Sibling is untouched.
        assert!(images.illustration(0).expect("in range").blurred);
    }

    #[test]
    fn loaded_image_cannot_be_re_requested() {
        let mut images = LazyImages::new(1);
        images.request(0);
        images.complete(0, full_handle(0));
        assert!(!images.request(0));
    }

    #[test]
    fn abandon_reverts_to_placeholder() {
        let mut images = LazyImages::new(1);
        images.request(0);
        images.abandon(0);

        assert!(images.illustration(0).expect("in range").blurred);
        // A later visibility event may arm the render again.
        assert!(images.request(0));
    }
}
