// SPDX-License-Identifier: MPL-2.0
//! Viewport intersection reporting.
//!
//! This module provides a shared `ViewportReporter` that notifies the update
//! loop when a watched page region crosses its visibility boundary. It is an
//! observer registry keyed by target: components register a vertical span and
//! a watch configuration, the scroll handler feeds in the current viewport
//! window, and the reporter answers with the crossings since the last report.
//!
//! One-shot watches (section reveal, lazy image loading) are removed from the
//! registry as soon as they first report intersecting, so a later visibility
//! change produces no further effect.

use crate::page::{SectionId, Span};

/// Targets that can be watched for visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A landing section, revealed on first visibility.
    Section(SectionId),
    /// The hero area, observed as the sticky-navigation sentinel.
    HeaderSentinel,
    /// A feature illustration, lazily loaded on first approach.
    FeatureImage(usize),
}

/// Watch configuration for a single target.
#[derive(Debug, Clone, Copy)]
pub struct Watch {
    /// Required visible fraction of the span. `0.0` means any positive
    /// overlap counts.
    pub threshold: f32,
    /// Viewport inflation in pixels. Positive widens the window (lazy
    /// loading fires early); negative shrinks it (the sticky sentinel
    /// boundary aligns with the nav bar edge).
    pub margin: f32,
    /// Remove the watch after its first intersecting report.
    pub once: bool,
}

impl Watch {
    /// Watch that fires on any overlap, reported continuously.
    #[must_use]
    pub fn continuous(margin: f32) -> Self {
        Self {
            threshold: 0.0,
            margin,
            once: false,
        }
    }

    /// One-shot watch with a visibility threshold.
    #[must_use]
    pub fn once(threshold: f32, margin: f32) -> Self {
        Self {
            threshold,
            margin,
            once: true,
        }
    }
}

/// A reported visibility change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub target: Target,
    pub intersecting: bool,
}

#[derive(Debug)]
struct Entry {
    target: Target,
    span: Span,
    watch: Watch,
    /// Last reported state; `None` until the first report, which always
    /// notifies (mirroring an initial observation callback).
    last: Option<bool>,
}

/// Observer registry over the page scroll viewport.
#[derive(Debug, Default)]
pub struct ViewportReporter {
    // A Vec keeps report order deterministic; the registry stays tiny.
    entries: Vec<Entry>,
}

impl ViewportReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts observing `target`. Replaces any existing watch for it.
    pub fn observe(&mut self, target: Target, span: Span, watch: Watch) {
        self.unobserve(target);
        self.entries.push(Entry {
            target,
            span,
            watch,
            last: None,
        });
    }

    /// Stops observing `target`. No-op if it is not being observed.
    pub fn unobserve(&mut self, target: Target) {
        self.entries.retain(|entry| entry.target != target);
    }

    /// Whether `target` currently has a registered watch.
    #[must_use]
    pub fn is_observing(&self, target: Target) -> bool {
        self.entries.iter().any(|entry| entry.target == target)
    }

    /// Number of registered watches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluates every watch against the viewport window `[view_top,
    /// view_top + view_height]` and returns the crossings to deliver.
    ///
    /// Only state changes are reported, except that the first report after
    /// `observe` always notifies. One-shot watches are unregistered right
    /// after their first intersecting report.
    pub fn report(&mut self, view_top: f32, view_height: f32) -> Vec<Crossing> {
        let mut crossings = Vec::new();

        for entry in &mut self.entries {
            let intersecting = intersects(entry.span, entry.watch, view_top, view_height);
            if entry.last != Some(intersecting) {
                entry.last = Some(intersecting);
                crossings.push(Crossing {
                    target: entry.target,
                    intersecting,
                });
            }
        }

        self.entries
            .retain(|entry| !(entry.watch.once && entry.last == Some(true)));

        crossings
    }
}

/// Pure intersection test of a span against an inflated viewport window.
fn intersects(span: Span, watch: Watch, view_top: f32, view_height: f32) -> bool {
    let window_top = view_top - watch.margin;
    let window_bottom = view_top + view_height + watch.margin;

    let overlap = (span.bottom().min(window_bottom) - span.top.max(window_top)).max(0.0);
    if watch.threshold <= 0.0 {
        return overlap > 0.0;
    }

    if span.height <= 0.0 {
        return overlap > 0.0;
    }

    overlap / span.height >= watch.threshold
}
