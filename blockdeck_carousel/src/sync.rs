// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View sync: every visual fact that depends on the current slide.
//!
//! [`ViewFacts`] is derived entirely from `(current, total)`. It names three
//! groups of facts:
//!
//! 1. The track offset that brings slide `current` into view.
//! 2. One [`MarkerState`] per pagination marker; exactly one is active.
//! 3. One [`SlideExposure`] per slide; only `current` is focusable and exposed
//!    to assistive technology.
//!
//! Because the facts are computed rather than stored, "exactly one active
//! marker" holds by construction. Applying the same facts twice yields the same
//! view.
//!
//! A [`SyncRenderer`] consumes these facts. The
//! [`ViewportController`](crate::ViewportController) calls it once per
//! successful transition.
//!
//! ```
//! use blockdeck_carousel::{SlideExposure, ViewFacts};
//!
//! let facts = ViewFacts::new(1, 3);
//! assert_eq!(facts.track_offset().css_transform(), "translateX(-100%)");
//! assert_eq!(facts.markers().filter(|m| m.active).count(), 1);
//! assert_eq!(facts.slide(1), SlideExposure::FOCUSABLE | SlideExposure::EXPOSED);
//! assert!(facts.slide(0).is_empty());
//! ```

use alloc::format;
use alloc::string::String;

/// Refreshes every view artifact that depends on the current slide.
///
/// Implementations must be idempotent: rendering the same `(current, total)`
/// twice leaves the view exactly as rendering it once.
pub trait SyncRenderer {
    /// Brings the view in line with slide `current` of `total`.
    fn render(&mut self, current: usize, total: usize);
}

impl<R: SyncRenderer + ?Sized> SyncRenderer for &mut R {
    fn render(&mut self, current: usize, total: usize) {
        (**self).render(current, total);
    }
}

bitflags::bitflags! {
    /// Per-slide exposure to keyboard and assistive technology.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SlideExposure: u8 {
        /// The slide is in the tab order (`tabindex="0"`).
        const FOCUSABLE = 0b0000_0001;
        /// The slide is visible to assistive technology (`aria-hidden="false"`).
        const EXPOSED   = 0b0000_0010;
    }
}

impl SlideExposure {
    /// Value for the slide's `tabindex` attribute.
    #[must_use]
    pub fn tabindex(self) -> &'static str {
        if self.contains(Self::FOCUSABLE) {
            "0"
        } else {
            "-1"
        }
    }

    /// Value for the slide's `aria-hidden` attribute.
    #[must_use]
    pub fn aria_hidden(self) -> &'static str {
        if self.contains(Self::EXPOSED) {
            "false"
        } else {
            "true"
        }
    }
}

/// State of one pagination marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerState {
    /// Index of the slide this marker represents.
    pub index: usize,
    /// Whether this marker represents the current slide.
    pub active: bool,
}

impl MarkerState {
    /// Value for the marker's `aria-current` attribute.
    #[must_use]
    pub fn aria_current(self) -> &'static str {
        if self.active { "true" } else { "false" }
    }
}

/// Translation of the slide track.
///
/// The track moves left linearly: slide `current` is in view when the track
/// is shifted by `current / total` of its full extent, which is one
/// viewport-width per slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackOffset {
    current: usize,
    total: usize,
}

impl TrackOffset {
    /// Fraction of the track's full extent shifted out of view, in `[0, 1)`.
    #[must_use]
    pub fn fraction(self) -> f64 {
        self.current as f64 / self.total as f64
    }

    /// Shift in viewport widths (one per slide before `current`).
    #[must_use]
    pub fn viewports(self) -> usize {
        self.current
    }

    /// The CSS `transform` value, in percent of the viewport width.
    #[must_use]
    pub fn css_transform(self) -> String {
        if self.current == 0 {
            return String::from("translateX(0%)");
        }
        format!("translateX(-{}%)", self.current * 100)
    }
}

/// The complete set of view facts for one `(current, total)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewFacts {
    current: usize,
    total: usize,
}

impl ViewFacts {
    /// Derives the facts for slide `current` of `total`.
    ///
    /// `current` must be below `total`; the viewport controller guarantees this.
    /// Use [`ViewFacts::checked`] for pairs from elsewhere.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `current` is not below `total`.
    #[must_use]
    pub fn new(current: usize, total: usize) -> Self {
        debug_assert!(
            current < total,
            "current {current} out of range for {total} slides"
        );
        Self { current, total }
    }

    /// Derives the facts for slide `current` of `total`, or `None` if
    /// `current` does not name a slide.
    #[must_use]
    pub fn checked(current: usize, total: usize) -> Option<Self> {
        (current < total).then_some(Self { current, total })
    }

    /// The slide in view.
    #[must_use]
    pub fn current(self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub fn total(self) -> usize {
        self.total
    }

    /// Where the track sits.
    #[must_use]
    pub fn track_offset(self) -> TrackOffset {
        TrackOffset {
            current: self.current,
            total: self.total,
        }
    }

    /// State of marker `index`.
    #[must_use]
    pub fn marker(self, index: usize) -> MarkerState {
        MarkerState {
            index,
            active: index == self.current,
        }
    }

    /// States of all markers in order.
    pub fn markers(self) -> impl Iterator<Item = MarkerState> {
        (0..self.total).map(move |i| self.marker(i))
    }

    /// Exposure of slide `index`.
    #[must_use]
    pub fn slide(self, index: usize) -> SlideExposure {
        if index == self.current {
            SlideExposure::FOCUSABLE | SlideExposure::EXPOSED
        } else {
            SlideExposure::empty()
        }
    }

    /// Exposures of all slides in order.
    pub fn slides(self) -> impl Iterator<Item = SlideExposure> {
        (0..self.total).map(move |i| self.slide(i))
    }
}
