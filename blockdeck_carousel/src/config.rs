// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.
//!
//! A [`CarouselConfig`] is fixed when a carousel is assembled. There is no
//! way to change the swipe threshold of a live carousel.

use alloc::format;
use alloc::string::String;

/// Horizontal displacement, in device-independent pixels, a swipe must exceed
/// before it counts as navigation.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Track animation applied once the initial position has been rendered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Duration in milliseconds.
    pub duration_ms: u32,
    /// CSS easing function.
    pub easing: &'static str,
}

impl Transition {
    /// The CSS `transition` value for the track's transform.
    #[must_use]
    pub fn css(&self) -> String {
        format!("transform {}ms {}", self.duration_ms, self.easing)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: 350,
            easing: "cubic-bezier(.4,0,.2,1)",
        }
    }
}

/// Accessible labels for the carousel controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Labels {
    /// Label of the "previous" control.
    pub previous: &'static str,
    /// Label of the "next" control.
    pub next: &'static str,
    /// Prefix of each pagination marker label; the 1-based slide number follows.
    pub marker_prefix: &'static str,
}

impl Labels {
    /// Label of the marker for slide `index` (0-based).
    #[must_use]
    pub fn marker(&self, index: usize) -> String {
        format!("{} {}", self.marker_prefix, index + 1)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            previous: "Previous slide",
            next: "Next slide",
            marker_prefix: "Go to slide",
        }
    }
}

/// Construction-time settings for a carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// See [`DEFAULT_SWIPE_THRESHOLD`].
    pub swipe_threshold: f64,
    /// Track animation.
    pub transition: Transition,
    /// Control labels.
    pub labels: Labels,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            transition: Transition::default(),
            labels: Labels::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_authored_design() {
        let config = CarouselConfig::default();
        assert_eq!(config.swipe_threshold, 50.0);
        assert_eq!(
            config.transition.css(),
            "transform 350ms cubic-bezier(.4,0,.2,1)"
        );
        assert_eq!(config.labels.marker(0), "Go to slide 1");
        assert_eq!(config.labels.marker(4), "Go to slide 5");
    }
}
