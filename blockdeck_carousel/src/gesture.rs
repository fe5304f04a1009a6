// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognition: resolve a press/release pair into zero or one navigation.
//!
//! ## Usage
//!
//! 1) On press, call [`GestureTracker::press`] with the pointer position.
//! 2) On release, call [`GestureTracker::release`]. The in-flight sample is
//!    consumed and classified by its horizontal displacement.
//! 3) On cancel, call [`GestureTracker::cancel`] to drop the sample.
//!
//! A second press before a release replaces the in-flight sample. A release
//! with nothing in flight resolves to nothing.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use blockdeck_carousel::{GestureTracker, SwipeIntent};
//!
//! let mut gesture = GestureTracker::default();
//!
//! // Finger drags 80px to the left: reveal the next slide.
//! gesture.press(Point::new(300.0, 40.0));
//! assert_eq!(gesture.release(Point::new(220.0, 42.0), 50.0), Some(SwipeIntent::Next));
//!
//! // A 20px wobble is noise.
//! gesture.press(Point::new(300.0, 40.0));
//! assert_eq!(gesture.release(Point::new(320.0, 40.0), 50.0), None);
//! assert!(!gesture.is_tracking());
//! ```

use kurbo::Point;
use tracing::trace;

/// Navigation requested by a swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeIntent {
    /// Content dragged rightward: bring the previous slide in.
    Previous,
    /// Content dragged leftward: bring the next slide in.
    Next,
}

/// A completed press/release pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSample {
    /// Where the press started.
    pub start: Point,
    /// Where the release happened.
    pub end: Point,
}

impl GestureSample {
    /// Horizontal displacement from start to end.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Classifies this sample against `threshold`.
    ///
    /// Displacements must strictly exceed the threshold; anything within
    /// `[-threshold, threshold]` is noise.
    #[must_use]
    pub fn intent(&self, threshold: f64) -> Option<SwipeIntent> {
        let dx = self.dx();
        if dx > threshold {
            Some(SwipeIntent::Previous)
        } else if dx < -threshold {
            Some(SwipeIntent::Next)
        } else {
            None
        }
    }
}

/// Tracks the press of a single in-flight gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureTracker {
    start: Option<Point>,
}

impl GestureTracker {
    /// Starts tracking a gesture at `pos`, replacing any gesture in flight.
    pub fn press(&mut self, pos: Point) {
        self.start = Some(pos);
    }

    /// Ends the gesture at `pos` and returns the completed sample.
    ///
    /// Returns `None` if no press is in flight.
    pub fn finish(&mut self, pos: Point) -> Option<GestureSample> {
        self.start
            .take()
            .map(|start| GestureSample { start, end: pos })
    }

    /// Ends the gesture at `pos` and classifies it against `threshold`.
    pub fn release(&mut self, pos: Point, threshold: f64) -> Option<SwipeIntent> {
        let sample = self.finish(pos)?;
        let intent = sample.intent(threshold);
        if intent.is_none() {
            trace!(dx = sample.dx(), threshold, "carousel: swipe ignored");
        }
        intent
    }

    /// Drops the gesture in flight, if any.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Returns `true` while a press is in flight.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}
