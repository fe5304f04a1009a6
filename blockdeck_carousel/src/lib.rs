// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blockdeck Carousel: a cyclic, multi-input carousel core.
//!
//! This crate turns a fixed list of content records into an interactive,
//! cyclically navigable viewport whose dependent view state (track offset,
//! pagination markers, per-slide accessibility flags) is always in step with
//! the slide in view. It is split into four small pieces:
//!
//! - [`SlideSet`]: builds the immutable, non-empty, ordered list of slides.
//! - [`ViewportController`]: the state machine. It owns the current index and
//!   exposes `next`, `previous`, and `goto`. Navigation wraps.
//! - [`InputAdapter`]: normalizes clicks, pagination markers, arrow keys, and
//!   swipe gestures into those three operations.
//! - [`SyncRenderer`]: refreshes every dependent view artifact, once per
//!   transition, from `(current, total)` alone. [`ViewFacts`] names those
//!   artifacts; [`TreeRenderer`] writes them into an element tree.
//!
//! [`Carousel`] wires all four to a `blockdeck_dom` tree. Two block variants
//! are provided: [`FeatureCarousel`] (badge, title, description, bullets,
//! visual, arrows, dots) and [`ImageCarousel`] (picture, caption, dots).
//!
//! The state machine knows nothing about elements or events, so it can be
//! exercised directly:
//!
//! ```rust
//! use blockdeck_carousel::{SlideSet, SyncRenderer, ViewportController};
//!
//! struct Count(usize);
//! impl SyncRenderer for Count {
//!     fn render(&mut self, _current: usize, _total: usize) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let slides = SlideSet::build(["a", "b", "c"]).unwrap();
//! let mut viewport = ViewportController::new(slides.total(), Count(0));
//!
//! assert_eq!(viewport.next(), 1);
//! assert_eq!(viewport.next(), 2);
//! assert_eq!(viewport.next(), 0);
//! assert_eq!(viewport.previous(), 2);
//! assert_eq!(viewport.renderer().0, 4);
//! ```
//!
//! ## Assembling a block
//!
//! ```rust
//! use blockdeck_carousel::{CarouselConfig, FeatureCarousel, Input};
//! use blockdeck_dom::{Cell, NoIcons, PlainPictures};
//!
//! let rows = vec![
//!     vec![Cell::text("new"), Cell::text("Automate"), Cell::text("Less toil.")],
//!     vec![Cell::text(""), Cell::text("Observe"), Cell::text("See everything.")],
//! ];
//! let mut carousel =
//!     FeatureCarousel::feature(&rows, CarouselConfig::default(), &mut PlainPictures, &mut NoIcons)
//!         .unwrap();
//!
//! carousel.handle(&Input::Next);
//! assert_eq!(carousel.current(), 1);
//! assert_eq!(carousel.element().find_all_by_class("active").len(), 1);
//! ```
//!
//! ## Gestures
//!
//! A swipe is a press/release pair. Its horizontal displacement must strictly
//! exceed [`CarouselConfig::swipe_threshold`] (50 px by default): dragging
//! right shows the previous slide, dragging left shows the next. Anything
//! shorter is silently discarded.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: build Kurbo with `libm` for `no_std` targets.
//! - `serde`: `Serialize`/`Deserialize` for [`FeatureRecord`] and [`ImageRecord`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod error;
mod feature;
mod gesture;
mod image;
mod input;
mod record;
mod slides;
mod sync;
mod tree;
mod viewport;

pub use carousel::Carousel;
pub use config::{CarouselConfig, DEFAULT_SWIPE_THRESHOLD, Labels, Transition};
pub use error::{CarouselError, EmptyInputError, IndexOutOfRangeError};
pub use feature::{FEATURE_BLOCK, FeatureCarousel};
pub use gesture::{GestureSample, GestureTracker, SwipeIntent};
pub use image::{IMAGE_BLOCK, ImageCarousel};
pub use input::{Command, Input, InputAdapter, Outcome, arrow_command, execute};
pub use record::{BULLET_SEPARATOR, FeatureRecord, ImageRecord};
pub use slides::{Slide, SlideSet};
pub use sync::{MarkerState, SlideExposure, SyncRenderer, TrackOffset, ViewFacts};
pub use tree::{TreeLayout, TreeRenderer};
pub use viewport::{ViewportController, ViewportState};
