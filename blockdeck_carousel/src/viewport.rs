// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport state machine: which slide is in view.
//!
//! The machine's states are the slide indices `0..total`. It starts at `0` and
//! has no terminal state:
//!
//! - [`next`](ViewportController::next) moves to `(current + 1) mod total`.
//! - [`previous`](ViewportController::previous) moves to `(current - 1 + total) mod total`.
//! - [`goto`](ViewportController::goto) jumps to an in-range index, or fails
//!   without touching the state.
//!
//! Each successful transition calls the controller's [`SyncRenderer`] exactly
//! once, before the operation returns.
//!
//! ## Minimal example
//!
//! ```
//! use core::num::NonZeroUsize;
//! use blockdeck_carousel::{SyncRenderer, ViewportController};
//!
//! #[derive(Default)]
//! struct Log(Vec<usize>);
//!
//! impl SyncRenderer for Log {
//!     fn render(&mut self, current: usize, _total: usize) {
//!         self.0.push(current);
//!     }
//! }
//!
//! let total = NonZeroUsize::new(3).unwrap();
//! let mut viewport = ViewportController::new(total, Log::default());
//!
//! viewport.previous();
//! viewport.next();
//! assert!(viewport.goto(7).is_err());
//! viewport.goto(1).unwrap();
//!
//! assert_eq!(viewport.current(), 1);
//! assert_eq!(viewport.renderer().0, [2, 0, 1]);
//! ```

use core::num::NonZeroUsize;

use tracing::debug;

use crate::{IndexOutOfRangeError, SyncRenderer};

/// The single mutable fact of a carousel: the slide in view.
///
/// `current` is always a valid index; all transitions wrap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportState {
    current: usize,
    total: NonZeroUsize,
}

impl ViewportState {
    /// Creates the initial state (slide `0`) for `total` slides.
    #[must_use]
    pub const fn new(total: NonZeroUsize) -> Self {
        Self { current: 0, total }
    }

    /// The slide in view.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total.get()
    }

    /// Index [`next`](ViewportController::next) would move to.
    #[must_use]
    pub const fn next_index(&self) -> usize {
        (self.current + 1) % self.total.get()
    }

    /// Index [`previous`](ViewportController::previous) would move to.
    #[must_use]
    pub const fn previous_index(&self) -> usize {
        (self.current + self.total.get() - 1) % self.total.get()
    }

    /// Checks that `index` names a slide.
    pub const fn check(&self, index: usize) -> Result<usize, IndexOutOfRangeError> {
        if index < self.total.get() {
            Ok(index)
        } else {
            Err(IndexOutOfRangeError {
                index,
                total: self.total.get(),
            })
        }
    }
}

/// Owns a [`ViewportState`] and keeps a [`SyncRenderer`] in step with it.
///
/// This is the only writer of the state. Input adapters and views read it
/// through [`current`](Self::current) / [`state`](Self::state).
#[derive(Clone, Debug)]
pub struct ViewportController<R> {
    state: ViewportState,
    renderer: R,
}

impl<R: SyncRenderer> ViewportController<R> {
    /// Creates a controller at slide `0`.
    ///
    /// The renderer is not invoked; call [`sync`](Self::sync) to paint the
    /// initial state.
    pub fn new(total: NonZeroUsize, renderer: R) -> Self {
        Self {
            state: ViewportState::new(total),
            renderer,
        }
    }

    /// The slide in view.
    #[must_use]
    pub fn current(&self) -> usize {
        self.state.current
    }

    /// Number of slides.
    #[must_use]
    pub fn total(&self) -> usize {
        self.state.total()
    }

    /// A copy of the current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The renderer, mutably.
    ///
    /// Changing the renderer does not change the state; call
    /// [`sync`](Self::sync) to repaint.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the controller, returning the renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Advances one slide, wrapping from the last to the first.
    ///
    /// Returns the new current index.
    pub fn next(&mut self) -> usize {
        self.move_to(self.state.next_index())
    }

    /// Steps back one slide, wrapping from the first to the last.
    ///
    /// Returns the new current index.
    pub fn previous(&mut self) -> usize {
        self.move_to(self.state.previous_index())
    }

    /// Jumps to slide `index`.
    ///
    /// Fails without changing state or rendering if `index` is out of range.
    pub fn goto(&mut self, index: usize) -> Result<usize, IndexOutOfRangeError> {
        let index = self.state.check(index)?;
        Ok(self.move_to(index))
    }

    /// Renders the current state without changing it.
    pub fn sync(&mut self) {
        self.renderer.render(self.state.current, self.state.total());
    }

    fn move_to(&mut self, index: usize) -> usize {
        let (from, total) = (self.state.current, self.state.total());
        debug!(from, to = index, total, "carousel: navigate");
        self.state.current = index;
        self.sync();
        index
    }
}
