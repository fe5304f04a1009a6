// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input normalization: every input channel funnels into one of three commands.
//!
//! | Channel | Input | Command |
//! |---|---|---|
//! | Directional controls | [`Input::Previous`] / [`Input::Next`] | `Previous` / `Next` |
//! | Pagination markers | [`Input::Marker`] | [`Command::Goto`] |
//! | Keyboard (focus inside) | `ArrowLeft` / `ArrowRight` pressed | `Previous` / `Next` |
//! | Swipe | [`Input::Press`] then [`Input::Release`] | `Previous` / `Next` past the threshold |
//!
//! The adapter holds no state besides the in-flight gesture. It never writes
//! the current index; it only calls the [`ViewportController`]'s operations.
//! Inputs are handled one at a time, in the order they are passed in.

use kurbo::Point;
use tracing::warn;
use ui_events::keyboard::{Key, KeyState, NamedKey};

use crate::config::DEFAULT_SWIPE_THRESHOLD;
use crate::{GestureTracker, IndexOutOfRangeError, SwipeIntent, SyncRenderer, ViewportController};

/// One raw input event addressed to a carousel.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// The "previous" control was activated.
    Previous,
    /// The "next" control was activated.
    Next,
    /// The pagination marker for this slide was activated.
    Marker(usize),
    /// A key changed state.
    ///
    /// Only presses navigate; releases are ignored, so hosts may forward
    /// both.
    Key {
        /// The logical key.
        key: Key,
        /// Whether the key went down or up.
        state: KeyState,
        /// Whether focus is inside the carousel's interactive region.
        focus_within: bool,
    },
    /// A touch or pointer press on the track.
    Press(Point),
    /// The matching release.
    Release(Point),
    /// The press was cancelled by the platform.
    Cancel,
}

impl Input {
    /// A key press with focus inside the carousel.
    #[must_use]
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            state: KeyState::Down,
            focus_within: true,
        }
    }
}

/// A normalized navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Step back one slide.
    Previous,
    /// Step forward one slide.
    Next,
    /// Jump to a slide.
    Goto(usize),
}

impl From<SwipeIntent> for Command {
    fn from(intent: SwipeIntent) -> Self {
        match intent {
            SwipeIntent::Previous => Self::Previous,
            SwipeIntent::Next => Self::Next,
        }
    }
}

/// What handling an input did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The viewport moved (or re-rendered in place) to this index.
    Navigated(usize),
    /// A gesture press was recorded; its release decides.
    Tracking,
    /// The input carried no navigation: unrelated key, unfocused key,
    /// sub-threshold swipe, or release without press.
    Ignored,
    /// A direct jump named a slide that does not exist. Nothing changed.
    Rejected(IndexOutOfRangeError),
}

/// Maps raw input onto [`ViewportController`] operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputAdapter {
    gesture: GestureTracker,
    swipe_threshold: f64,
}

impl Default for InputAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl InputAdapter {
    /// Creates an adapter with a fixed swipe threshold in device-independent pixels.
    #[must_use]
    pub fn new(swipe_threshold: f64) -> Self {
        Self {
            gesture: GestureTracker::default(),
            swipe_threshold,
        }
    }

    /// The swipe threshold this adapter was built with.
    #[must_use]
    pub fn swipe_threshold(&self) -> f64 {
        self.swipe_threshold
    }

    /// Returns `true` while a gesture press is in flight.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.gesture.is_tracking()
    }

    /// Turns `input` into a command, updating gesture tracking as needed.
    pub fn normalize(&mut self, input: &Input) -> Option<Command> {
        match input {
            Input::Previous => Some(Command::Previous),
            Input::Next => Some(Command::Next),
            Input::Marker(index) => Some(Command::Goto(*index)),
            Input::Key {
                key,
                state,
                focus_within,
            } => {
                if *focus_within && state.is_down() {
                    arrow_command(key)
                } else {
                    None
                }
            }
            Input::Press(pos) => {
                self.gesture.press(*pos);
                None
            }
            Input::Release(pos) => self
                .gesture
                .release(*pos, self.swipe_threshold)
                .map(Command::from),
            Input::Cancel => {
                self.gesture.cancel();
                None
            }
        }
    }

    /// Handles one input against `viewport`.
    ///
    /// Out-of-range jumps are reported as [`Outcome::Rejected`], never as a panic.
    pub fn handle<R: SyncRenderer>(
        &mut self,
        input: &Input,
        viewport: &mut ViewportController<R>,
    ) -> Outcome {
        let pressed = matches!(input, Input::Press(_));
        match self.normalize(input) {
            Some(command) => execute(command, viewport),
            None if pressed => Outcome::Tracking,
            None => Outcome::Ignored,
        }
    }
}

/// Applies a normalized command to `viewport`.
pub fn execute<R: SyncRenderer>(command: Command, viewport: &mut ViewportController<R>) -> Outcome {
    match command {
        Command::Previous => Outcome::Navigated(viewport.previous()),
        Command::Next => Outcome::Navigated(viewport.next()),
        Command::Goto(index) => match viewport.goto(index) {
            Ok(current) => Outcome::Navigated(current),
            Err(err) => {
                warn!(index, total = err.total, "carousel: rejected jump");
                Outcome::Rejected(err)
            }
        },
    }
}

/// The command bound to `key`, if any.
#[must_use]
pub fn arrow_command(key: &Key) -> Option<Command> {
    match key {
        Key::Named(NamedKey::ArrowLeft) => Some(Command::Previous),
        Key::Named(NamedKey::ArrowRight) => Some(Command::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    #[derive(Debug, Default)]
    struct Recorder(Vec<usize>);

    impl SyncRenderer for Recorder {
        fn render(&mut self, current: usize, _total: usize) {
            self.0.push(current);
        }
    }

    fn viewport(total: usize) -> ViewportController<Recorder> {
        ViewportController::new(NonZeroUsize::new(total).unwrap(), Recorder::default())
    }

    #[test]
    fn controls_map_one_to_one() {
        let mut adapter = InputAdapter::default();
        let mut vp = viewport(4);
        assert_eq!(adapter.handle(&Input::Next, &mut vp), Outcome::Navigated(1));
        assert_eq!(adapter.handle(&Input::Next, &mut vp), Outcome::Navigated(2));
        assert_eq!(
            adapter.handle(&Input::Previous, &mut vp),
            Outcome::Navigated(1)
        );
        assert_eq!(vp.renderer().0, [1, 2, 1]);
    }

    #[test]
    fn rapid_activations_are_each_honored() {
        let mut adapter = InputAdapter::default();
        let mut vp = viewport(3);
        for _ in 0..5 {
            adapter.handle(&Input::Next, &mut vp);
        }
        assert_eq!(vp.current(), 2);
        assert_eq!(vp.renderer().0, [1, 2, 0, 1, 2]);
    }

    #[test]
    fn markers_jump_and_bad_markers_are_rejected() {
        let mut adapter = InputAdapter::default();
        let mut vp = viewport(3);
        assert_eq!(
            adapter.handle(&Input::Marker(2), &mut vp),
            Outcome::Navigated(2)
        );
        assert_eq!(
            adapter.handle(&Input::Marker(3), &mut vp),
            Outcome::Rejected(IndexOutOfRangeError { index: 3, total: 3 })
        );
        assert_eq!(vp.current(), 2);
        assert_eq!(vp.renderer().0, [2]);
    }

    #[test]
    fn arrow_keys_follow_the_controls() {
        let mut adapter = InputAdapter::default();
        let mut vp = viewport(3);
        let left = Input::key(Key::Named(NamedKey::ArrowLeft));
        let right = Input::key(Key::Named(NamedKey::ArrowRight));
        assert_eq!(adapter.handle(&left, &mut vp), Outcome::Navigated(2));
        assert_eq!(adapter.handle(&right, &mut vp), Outcome::Navigated(0));
    }

    #[test]
    fn keys_outside_the_carousel_are_ignored() {
        let mut adapter = InputAdapter::default();
        let mut vp = viewport(3);
        let input = Input::Key {
            key: Key::Named(NamedKey::ArrowRight),
            state: KeyState::Down,
            focus_within: false,
        };
        assert_eq!(adapter.handle(&input, &mut vp), Outcome::Ignored);
        assert!(vp.renderer().0.is_empty());
    }

    #[test]
    fn key_releases_do_not_navigate() {
        let mut adapter = InputAdapter::default();
        let mut vp = viewport(3);
        for state in [KeyState::Down, KeyState::Up] {
            let input = Input::Key {
                key: Key::Named(NamedKey::ArrowRight),
                state,
                focus_within: true,
            };
            adapter.handle(&input, &mut vp);
        }
        assert_eq!(vp.current(), 1);
        assert_eq!(vp.renderer().0, [1]);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut adapter = InputAdapter::default();
        let mut vp = viewport(3);
        for key in [
            Key::Named(NamedKey::ArrowUp),
            Key::Named(NamedKey::Enter),
            Key::Named(NamedKey::Tab),
        ] {
            assert_eq!(adapter.handle(&Input::key(key), &mut vp), Outcome::Ignored);
        }
        assert_eq!(vp.current(), 0);
    }

    #[test]
    fn swipes_navigate_only_past_threshold() {
        let mut adapter = InputAdapter::default();
        let mut vp = viewport(3);

        let mut swipe = |from: f64, to: f64| {
            let pressed = adapter.handle(&Input::Press(Point::new(from, 0.0)), &mut vp);
            assert_eq!(pressed, Outcome::Tracking);
            adapter.handle(&Input::Release(Point::new(to, 0.0)), &mut vp)
        };

        assert_eq!(swipe(100.0, 51.0), Outcome::Ignored);
        assert_eq!(swipe(100.0, 49.0), Outcome::Navigated(1));
        assert_eq!(swipe(100.0, 151.0), Outcome::Navigated(0));
        assert_eq!(swipe(100.0, 149.0), Outcome::Ignored);

        assert_eq!(vp.renderer().0, [1, 0]);
    }

    #[test]
    fn cancel_discards_in_flight_gesture() {
        let mut adapter = InputAdapter::default();
        let mut vp = viewport(3);
        adapter.handle(&Input::Press(Point::new(100.0, 0.0)), &mut vp);
        assert!(adapter.is_tracking());
        assert_eq!(adapter.handle(&Input::Cancel, &mut vp), Outcome::Ignored);
        let release = Input::Release(Point::new(0.0, 0.0));
        assert_eq!(adapter.handle(&release, &mut vp), Outcome::Ignored);
        assert_eq!(vp.current(), 0);
    }

    #[test]
    fn threshold_is_fixed_at_construction() {
        let mut adapter = InputAdapter::new(10.0);
        let mut vp = viewport(2);
        assert_eq!(adapter.swipe_threshold(), 10.0);
        adapter.handle(&Input::Press(Point::new(0.0, 0.0)), &mut vp);
        let release = Input::Release(Point::new(-11.0, 0.0));
        assert_eq!(adapter.handle(&release, &mut vp), Outcome::Navigated(1));
    }
}
