// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

/// A slide set was requested from zero content records.
///
/// A carousel with no slides is not a valid state; construction stops here and
/// no viewport is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("a carousel needs at least one slide, but no content records were supplied")]
pub struct EmptyInputError;

/// A direct navigation targeted an index that does not name a slide.
///
/// The viewport is left unchanged when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("slide index {index} is out of range for a carousel of {total} slides")]
pub struct IndexOutOfRangeError {
    /// The rejected index.
    pub index: usize,
    /// Number of slides in the carousel.
    pub total: usize,
}

/// Any error raised while assembling or driving a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// See [`EmptyInputError`].
    #[error(transparent)]
    EmptyInput(#[from] EmptyInputError),
    /// See [`IndexOutOfRangeError`].
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexOutOfRangeError),
}
