// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide sets: the fixed, ordered panels of one carousel.
//!
//! ## Usage
//!
//! 1) Turn authored rows into content records (see [`crate::FeatureRecord`] and
//!    [`crate::ImageRecord`]) or any other payload type.
//! 2) Call [`SlideSet::build`] once. Each record becomes a [`Slide`] whose
//!    index is its position in the input.
//! 3) Hand the set's [`total`](SlideSet::total) to a
//!    [`ViewportController`](crate::ViewportController).
//!
//! ```
//! use blockdeck_carousel::{EmptyInputError, SlideSet};
//!
//! let set = SlideSet::build(["intro", "pricing", "faq"]).unwrap();
//! assert_eq!(set.total().get(), 3);
//! assert_eq!(set.get(1).map(|s| *s.content()), Some("pricing"));
//!
//! let empty: Result<SlideSet<&str>, _> = SlideSet::build([]);
//! assert_eq!(empty.unwrap_err(), EmptyInputError);
//! ```

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use crate::EmptyInputError;

/// One navigable panel.
///
/// Both the index and the content are fixed at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slide<C> {
    index: usize,
    content: C,
}

impl<C> Slide<C> {
    /// Position of this slide within its set (0-based).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The slide's payload.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }
}

/// A fixed-length, ordered, non-empty sequence of [`Slide`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideSet<C> {
    slides: Vec<Slide<C>>,
    total: NonZeroUsize,
}

impl<C> SlideSet<C> {
    /// Builds a slide set from content records in order.
    ///
    /// Returns [`EmptyInputError`] if `records` is empty.
    pub fn build<I>(records: I) -> Result<Self, EmptyInputError>
    where
        I: IntoIterator<Item = C>,
    {
        let slides: Vec<Slide<C>> = records
            .into_iter()
            .enumerate()
            .map(|(index, content)| Slide { index, content })
            .collect();
        let total = NonZeroUsize::new(slides.len()).ok_or(EmptyInputError)?;
        Ok(Self { slides, total })
    }

    /// Number of slides; never zero.
    #[must_use]
    pub fn total(&self) -> NonZeroUsize {
        self.total
    }

    /// Returns the slide at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide<C>> {
        self.slides.get(index)
    }

    /// Returns all slides in order.
    #[must_use]
    pub fn slides(&self) -> &[Slide<C>] {
        &self.slides
    }

    /// Iterates over slides in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Slide<C>> {
        self.slides.iter()
    }
}

impl<'a, C> IntoIterator for &'a SlideSet<C> {
    type Item = &'a Slide<C>;
    type IntoIter = core::slice::Iter<'a, Slide<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}
