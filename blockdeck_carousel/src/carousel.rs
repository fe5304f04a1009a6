// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fully assembled carousel: slides, tree, viewport, and input in one place.

use blockdeck_dom::Element;

use crate::{
    CarouselConfig, IndexOutOfRangeError, Input, InputAdapter, Outcome, SlideSet, TreeRenderer,
    ViewportController,
};

/// One carousel instance.
///
/// Each instance owns its own viewport, so any number of carousels can live
/// side by side. The variant constructors ([`Carousel::feature`] and
/// [`Carousel::image`]) build the tree and paint the initial state.
#[derive(Clone, Debug)]
pub struct Carousel<C> {
    slides: SlideSet<C>,
    viewport: ViewportController<TreeRenderer>,
    input: InputAdapter,
    config: CarouselConfig,
}

impl<C> Carousel<C> {
    /// Binds an assembled tree to a fresh viewport and paints slide `0`.
    pub(crate) fn assemble(
        slides: SlideSet<C>,
        renderer: TreeRenderer,
        config: CarouselConfig,
    ) -> Self {
        let mut viewport = ViewportController::new(slides.total(), renderer);
        viewport.sync();
        if let Some(track) = viewport.renderer_mut().track_mut() {
            track.set_style("transition", config.transition.css());
        }
        Self {
            slides,
            viewport,
            input: InputAdapter::new(config.swipe_threshold),
            config,
        }
    }

    /// The slides, in order.
    #[must_use]
    pub fn slides(&self) -> &SlideSet<C> {
        &self.slides
    }

    /// The configuration this carousel was built with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The slide in view.
    #[must_use]
    pub fn current(&self) -> usize {
        self.viewport.current()
    }

    /// Number of slides.
    #[must_use]
    pub fn total(&self) -> usize {
        self.viewport.total()
    }

    /// The carousel's element tree.
    #[must_use]
    pub fn element(&self) -> &Element {
        self.viewport.renderer().root()
    }

    pub(crate) fn root_mut(&mut self) -> &mut Element {
        self.viewport.renderer_mut().root_mut()
    }

    /// Consumes the carousel, returning its element tree.
    #[must_use]
    pub fn into_element(self) -> Element {
        self.viewport.into_renderer().into_root()
    }

    /// Handles one input event.
    pub fn handle(&mut self, input: &Input) -> Outcome {
        self.input.handle(input, &mut self.viewport)
    }

    /// Advances one slide, wrapping.
    pub fn next(&mut self) -> usize {
        self.viewport.next()
    }

    /// Steps back one slide, wrapping.
    pub fn previous(&mut self) -> usize {
        self.viewport.previous()
    }

    /// Jumps to slide `index`.
    pub fn goto(&mut self, index: usize) -> Result<usize, IndexOutOfRangeError> {
        self.viewport.goto(index)
    }
}
