// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The image carousel: one picture and an optional caption per slide, with
//! pagination dots only.

use alloc::string::ToString;
use alloc::vec;

use blockdeck_dom::{Element, PictureOptimizer, PictureRequest, Row};

use crate::{
    Carousel, CarouselConfig, CarouselError, ImageRecord, SlideSet, TreeLayout, TreeRenderer,
};

/// Block class of the image carousel.
pub const IMAGE_BLOCK: &str = "carousel";

/// A carousel of [`ImageRecord`] slides.
pub type ImageCarousel = Carousel<ImageRecord>;

impl Carousel<ImageRecord> {
    /// Decorates authored rows as an image carousel.
    ///
    /// Each row becomes one slide (see [`ImageRecord::from_row`]). A row
    /// without an image still becomes a slide, just without a picture.
    pub fn image(
        rows: &[Row],
        config: CarouselConfig,
        pictures: &mut impl PictureOptimizer,
    ) -> Result<Self, CarouselError> {
        Self::image_from_records(
            rows.iter().map(|row| ImageRecord::from_row(row)),
            config,
            pictures,
        )
    }

    /// Builds an image carousel from ready-made records.
    pub fn image_from_records(
        records: impl IntoIterator<Item = ImageRecord>,
        config: CarouselConfig,
        pictures: &mut impl PictureOptimizer,
    ) -> Result<Self, CarouselError> {
        let slides = SlideSet::build(records)?;

        let mut wrapper = Element::new("div").with_class("carousel-wrapper");
        let mut nav = Element::new("div").with_class("carousel-nav");
        for slide in &slides {
            let record = slide.content();
            let index = slide.index().to_string();

            let mut panel = Element::new("div")
                .with_class("carousel-slide")
                .with_attr("data-index", index.clone());
            if let Some(visual) = &record.visual {
                panel.append(pictures.picture(&PictureRequest::new(&visual.src, &visual.alt)));
            }
            if let Some(caption) = &record.caption {
                panel.append(
                    Element::new("div")
                        .with_class("carousel-text")
                        .with_raw(caption.clone()),
                );
            }
            wrapper.append(panel);

            nav.append(
                Element::new("button")
                    .with_class("carousel-dot")
                    .with_attr("data-index", index)
                    .with_attr("aria-label", config.labels.marker(slide.index())),
            );
        }

        let root = Element::new("div")
            .with_class(IMAGE_BLOCK)
            .with_child(wrapper)
            .with_child(nav);
        let layout = TreeLayout {
            track: vec![0],
            markers: vec![1],
            active_class: "active",
        };
        Ok(Self::assemble(slides, TreeRenderer::new(root, layout), config))
    }
}
