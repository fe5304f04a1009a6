// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The feature carousel: badge, title, description, bullets, and a visual per slide,
//! with previous/next arrows and pagination dots.

use alloc::format;
use alloc::string::String;
use alloc::vec;

use blockdeck_dom::{
    Breakpoint, Element, IconDecorator, PictureOptimizer, PictureRequest, Row, icon_placeholder,
};

use crate::{
    Carousel, CarouselConfig, CarouselError, FeatureRecord, Slide, SlideSet, TreeLayout,
    TreeRenderer,
};

/// Block class of the feature carousel.
pub const FEATURE_BLOCK: &str = "feature-carousel";

const VISUAL_BREAKPOINTS: &[Breakpoint] = &[Breakpoint::width(600)];

/// A carousel of [`FeatureRecord`] slides.
pub type FeatureCarousel = Carousel<FeatureRecord>;

fn class(suffix: &str) -> String {
    format!("{FEATURE_BLOCK}-{suffix}")
}

fn render_slide(slide: &Slide<FeatureRecord>, pictures: &mut impl PictureOptimizer) -> Element {
    let record = slide.content();
    let mut content = Element::new("div").with_class(&class("content"));

    if record.badge {
        content.append(
            Element::new("div")
                .with_class(&class("badge"))
                .with_child(icon_placeholder("bolt")),
        );
    }
    if let Some(title) = &record.title {
        content.append(
            Element::new("h2")
                .with_class(&class("title"))
                .with_text(title.clone()),
        );
    }
    if let Some(description) = &record.description {
        content.append(
            Element::new("p")
                .with_class(&class("desc"))
                .with_text(description.clone()),
        );
    }
    if !record.bullets.is_empty() {
        let mut list = Element::new("ul").with_class(&class("bullets"));
        for bullet in &record.bullets {
            list.append(
                Element::new("li")
                    .with_child(icon_placeholder("checkmark"))
                    .with_text(format!(" {bullet}")),
            );
        }
        content.append(list);
    }

    let mut panel = Element::new("div")
        .with_class(&class("slide"))
        .with_attr("role", "group")
        .with_attr("aria-roledescription", "slide")
        .with_child(content);

    if let Some(visual) = &record.visual {
        let request =
            PictureRequest::new(&visual.src, &visual.alt).with_breakpoints(VISUAL_BREAKPOINTS);
        panel.append(
            Element::new("div")
                .with_class(&class("visual"))
                .with_child(pictures.picture(&request)),
        );
    }
    panel
}

impl Carousel<FeatureRecord> {
    /// Decorates authored rows as a feature carousel.
    ///
    /// Each row becomes one slide (see [`FeatureRecord::from_row`]).
    pub fn feature(
        rows: &[Row],
        config: CarouselConfig,
        pictures: &mut impl PictureOptimizer,
        icons: &mut impl IconDecorator,
    ) -> Result<Self, CarouselError> {
        Self::feature_from_records(
            rows.iter().map(|row| FeatureRecord::from_row(row)),
            config,
            pictures,
            icons,
        )
    }

    /// Builds a feature carousel from ready-made records.
    pub fn feature_from_records(
        records: impl IntoIterator<Item = FeatureRecord>,
        config: CarouselConfig,
        pictures: &mut impl PictureOptimizer,
        icons: &mut impl IconDecorator,
    ) -> Result<Self, CarouselError> {
        let slides = SlideSet::build(records)?;
        let labels = config.labels;

        let mut track = Element::new("div").with_class(&class("track"));
        for slide in &slides {
            track.append(render_slide(slide, pictures));
        }

        let prev = Element::new("button")
            .with_class(&format!("{} {}", class("arrow"), class("arrow-prev")))
            .with_attr("aria-label", labels.previous)
            .with_child(icon_placeholder("arrow-left"));
        let next = Element::new("button")
            .with_class(&format!("{} {}", class("arrow"), class("arrow-next")))
            .with_attr("aria-label", labels.next)
            .with_child(icon_placeholder("arrow-right"));

        let mut dots = Element::new("div").with_class(&class("dots"));
        for slide in &slides {
            dots.append(
                Element::new("button")
                    .with_class(&class("dot"))
                    .with_attr("aria-label", labels.marker(slide.index())),
            );
        }

        let container = Element::new("div")
            .with_class(&class("container"))
            .with_child(prev)
            .with_child(
                Element::new("div")
                    .with_class(&class("track-wrapper"))
                    .with_child(track),
            )
            .with_child(next);

        let root = Element::new("div")
            .with_class(FEATURE_BLOCK)
            .with_attr("role", "region")
            .with_attr("aria-roledescription", "carousel")
            .with_child(container)
            .with_child(dots);

        let layout = TreeLayout {
            track: vec![0, 1, 0],
            markers: vec![1],
            active_class: "active",
        };
        let mut carousel = Self::assemble(slides, TreeRenderer::new(root, layout), config);
        icons.decorate(carousel.root_mut());
        Ok(carousel)
    }
}
