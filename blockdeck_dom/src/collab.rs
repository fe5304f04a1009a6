// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seams for the collaborators blocks call but do not implement.
//!
//! ## Icons
//!
//! Blocks emit icon placeholders as `<span class="icon icon-<name>">` and call
//! an [`IconDecorator`] once their tree is complete. Block logic never depends
//! on the replacement having happened.
//!
//! ## Pictures
//!
//! Blocks hand a [`PictureRequest`] to a [`PictureOptimizer`] and append the
//! returned element as-is.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::Element;

/// Replaces icon placeholders with final glyphs.
pub trait IconDecorator {
    /// Decorates every icon placeholder below `root`.
    fn decorate(&mut self, root: &mut Element);
}

/// Leaves icon placeholders untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIcons;

impl IconDecorator for NoIcons {
    fn decorate(&mut self, _root: &mut Element) {}
}

/// Appends an `<img>` pointing at `<base>/<name>.svg` to every placeholder.
///
/// Placeholders that already contain an element are skipped, so decorating
/// twice is harmless.
#[derive(Clone, Debug)]
pub struct SvgIcons {
    base: String,
}

impl SvgIcons {
    /// Creates a decorator that resolves icons under `base` (no trailing slash).
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for SvgIcons {
    fn default() -> Self {
        Self::new("/icons")
    }
}

impl IconDecorator for SvgIcons {
    fn decorate(&mut self, root: &mut Element) {
        let base = &self.base;
        root.for_each_mut(&mut |el| {
            let Some(name) = icon_name(el) else {
                return;
            };
            if el.child_elements().next().is_some() {
                return;
            }
            let img = Element::new("img")
                .with_attr("data-icon-name", name.clone())
                .with_attr("src", format!("{base}/{name}.svg"))
                .with_attr("alt", "")
                .with_attr("loading", "lazy");
            el.append(img);
        });
    }
}

fn icon_name(el: &Element) -> Option<String> {
    if !el.has_class("icon") {
        return None;
    }
    el.classes()
        .iter()
        .find_map(|c| c.strip_prefix("icon-"))
        .map(ToString::to_string)
}

/// Creates an icon placeholder: `<span class="icon icon-<name>" aria-hidden="true">`.
#[must_use]
pub fn icon_placeholder(name: &str) -> Element {
    Element::new("span")
        .with_class(&format!("icon icon-{name}"))
        .with_attr("aria-hidden", "true")
}

/// Names of all icon placeholders below `root`, in document order.
#[must_use]
pub fn icon_names(root: &Element) -> Vec<String> {
    root.find_all(|el| el.has_class("icon"))
        .into_iter()
        .filter_map(icon_name)
        .collect()
}

/// A responsive width hint, optionally scoped to a media query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Media condition, e.g. `(min-width: 600px)`.
    pub media: Option<&'static str>,
    /// Requested rendition width in pixels.
    pub width: u32,
}

impl Breakpoint {
    /// A breakpoint that applies unconditionally.
    #[must_use]
    pub const fn width(width: u32) -> Self {
        Self { media: None, width }
    }

    /// The default hints used when a block does not supply its own.
    pub const DEFAULTS: &'static [Self] = &[
        Self {
            media: Some("(min-width: 600px)"),
            width: 2000,
        },
        Self::width(750),
    ];
}

/// Everything a [`PictureOptimizer`] needs to build a picture.
#[derive(Clone, Copy, Debug)]
pub struct PictureRequest<'a> {
    /// Image address.
    pub src: &'a str,
    /// Alternative text.
    pub alt: &'a str,
    /// Load eagerly instead of lazily.
    pub eager: bool,
    /// Width hints, widest media-scoped first; the last one is the fallback.
    pub breakpoints: &'a [Breakpoint],
}

impl<'a> PictureRequest<'a> {
    /// A lazy request with the default breakpoints.
    #[must_use]
    pub fn new(src: &'a str, alt: &'a str) -> Self {
        Self {
            src,
            alt,
            eager: false,
            breakpoints: Breakpoint::DEFAULTS,
        }
    }

    /// Replaces the width hints.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: &'a [Breakpoint]) -> Self {
        self.breakpoints = breakpoints;
        self
    }
}

/// Produces renderable picture elements from image references.
pub trait PictureOptimizer {
    /// Builds a picture element for `request`.
    fn picture(&mut self, request: &PictureRequest<'_>) -> Element;
}

/// Builds `<picture>` elements with a WebP `<source>` per breakpoint and an
/// `<img>` fallback at the last breakpoint's width.
///
/// Query strings on the source address are dropped and replaced by rendition
/// parameters.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainPictures;

impl PictureOptimizer for PlainPictures {
    fn picture(&mut self, request: &PictureRequest<'_>) -> Element {
        let path = request.src.split('?').next().unwrap_or_default();
        let ext = path
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.contains('/'))
            .unwrap_or("png");

        let mut picture = Element::new("picture");
        for bp in request.breakpoints {
            let srcset = format!("{path}?width={}&format=webply&optimize=medium", bp.width);
            let mut source = Element::new("source")
                .with_attr("type", "image/webp")
                .with_attr("srcset", srcset);
            if let Some(media) = bp.media {
                source.set_attr("media", media);
            }
            picture.append(source);
        }

        let fallback = request.breakpoints.last().map_or(750, |bp| bp.width);
        let src = format!("{path}?width={fallback}&format={ext}&optimize=medium");
        let img = Element::new("img")
            .with_attr("loading", if request.eager { "eager" } else { "lazy" })
            .with_attr("alt", request.alt)
            .with_attr("src", src);
        picture.append(img);
        picture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_names_lists_placeholders_in_order() {
        let root = Element::new("div")
            .with_child(icon_placeholder("bolt"))
            .with_child(Element::new("p").with_child(icon_placeholder("checkmark")))
            .with_child(Element::new("span").with_class("icon"));
        assert_eq!(icon_names(&root), ["bolt", "checkmark"]);
    }

    #[test]
    fn placeholders_are_hidden_from_assistive_tech() {
        let span = icon_placeholder("gift");
        assert_eq!(
            span.to_html(),
            r#"<span class="icon icon-gift" aria-hidden="true"></span>"#
        );
    }

    #[test]
    fn svg_icons_decorate_once() {
        let mut root = Element::new("div").with_child(icon_placeholder("arrow-left"));
        let mut icons = SvgIcons::default();
        icons.decorate(&mut root);
        icons.decorate(&mut root);

        let span = root.child(0).unwrap();
        assert_eq!(span.child_elements().count(), 1);
        let img = span.child(0).unwrap();
        assert_eq!(img.attr("src"), Some("/icons/arrow-left.svg"));
        assert_eq!(img.attr("data-icon-name"), Some("arrow-left"));
    }

    #[test]
    fn plain_pictures_emit_sources_and_fallback() {
        let hints = [Breakpoint::width(600)];
        let request =
            PictureRequest::new("https://cdn/media_1.jpeg?foo=1", "Chart").with_breakpoints(&hints);
        let pic = PlainPictures.picture(&request);

        assert_eq!(pic.tag(), "picture");
        let source = pic.child(0).unwrap();
        assert_eq!(
            source.attr("srcset"),
            Some("https://cdn/media_1.jpeg?width=600&format=webply&optimize=medium")
        );
        assert_eq!(source.attr("media"), None);
        let img = pic.child(1).unwrap();
        assert_eq!(img.attr("loading"), Some("lazy"));
        assert_eq!(img.attr("alt"), Some("Chart"));
        assert_eq!(
            img.attr("src"),
            Some("https://cdn/media_1.jpeg?width=600&format=jpeg&optimize=medium")
        );
    }

    #[test]
    fn default_breakpoints_scope_the_wide_rendition() {
        let pic = PlainPictures.picture(&PictureRequest::new("/a.png", ""));
        assert_eq!(
            pic.child(0).unwrap().attr("media"),
            Some("(min-width: 600px)")
        );
        assert_eq!(pic.child_elements().count(), 3);
    }
}
