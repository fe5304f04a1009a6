// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`SyncRenderer`] that writes [`ViewFacts`] into an element tree.

use alloc::vec::Vec;

use blockdeck_dom::Element;
use tracing::{trace, warn};

use crate::{SyncRenderer, ViewFacts};

/// Where the carousel's dependent elements live inside its root element.
///
/// Paths are child-element indices from the root (see [`Element::at_path`]).
/// Slides are the element children of the track; markers are the element
/// children of the marker list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeLayout {
    /// Path to the slide track.
    pub track: Vec<usize>,
    /// Path to the pagination marker list.
    pub markers: Vec<usize>,
    /// Class toggled on the active marker.
    pub active_class: &'static str,
}

/// Owns a carousel's element tree and keeps it in step with the viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRenderer {
    root: Element,
    layout: TreeLayout,
}

impl TreeRenderer {
    /// Wraps `root`, whose track and markers are found via `layout`.
    #[must_use]
    pub fn new(root: Element, layout: TreeLayout) -> Self {
        Self { root, layout }
    }

    /// The element tree.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The element tree, mutably.
    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Consumes the renderer, returning the element tree.
    #[must_use]
    pub fn into_root(self) -> Element {
        self.root
    }

    /// The slide track element.
    #[must_use]
    pub fn track(&self) -> Option<&Element> {
        self.root.at_path(&self.layout.track)
    }

    /// The slide track element, mutably.
    pub fn track_mut(&mut self) -> Option<&mut Element> {
        self.root.at_path_mut(&self.layout.track)
    }

    /// The pagination marker list.
    #[must_use]
    pub fn markers(&self) -> Option<&Element> {
        self.root.at_path(&self.layout.markers)
    }

    /// Writes `facts` into the tree.
    pub fn apply(&mut self, facts: ViewFacts) {
        if let Some(track) = self.root.at_path_mut(&self.layout.track) {
            track.set_style("transform", facts.track_offset().css_transform());
            for (slide, exposure) in track.child_elements_mut().zip(facts.slides()) {
                slide.set_attr("tabindex", exposure.tabindex());
                slide.set_attr("aria-hidden", exposure.aria_hidden());
            }
        }
        let active_class = self.layout.active_class;
        if let Some(markers) = self.root.at_path_mut(&self.layout.markers) {
            for (marker, state) in markers.child_elements_mut().zip(facts.markers()) {
                marker.toggle_class(active_class, state.active);
                marker.set_attr("aria-current", state.aria_current());
            }
        }
    }
}

impl SyncRenderer for TreeRenderer {
    fn render(&mut self, current: usize, total: usize) {
        let Some(facts) = ViewFacts::checked(current, total) else {
            warn!(current, total, "carousel: render out of range");
            return;
        };
        trace!(current, total, "carousel: render");
        self.apply(facts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn fixture(total: usize) -> TreeRenderer {
        let mut track = Element::new("div").with_class("track");
        let mut dots = Element::new("div").with_class("dots");
        for _ in 0..total {
            track.append(Element::new("div").with_class("slide"));
            dots.append(Element::new("button").with_class("dot"));
        }
        let root = Element::new("div").with_child(track).with_child(dots);
        TreeRenderer::new(
            root,
            TreeLayout {
                track: vec![0],
                markers: vec![1],
                active_class: "active",
            },
        )
    }

    #[test]
    fn render_updates_every_dependent() {
        let mut r = fixture(3);
        r.render(1, 3);

        assert_eq!(
            r.track().unwrap().style("transform"),
            Some("translateX(-100%)")
        );
        let slides: Vec<(Option<&str>, Option<&str>)> = r
            .track()
            .unwrap()
            .child_elements()
            .map(|s| (s.attr("tabindex"), s.attr("aria-hidden")))
            .collect();
        assert_eq!(
            slides,
            [
                (Some("-1"), Some("true")),
                (Some("0"), Some("false")),
                (Some("-1"), Some("true")),
            ]
        );
        let active: Vec<bool> = r
            .markers()
            .unwrap()
            .child_elements()
            .map(|d| d.has_class("active"))
            .collect();
        assert_eq!(active, [false, true, false]);
        let current: Vec<Option<&str>> = r
            .markers()
            .unwrap()
            .child_elements()
            .map(|d| d.attr("aria-current"))
            .collect();
        assert_eq!(current, [Some("false"), Some("true"), Some("false")]);
    }

    #[test]
    fn render_is_idempotent() {
        let mut r = fixture(4);
        r.render(2, 4);
        let once = r.clone();
        r.render(2, 4);
        assert_eq!(r, once);
    }

    #[test]
    fn moving_away_clears_previous_marker() {
        let mut r = fixture(2);
        r.render(0, 2);
        r.render(1, 2);
        let markers = r.markers().unwrap();
        assert!(!markers.child(0).unwrap().has_class("active"));
        assert_eq!(markers.find_all_by_class("active").len(), 1);
    }

    #[test]
    fn out_of_range_render_is_skipped() {
        let mut r = fixture(3);
        r.render(1, 3);
        let before = r.clone();
        r.render(3, 3);
        r.render(0, 0);
        assert_eq!(r, before);
    }

    #[test]
    fn missing_paths_are_skipped() {
        let mut r = TreeRenderer::new(
            Element::new("div"),
            TreeLayout {
                track: vec![3],
                markers: vec![4],
                active_class: "active",
            },
        );
        r.render(0, 1);
        assert_eq!(r.root(), &Element::new("div"));
    }
}
