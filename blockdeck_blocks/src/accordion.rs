// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-open accordion.
//!
//! Each row becomes a header button followed by its content panel. At most
//! one panel is open at a time: activating a header closes every panel and,
//! if that header's panel was closed, opens it.
//!
//! ```rust
//! use blockdeck_blocks::Accordion;
//! use blockdeck_dom::Cell;
//!
//! let rows = vec![
//!     vec![Cell::text("Shipping"), Cell::text("Two days.")],
//!     vec![Cell::text("Returns"), Cell::text("Thirty days.")],
//! ];
//! let mut accordion = Accordion::decorate(&rows);
//! assert_eq!(accordion.open(), None);
//!
//! accordion.activate(1);
//! assert_eq!(accordion.open(), Some(1));
//! accordion.activate(0);
//! assert_eq!(accordion.open(), Some(0));
//! accordion.activate(0);
//! assert_eq!(accordion.open(), None);
//! ```

use alloc::format;
use alloc::string::String;

use blockdeck_dom::{Element, Row};
use tracing::{debug, warn};

/// Class of each section header.
pub const ACCORDION_HEADER: &str = "accordion-header";

/// Class of each content panel.
pub const ACCORDION_CONTENT: &str = "accordion-content";

fn content_id(index: usize) -> String {
    format!("{ACCORDION_CONTENT}-{index}")
}

/// A decorated accordion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accordion {
    root: Element,
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// Decorates authored rows. All sections start closed.
    ///
    /// The first cell's markup becomes the header; the second cell's, if any,
    /// becomes the panel.
    #[must_use]
    pub fn decorate(rows: &[Row]) -> Self {
        let mut root = Element::new("div");
        for (index, row) in rows.iter().enumerate() {
            let header = row.first().map(|c| c.markup()).unwrap_or_default();
            let content = row.get(1).map(|c| c.markup()).unwrap_or_default();
            root.append(
                Element::new("button")
                    .with_class(ACCORDION_HEADER)
                    .with_attr("aria-expanded", "false")
                    .with_attr("aria-controls", content_id(index))
                    .with_raw(header),
            );
            root.append(
                Element::new("div")
                    .with_class(ACCORDION_CONTENT)
                    .with_attr("id", content_id(index))
                    .with_attr("aria-hidden", "true")
                    .with_raw(content),
            );
        }
        Self {
            root,
            len: rows.len(),
            open: None,
        }
    }

    /// The decorated block.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.root
    }

    /// Consumes the accordion, returning its element tree.
    #[must_use]
    pub fn into_element(self) -> Element {
        self.root
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The open section, if any.
    #[must_use]
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    /// Activates the header of section `index` and returns the open section.
    ///
    /// Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            warn!(index, len = self.len, "accordion: activate out of range");
            return self.open;
        }
        let was_open = self.open == Some(index);
        if let Some(previous) = self.open.take() {
            self.set_section(previous, false);
        }
        if !was_open {
            self.set_section(index, true);
            self.open = Some(index);
        }
        debug!(index, open = ?self.open, "accordion: activate");
        self.open
    }

    fn set_section(&mut self, index: usize, open: bool) {
        if let Some(header) = self.root.child_mut(2 * index) {
            header.set_attr("aria-expanded", if open { "true" } else { "false" });
        }
        if let Some(content) = self.root.child_mut(2 * index + 1) {
            content.set_attr("aria-hidden", if open { "false" } else { "true" });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use blockdeck_dom::Cell;

    fn sample() -> Accordion {
        Accordion::decorate(&[
            vec![
                Cell::text("Shipping").with_html("<strong>Shipping</strong>"),
                Cell::text("Two days.").with_html("<p>Two days.</p>"),
            ],
            vec![Cell::text("Returns")],
            vec![Cell::text("Warranty"), Cell::text("One year.")],
        ])
    }

    fn expanded(accordion: &Accordion) -> Vec<bool> {
        accordion
            .element()
            .find_all_by_class(ACCORDION_HEADER)
            .into_iter()
            .map(|h| h.attr("aria-expanded") == Some("true"))
            .collect()
    }

    fn hidden(accordion: &Accordion) -> Vec<bool> {
        accordion
            .element()
            .find_all_by_class(ACCORDION_CONTENT)
            .into_iter()
            .map(|c| c.attr("aria-hidden") == Some("true"))
            .collect()
    }

    #[test]
    fn headers_control_their_panels() {
        let accordion = sample();
        let header = accordion.element().child(2).unwrap();
        let content = accordion.element().child(3).unwrap();
        assert_eq!(header.attr("aria-controls"), Some("accordion-content-1"));
        assert_eq!(content.attr("id"), Some("accordion-content-1"));
        assert_eq!(content.children().len(), 1);
        assert_eq!(content.text_content(), "");
        assert_eq!(
            accordion.element().child(0).unwrap().to_html(),
            concat!(
                r#"<button class="accordion-header" aria-expanded="false" "#,
                r#"aria-controls="accordion-content-0"><strong>Shipping</strong></button>"#
            )
        );
    }

    #[test]
    fn at_most_one_section_is_open() {
        let mut accordion = sample();
        assert_eq!(expanded(&accordion), [false, false, false]);

        assert_eq!(accordion.activate(0), Some(0));
        assert_eq!(accordion.activate(2), Some(2));
        assert_eq!(expanded(&accordion), [false, false, true]);
        assert_eq!(hidden(&accordion), [true, true, false]);

        assert_eq!(accordion.activate(2), None);
        assert_eq!(expanded(&accordion), [false, false, false]);
        assert_eq!(hidden(&accordion), [true, true, true]);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut accordion = sample();
        accordion.activate(1);
        let before = accordion.clone();
        assert_eq!(accordion.activate(3), Some(1));
        assert_eq!(accordion, before);
        assert!(Accordion::decorate(&[]).is_empty());
    }
}
