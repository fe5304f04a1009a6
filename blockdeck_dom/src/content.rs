// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Authored content: rows of cells handed over by the extraction layer.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// A reference to an authored image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageRef {
    /// Image address.
    pub src: String,
    /// Alternative text; empty when the author provided none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub alt: String,
}

impl ImageRef {
    /// Creates an image reference.
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// A reference to an authored link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    /// Link target.
    pub href: String,
    /// Visible link text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text: String,
}

impl Link {
    /// Creates a link reference.
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: text.into(),
        }
    }
}

/// One authored table cell.
///
/// `text` is the cell's flattened text content. `html` carries the original
/// markup when the extraction layer preserved it; blocks that copy markup
/// verbatim (captions, accordion panels) prefer it over `text`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Cell {
    /// Flattened text content.
    pub text: String,
    /// Original inner markup, if preserved.
    pub html: Option<String>,
    /// First image found in the cell.
    pub image: Option<ImageRef>,
    /// First link found in the cell.
    pub link: Option<Link>,
}

/// One authored table row.
pub type Row = Vec<Cell>;

impl Cell {
    /// Creates a text-only cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Creates a cell that holds only an image.
    pub fn image(image: ImageRef) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    /// Creates a cell whose content is a single link.
    pub fn link(link: Link) -> Self {
        Self {
            text: link.text.clone(),
            link: Some(link),
            ..Self::default()
        }
    }

    /// Attaches preserved markup to this cell.
    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Attaches an image to this cell.
    #[must_use]
    pub fn with_image(mut self, image: ImageRef) -> Self {
        self.image = Some(image);
        self
    }

    /// Attaches a link to this cell.
    #[must_use]
    pub fn with_link(mut self, link: Link) -> Self {
        self.link = Some(link);
        self
    }

    /// Returns the text content with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Returns `true` if the cell has no visible text.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Returns the cell's markup: preserved HTML if present, escaped text otherwise.
    #[must_use]
    pub fn markup(&self) -> String {
        match &self.html {
            Some(html) => html.clone(),
            None => crate::escape_text(&self.text),
        }
    }
}

/// Concatenated, trimmed text content of a whole row.
#[must_use]
pub fn row_text(row: &[Cell]) -> String {
    let mut out = String::new();
    for cell in row {
        out.push_str(&cell.text);
    }
    out.trim().to_string()
}

/// Splits a delimited list into trimmed, non-empty items.
///
/// ```rust
/// use blockdeck_dom::split_items;
///
/// assert_eq!(split_items(" Fast • Safe •  • Small ", &['•']), ["Fast", "Safe", "Small"]);
/// assert_eq!(split_items("ai, ml•data", &[',', '•']), ["ai", "ml", "data"]);
/// ```
#[must_use]
pub fn split_items(text: &str, separators: &[char]) -> Vec<String> {
    text.split(|c: char| separators.contains(&c))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn blank_cells_ignore_whitespace() {
        assert!(Cell::text("  \n\t").is_blank());
        assert!(!Cell::text(" x ").is_blank());
        assert_eq!(Cell::text(" x ").trimmed(), "x");
    }

    #[test]
    fn markup_prefers_preserved_html() {
        let cell = Cell::text("a < b").with_html("<p>a &lt; b</p>");
        assert_eq!(cell.markup(), "<p>a &lt; b</p>");
        assert_eq!(Cell::text("a < b").markup(), "a &lt; b");
    }

    #[test]
    fn row_text_concatenates_cells() {
        let row = vec![Cell::text(" Limited "), Cell::text("Offer ")];
        assert_eq!(row_text(&row), "Limited Offer");
    }

    #[test]
    fn link_cell_takes_link_text() {
        let cell = Cell::link(Link::new("/trial", "Start"));
        assert_eq!(cell.trimmed(), "Start");
        assert_eq!(cell.link.as_ref().map(|l| l.href.as_str()), Some("/trial"));
    }

    #[test]
    fn mixed_cell_keeps_text_image_and_link() {
        let cell = Cell::text(" Read more ")
            .with_image(ImageRef::new("/hero.png", "Hero"))
            .with_link(Link::new("/docs", "Docs"));
        assert_eq!(cell.trimmed(), "Read more");
        assert_eq!(cell.image, Some(ImageRef::new("/hero.png", "Hero")));
        assert_eq!(cell.link, Some(Link::new("/docs", "Docs")));
        assert_eq!(cell.markup(), " Read more ");
    }

    #[test]
    fn split_items_drops_empty_entries() {
        assert!(split_items(" • • ", &['•']).is_empty());
        assert_eq!(split_items("one", &['•']), ["one"]);
    }
}
