// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content records: the positional mapping from authored rows to slide payloads.
//!
//! Every field is independently optional. A missing or blank cell omits the
//! corresponding part of the slide; it never fails the row.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use blockdeck_dom::{Cell, ImageRef, split_items};

/// Separator between feature bullets in the bullet cell.
pub const BULLET_SEPARATOR: char = '•';

/// Payload of one feature-carousel slide.
///
/// Columns: badge marker, title, description, bullet text, visual.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FeatureRecord {
    /// Whether the slide shows a badge.
    pub badge: bool,
    /// Heading text; `None` when the row has no title cell.
    pub title: Option<String>,
    /// Body text; `None` when the row has no description cell.
    pub description: Option<String>,
    /// Feature bullets, already split and trimmed.
    pub bullets: Vec<String>,
    /// Illustration shown beside the text.
    pub visual: Option<ImageRef>,
}

impl FeatureRecord {
    /// Maps an authored row onto a record by position.
    #[must_use]
    pub fn from_row(row: &[Cell]) -> Self {
        Self {
            badge: row.first().is_some_and(|c| !c.is_blank()),
            title: row.get(1).map(|c| c.trimmed().to_string()),
            description: row.get(2).map(|c| c.trimmed().to_string()),
            bullets: row
                .get(3)
                .map(|c| split_items(&c.text, &[BULLET_SEPARATOR]))
                .unwrap_or_default(),
            visual: row.get(4).and_then(|c| c.image.clone()),
        }
    }
}

/// Payload of one image-carousel slide.
///
/// Columns: visual, caption markup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImageRecord {
    /// The slide image.
    pub visual: Option<ImageRef>,
    /// Caption markup, copied verbatim into the slide.
    pub caption: Option<String>,
}

impl ImageRecord {
    /// Maps an authored row onto a record by position.
    #[must_use]
    pub fn from_row(row: &[Cell]) -> Self {
        Self {
            visual: row.first().and_then(|c| c.image.clone()),
            caption: row.get(1).map(Cell::markup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn full_feature_row_maps_every_column() {
        let row = vec![
            Cell::text("x"),
            Cell::text("  Automate  "),
            Cell::text("Pipelines that run themselves."),
            Cell::text("Fast • Reliable •  • Cheap"),
            Cell::text("See diagram").with_image(ImageRef::new("/media/a.png", "Diagram")),
        ];
        let record = FeatureRecord::from_row(&row);
        assert!(record.badge);
        assert_eq!(record.title.as_deref(), Some("Automate"));
        assert_eq!(
            record.description.as_deref(),
            Some("Pipelines that run themselves.")
        );
        assert_eq!(record.bullets, ["Fast", "Reliable", "Cheap"]);
        assert_eq!(record.visual.map(|v| v.alt), Some("Diagram".to_string()));
    }

    #[test]
    fn missing_trailing_cells_are_omitted() {
        let row = vec![Cell::text("  "), Cell::text("Only a title")];
        let record = FeatureRecord::from_row(&row);
        assert!(!record.badge);
        assert_eq!(record.title.as_deref(), Some("Only a title"));
        assert_eq!(record.description, None);
        assert!(record.bullets.is_empty());
        assert_eq!(record.visual, None);
    }

    #[test]
    fn visual_cell_without_image_is_ignored() {
        let row = vec![
            Cell::default(),
            Cell::default(),
            Cell::default(),
            Cell::default(),
            Cell::text("no picture here"),
        ];
        assert_eq!(FeatureRecord::from_row(&row).visual, None);
    }

    #[test]
    fn image_row_keeps_caption_markup() {
        let row = vec![
            Cell::image(ImageRef::new("/a.jpg", "")),
            Cell::text("Sunset").with_html("<p><em>Sunset</em></p>"),
        ];
        let record = ImageRecord::from_row(&row);
        assert_eq!(record.visual.map(|v| v.src), Some("/a.jpg".to_string()));
        assert_eq!(record.caption.as_deref(), Some("<p><em>Sunset</em></p>"));
        assert_eq!(ImageRecord::from_row(&[]).caption, None);
    }
}
