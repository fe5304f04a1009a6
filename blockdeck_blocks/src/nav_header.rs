// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation header: logo and brand, four navigation links, sign-in and CTA.

use alloc::string::{String, ToString};

use blockdeck_dom::{Cell, Element, Row};

/// Class of the generated `<header>`.
pub const NAV_HEADER_BLOCK: &str = "ai-nav-header";

/// Alternative text of the logo image.
pub const LOGO_ALT: &str = "AI Accelerator Logo";

/// Number of navigation links.
pub const NAV_LINKS: usize = 4;

/// Content of a navigation header. Missing cells read as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavHeaderRecord {
    /// Logo image address.
    pub logo_src: String,
    /// Brand name beside the logo.
    pub brand: String,
    /// Navigation link labels.
    pub links: [String; NAV_LINKS],
    /// Sign-in link label.
    pub sign_in: String,
    /// Call-to-action button label.
    pub cta: String,
}

impl NavHeaderRecord {
    /// Reads the first row; `None` when there are no rows.
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Option<Self> {
        let row = rows.first()?;
        let cell = |i: usize| row.get(i).map(Cell::trimmed).unwrap_or("").to_string();
        Some(Self {
            logo_src: cell(0),
            brand: cell(1),
            links: core::array::from_fn(|i| cell(2 + i)),
            sign_in: cell(2 + NAV_LINKS),
            cta: cell(3 + NAV_LINKS),
        })
    }

    /// Renders the header.
    #[must_use]
    pub fn render(&self) -> Element {
        let left = Element::new("div")
            .with_class("left-section")
            .with_child(
                Element::new("img")
                    .with_class("logo")
                    .with_attr("src", self.logo_src.clone())
                    .with_attr("alt", LOGO_ALT),
            )
            .with_child(
                Element::new("span")
                    .with_class("brand-text")
                    .with_text(self.brand.clone()),
            );

        let mut list = Element::new("ul").with_class("nav-list");
        for label in &self.links {
            list.append(
                Element::new("li").with_class("nav-item").with_child(
                    Element::new("a")
                        .with_attr("href", "#")
                        .with_text(label.clone()),
                ),
            );
        }
        let center = Element::new("div").with_class("center-section").with_child(
            Element::new("nav")
                .with_attr("role", "navigation")
                .with_child(list),
        );

        let right = Element::new("div")
            .with_class("right-section")
            .with_child(
                Element::new("a")
                    .with_class("sign-in")
                    .with_attr("href", "#")
                    .with_text(self.sign_in.clone()),
            )
            .with_child(
                Element::new("button")
                    .with_class("cta-button")
                    .with_text(self.cta.clone()),
            );

        Element::new("header")
            .with_class(NAV_HEADER_BLOCK)
            .with_child(
                Element::new("div")
                    .with_class("container")
                    .with_child(left)
                    .with_child(center)
                    .with_child(right),
            )
    }
}

/// Decorates authored rows as a navigation header.
///
/// Returns `None` when there are no rows, in which case the block should be
/// left as authored.
#[must_use]
pub fn nav_header(rows: &[Row]) -> Option<Element> {
    NavHeaderRecord::from_rows(rows).map(|record| record.render())
}
