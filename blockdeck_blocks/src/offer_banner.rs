// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offer banner: a promotional panel built from up to six rows.
//!
//! Rows, in order: badge text, heading, description, features (separated by
//! `•`), call to action, bottom text. Each present row produces its section,
//! even when its text is empty; missing rows produce nothing.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use blockdeck_dom::{Element, IconDecorator, Link, Row, icon_placeholder, row_text, split_items};

/// Block class of the offer banner.
pub const OFFER_BANNER_BLOCK: &str = "offer-banner";

/// Accessible label of the call-to-action button.
pub const OFFER_CTA_LABEL: &str = "Start your free 14-day trial";

/// Separator between features in the features row.
pub const FEATURE_SEPARATOR: char = '•';

fn class(suffix: &str) -> String {
    format!("{OFFER_BANNER_BLOCK}-{suffix}")
}

/// Content of an offer banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OfferRecord {
    /// Badge text shown beside a gift icon.
    pub badge: Option<String>,
    /// Main heading.
    pub heading: Option<String>,
    /// Supporting copy.
    pub description: Option<String>,
    /// Feature list; `Some` with no items still renders an empty list.
    pub features: Option<Vec<String>>,
    /// Call-to-action link.
    pub cta: Option<Link>,
    /// Fine print below the button.
    pub bottom_text: Option<String>,
}

impl OfferRecord {
    /// Maps authored rows onto the banner by position.
    ///
    /// The call to action takes the first link in its row; without one it
    /// points at `#` and uses the row's text as its label.
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Self {
        let text = |i: usize| rows.get(i).map(|row| row_text(row));
        Self {
            badge: text(0),
            heading: text(1),
            description: text(2),
            features: text(3).map(|t| split_items(&t, &[FEATURE_SEPARATOR])),
            cta: rows.get(4).map(|row| {
                let link = row.iter().find_map(|c| c.link.as_ref());
                let label = link
                    .map(|l| l.text.trim())
                    .filter(|t| !t.is_empty())
                    .map_or_else(|| row_text(row), ToString::to_string);
                Link::new(link.map_or("#", |l| l.href.as_str()), label)
            }),
            bottom_text: text(5),
        }
    }

    /// Renders the banner and runs the icon decorator once over it.
    pub fn render(&self, icons: &mut impl IconDecorator) -> Element {
        let mut container = Element::new("div").with_class(&class("container"));

        if let Some(badge) = &self.badge {
            container.append(
                Element::new("div")
                    .with_class(&class("badge"))
                    .with_child(icon_placeholder("gift"))
                    .with_text(badge.clone()),
            );
        }
        if let Some(heading) = &self.heading {
            container.append(
                Element::new("h1")
                    .with_class(&class("heading"))
                    .with_text(heading.clone()),
            );
        }
        if let Some(description) = &self.description {
            container.append(
                Element::new("p")
                    .with_class(&class("description"))
                    .with_text(description.clone()),
            );
        }
        if let Some(features) = &self.features {
            let mut list = Element::new("div").with_class(&class("features"));
            for feature in features {
                list.append(
                    Element::new("div")
                        .with_class(&class("feature"))
                        .with_child(icon_placeholder("checkmark"))
                        .with_child(Element::new("span").with_text(feature.clone())),
                );
            }
            container.append(list);
        }
        if let Some(cta) = &self.cta {
            let button = Element::new("a")
                .with_class(&class("button"))
                .with_attr("href", cta.href.clone())
                .with_attr("aria-label", OFFER_CTA_LABEL)
                .with_child(icon_placeholder("rocket"))
                .with_text(cta.text.clone());
            container.append(
                Element::new("div")
                    .with_class(&class("cta"))
                    .with_child(button),
            );
        }
        if let Some(bottom) = &self.bottom_text {
            container.append(
                Element::new("p")
                    .with_class(&class("bottom-text"))
                    .with_text(bottom.clone()),
            );
        }

        let mut root = Element::new("div")
            .with_class(OFFER_BANNER_BLOCK)
            .with_child(container);
        icons.decorate(&mut root);
        root
    }
}

/// Decorates authored rows as an offer banner.
pub fn offer_banner(rows: &[Row], icons: &mut impl IconDecorator) -> Element {
    OfferRecord::from_rows(rows).render(icons)
}
