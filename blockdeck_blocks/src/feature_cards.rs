// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feature cards: an optional section header above a grid of cards.
//!
//! ## Rows
//!
//! - An optional heading row and, after it, an optional subheading row. Each
//!   is a single non-empty cell whose text contains no `|`.
//! - One row per card: icon name, title, description, tags (split on `,` or
//!   `•`), call to action.
//!
//! A card with a non-blank call-to-action cell is *featured*: it gets a
//! decorative quote icon and a CTA link (or a plain button when the cell holds
//! no link). Any other card whose row contains a link behaves as a link as a
//! whole; see [`FeatureCards::activate`].

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use blockdeck_dom::{Cell, Element, IconDecorator, Link, Row, icon_placeholder, split_items};
use tracing::debug;
use ui_events::keyboard::{Key, NamedKey};

/// Block class of the feature cards block.
pub const FEATURE_CARDS_BLOCK: &str = "feature-cards";

/// Separators accepted in the tags cell.
pub const TAG_SEPARATORS: &[char] = &[',', '•'];

/// Fallback subject of a CTA's accessible label when the card has no title.
const UNTITLED_SUBJECT: &str = "Learn more";

fn class(suffix: &str) -> String {
    format!("{FEATURE_CARDS_BLOCK}-{suffix}")
}

/// A featured card's call to action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallToAction {
    /// Navigates to the link target.
    Link(Link),
    /// A button carrying only a label.
    Button(String),
}

/// Payload of one card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardRecord {
    /// Icon name, rendered as an `icon-<name>` placeholder.
    pub icon: Option<String>,
    /// Card heading.
    pub title: Option<String>,
    /// Card body.
    pub description: Option<String>,
    /// Tag labels.
    pub tags: Vec<String>,
    /// Call to action; its presence makes the card featured.
    pub cta: Option<CallToAction>,
    /// First link anywhere in the row.
    pub link: Option<Link>,
}

impl CardRecord {
    /// Maps an authored row onto a card by position.
    #[must_use]
    pub fn from_row(row: &[Cell]) -> Self {
        let non_blank = |i: usize| row.get(i).filter(|c| !c.is_blank());
        Self {
            icon: non_blank(0).map(|c| c.trimmed().to_string()),
            title: row.get(1).map(|c| c.trimmed().to_string()),
            description: row.get(2).map(|c| c.trimmed().to_string()),
            tags: non_blank(3)
                .map(|c| split_items(&c.text, TAG_SEPARATORS))
                .unwrap_or_default(),
            cta: non_blank(4).map(|c| match &c.link {
                Some(link) => CallToAction::Link(Link::new(link.href.clone(), link.text.trim())),
                None => CallToAction::Button(c.trimmed().to_string()),
            }),
            link: row.iter().find_map(|c| c.link.clone()),
        }
    }

    /// Whether the card carries a call to action.
    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.cta.is_some()
    }

    /// Where activating the whole card navigates, if anywhere.
    ///
    /// Featured cards navigate only through their CTA.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        if self.is_featured() {
            return None;
        }
        self.link.as_ref().map(|l| l.href.as_str())
    }

    fn render(&self) -> Element {
        let mut card = Element::new("div").with_class(&class("card"));

        if let Some(icon) = &self.icon {
            card.append(
                Element::new("div")
                    .with_class(&class("icon"))
                    .with_child(icon_placeholder(icon)),
            );
        }
        if let Some(title) = &self.title {
            card.append(
                Element::new("h3")
                    .with_class(&class("title"))
                    .with_text(title.clone()),
            );
        }
        if let Some(description) = &self.description {
            card.append(
                Element::new("p")
                    .with_class(&class("description"))
                    .with_text(description.clone()),
            );
        }
        if !self.tags.is_empty() {
            let mut tags = Element::new("div").with_class(&class("tags"));
            for tag in &self.tags {
                tags.append(
                    Element::new("span")
                        .with_class(&class("tag"))
                        .with_text(tag.clone()),
                );
            }
            card.append(tags);
        }

        if let Some(cta) = &self.cta {
            card.add_class("featured");
            card.append(
                Element::new("div")
                    .with_class(&class("decorative"))
                    .with_child(icon_placeholder("quote")),
            );
            let button = match cta {
                CallToAction::Link(link) => {
                    let subject = self
                        .title
                        .as_deref()
                        .filter(|t| !t.is_empty())
                        .unwrap_or(UNTITLED_SUBJECT);
                    Element::new("a")
                        .with_class(&class("button"))
                        .with_attr("href", link.href.clone())
                        .with_attr("aria-label", format!("{} - {subject}", link.text))
                        .with_text(link.text.clone())
                }
                CallToAction::Button(label) => Element::new("button")
                    .with_class(&class("button"))
                    .with_attr("type", "button")
                    .with_text(label.clone()),
            };
            card.append(
                Element::new("div")
                    .with_class(&class("cta"))
                    .with_child(button.with_child(icon_placeholder("arrow-right"))),
            );
        } else if self.link.is_some() {
            card.set_style("cursor", "pointer");
            card.set_attr("role", "link");
            card.set_attr("tabindex", "0");
        }
        card
    }
}

/// How a user activated a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardActivation {
    /// A pointer click.
    Click,
    /// A key press while the card has focus.
    Key(Key),
}

impl CardActivation {
    /// Whether this activation should follow the card's link.
    ///
    /// Clicks, `Enter`, and the space bar do; every other key does not.
    #[must_use]
    pub fn follows_link(&self) -> bool {
        match self {
            Self::Click => true,
            Self::Key(Key::Named(NamedKey::Enter)) => true,
            Self::Key(Key::Character(c)) => c == " ",
            Self::Key(_) => false,
        }
    }
}

/// A decorated feature cards block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureCards {
    root: Element,
    cards: Vec<CardRecord>,
}

impl FeatureCards {
    /// Decorates authored rows. The icon decorator runs once, over the finished block.
    pub fn decorate(rows: &[Row], icons: &mut impl IconDecorator) -> Self {
        let mut rest = rows;
        let mut heading = None;
        let mut subheading = None;
        if let Some(text) = rest.first().and_then(|row| header_text(row)) {
            heading = Some(text);
            rest = &rest[1..];
            if let Some(text) = rest.first().and_then(|row| header_text(row)) {
                subheading = Some(text);
                rest = &rest[1..];
            }
        }
        let cards = rest.iter().map(|row| CardRecord::from_row(row)).collect();
        Self::from_records(heading, subheading, cards, icons)
    }

    /// Builds the block from a header and ready-made cards.
    ///
    /// A subheading without a heading is not shown.
    pub fn from_records(
        heading: Option<String>,
        subheading: Option<String>,
        cards: Vec<CardRecord>,
        icons: &mut impl IconDecorator,
    ) -> Self {
        let mut container = Element::new("div").with_class(&class("container"));
        if let Some(heading) = heading {
            let mut header = Element::new("div")
                .with_class(&class("header"))
                .with_child(
                    Element::new("h2")
                        .with_class(&class("heading"))
                        .with_text(heading),
                );
            if let Some(subheading) = subheading {
                header.append(
                    Element::new("p")
                        .with_class(&class("subheading"))
                        .with_text(subheading),
                );
            }
            container.append(header);
        }

        let mut grid = Element::new("div").with_class(&class("grid"));
        for card in &cards {
            grid.append(card.render());
        }
        container.append(grid);

        let mut root = Element::new("div")
            .with_class(FEATURE_CARDS_BLOCK)
            .with_child(container);
        icons.decorate(&mut root);
        Self { root, cards }
    }

    /// The decorated block.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.root
    }

    /// Consumes the block, returning its element tree.
    #[must_use]
    pub fn into_element(self) -> Element {
        self.root
    }

    /// The cards, in order.
    #[must_use]
    pub fn cards(&self) -> &[CardRecord] {
        &self.cards
    }

    /// Resolves an activation of card `index` to the address to navigate to.
    ///
    /// Returns `None` for featured cards, cards without a link, keys other
    /// than `Enter` or space, and out-of-range indices.
    pub fn activate(&self, index: usize, activation: &CardActivation) -> Option<&str> {
        if !activation.follows_link() {
            return None;
        }
        let target = self.cards.get(index)?.target()?;
        debug!(index, target, "feature cards: activate");
        Some(target)
    }
}

fn header_text(row: &[Cell]) -> Option<String> {
    let [cell] = row else {
        return None;
    };
    let text = cell.trimmed();
    (!text.is_empty() && !text.contains('|')).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use blockdeck_dom::{NoIcons, icon_names};

    fn cells(texts: &[&str]) -> Row {
        texts.iter().map(|t| Cell::text(*t)).collect()
    }

    #[test]
    fn heading_and_subheading_rows_are_consumed() {
        let rows = vec![
            cells(&["Why Blockdeck"]),
            cells(&["Everything you need"]),
            cells(&["bolt", "Fast", "Quick builds."]),
        ];
        let block = FeatureCards::decorate(&rows, &mut NoIcons);
        let root = block.element();
        assert_eq!(
            root.find_by_class("feature-cards-heading")
                .map(Element::text_content)
                .as_deref(),
            Some("Why Blockdeck")
        );
        assert_eq!(
            root.find_by_class("feature-cards-subheading")
                .map(Element::text_content)
                .as_deref(),
            Some("Everything you need")
        );
        assert_eq!(block.cards().len(), 1);
    }

    #[test]
    fn piped_or_multi_cell_first_row_is_a_card() {
        let rows = vec![cells(&["a | b"]), cells(&["bolt", "Fast"])];
        let block = FeatureCards::decorate(&rows, &mut NoIcons);
        let root = block.element();
        assert!(root.find_by_class("feature-cards-header").is_none());
        assert_eq!(block.cards().len(), 2);

        let rows = vec![cells(&["bolt", "Fast"])];
        assert_eq!(FeatureCards::decorate(&rows, &mut NoIcons).cards().len(), 1);
    }

    #[test]
    fn card_fields_are_optional() {
        let record = CardRecord::from_row(&cells(&["", "Title only"]));
        assert_eq!(record.icon, None);
        assert_eq!(record.title.as_deref(), Some("Title only"));
        assert_eq!(record.description, None);
        assert!(record.tags.is_empty());
        assert!(!record.is_featured());

        let card = record.render();
        assert_eq!(card.child_elements().count(), 1);
        assert_eq!(card.attr("role"), None);
    }

    #[test]
    fn tags_split_on_commas_and_bullets() {
        let record = CardRecord::from_row(&cells(&["", "", "", "ai, ml • data,"]));
        assert_eq!(record.tags, ["ai", "ml", "data"]);
    }

    #[test]
    fn cta_link_makes_card_featured() {
        let row = vec![
            Cell::text("star"),
            Cell::text("Pro"),
            Cell::text("For teams."),
            Cell::text(""),
            Cell::link(Link::new("/pro", " Upgrade ")),
        ];
        let record = CardRecord::from_row(&row);
        let card = record.render();
        assert!(card.has_class("featured"));
        assert_eq!(icon_names(&card), ["star", "quote", "arrow-right"]);

        let button = card.find_by_class("feature-cards-button").unwrap();
        assert_eq!(button.tag(), "a");
        assert_eq!(button.attr("href"), Some("/pro"));
        assert_eq!(button.attr("aria-label"), Some("Upgrade - Pro"));
        assert_eq!(button.text_content(), "Upgrade");
    }

    #[test]
    fn cta_without_link_is_a_button() {
        let record = CardRecord::from_row(&cells(&["", "", "", "", "Contact us"]));
        let card = record.render();
        let button = card.find_by_class("feature-cards-button").unwrap();
        assert_eq!(button.tag(), "button");
        assert_eq!(button.attr("type"), Some("button"));
        assert_eq!(button.text_content(), "Contact us");
    }

    #[test]
    fn untitled_cta_label_falls_back() {
        let row = vec![
            Cell::default(),
            Cell::text(""),
            Cell::default(),
            Cell::default(),
            Cell::link(Link::new("/x", "Go")),
        ];
        let card = CardRecord::from_row(&row).render();
        let button = card.find_by_class("feature-cards-button").unwrap();
        assert_eq!(button.attr("aria-label"), Some("Go - Learn more"));
    }

    #[test]
    fn linked_cards_activate_on_click_enter_and_space() {
        let rows = vec![
            vec![
                Cell::text("book"),
                Cell::text("Docs"),
                Cell::link(Link::new("/docs", "Read the docs")),
            ],
            vec![
                Cell::text(""),
                Cell::text("Pro"),
                Cell::link(Link::new("/about", "About")),
                Cell::text(""),
                Cell::link(Link::new("/pro", "Upgrade")),
            ],
        ];
        let block = FeatureCards::decorate(&rows, &mut NoIcons);
        let card = block.element().find_by_class("feature-cards-card").unwrap();
        assert_eq!(card.attr("role"), Some("link"));
        assert_eq!(card.attr("tabindex"), Some("0"));
        assert_eq!(card.style("cursor"), Some("pointer"));

        assert_eq!(block.activate(0, &CardActivation::Click), Some("/docs"));
        assert_eq!(
            block.activate(0, &CardActivation::Key(Key::Named(NamedKey::Enter))),
            Some("/docs")
        );
        assert_eq!(
            block.activate(0, &CardActivation::Key(Key::Character(" ".into()))),
            Some("/docs")
        );
        assert_eq!(
            block.activate(0, &CardActivation::Key(Key::Character("a".into()))),
            None
        );
        assert_eq!(block.activate(1, &CardActivation::Click), None);
        assert_eq!(block.activate(7, &CardActivation::Click), None);
    }
}
