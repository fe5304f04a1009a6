// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! FAQ accordion: a titled list of questions whose answers expand independently.
//!
//! The block reads a single row of cells: title, subtitle, up to
//! [`MAX_NAV_BUTTONS`] `(label, href)` pairs, then `(question, answer)` pairs.
//! The first item starts expanded; toggling an item never touches the others.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use blockdeck_dom::{Element, Link, Row};
use tracing::debug;

/// Block class of the FAQ accordion.
pub const FAQ_BLOCK: &str = "faq-accordion";

/// Number of navigation buttons the first row can carry.
pub const MAX_NAV_BUTTONS: usize = 3;

/// Index of the question list among the block's children.
const LIST: usize = 3;

/// One question and its answer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaqItem {
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
}

/// Content of a FAQ accordion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaqRecord {
    /// Section title.
    pub title: String,
    /// Section subtitle.
    pub subtitle: String,
    /// Navigation buttons shown above the list.
    pub buttons: Vec<Link>,
    /// Questions, in order.
    pub items: Vec<FaqItem>,
}

impl FaqRecord {
    /// Reads the first row. Returns `None` when there are no rows.
    ///
    /// Missing cells, including an unpaired trailing label or question, read
    /// as empty strings.
    #[must_use]
    pub fn from_rows(rows: &[Row]) -> Option<Self> {
        let texts: Vec<String> = rows
            .first()?
            .iter()
            .map(|c| c.trimmed().to_string())
            .collect();
        let cell = |i: usize| texts.get(i).cloned().unwrap_or_default();

        let rest = texts.len().saturating_sub(2);
        let button_cells = rest.min(2 * MAX_NAV_BUTTONS);
        let buttons = (0..button_cells)
            .step_by(2)
            .map(|i| Link::new(cell(2 + i + 1), cell(2 + i)))
            .collect();
        let items = (button_cells..rest)
            .step_by(2)
            .map(|i| FaqItem {
                question: cell(2 + i),
                answer: cell(2 + i + 1),
            })
            .collect();

        Some(Self {
            title: cell(0),
            subtitle: cell(1),
            buttons,
            items,
        })
    }
}

/// A decorated FAQ accordion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqAccordion {
    root: Element,
    expanded: Vec<bool>,
}

impl FaqAccordion {
    /// Decorates authored rows; `None` when there are no rows.
    #[must_use]
    pub fn decorate(rows: &[Row]) -> Option<Self> {
        FaqRecord::from_rows(rows).map(|record| Self::new(&record))
    }

    /// Builds the accordion from a record.
    #[must_use]
    pub fn new(record: &FaqRecord) -> Self {
        let mut nav = Element::new("div").with_class("faq-accordion__navigation");
        for button in &record.buttons {
            nav.append(
                Element::new("a")
                    .with_class("faq-accordion__button")
                    .with_attr("href", button.href.clone())
                    .with_text(button.text.clone()),
            );
        }

        let mut list = Element::new("ul").with_class("faq-accordion__list");
        for item in &record.items {
            list.append(
                Element::new("li")
                    .with_class("faq-accordion__item")
                    .with_child(
                        Element::new("div")
                            .with_class("faq-accordion__question")
                            .with_attr("role", "button")
                            .with_text(item.question.clone()),
                    )
                    .with_child(
                        Element::new("div")
                            .with_class("faq-accordion__answer")
                            .with_text(item.answer.clone()),
                    ),
            );
        }

        let root = Element::new("div")
            .with_class(FAQ_BLOCK)
            .with_child(
                Element::new("h2")
                    .with_class("faq-accordion__title")
                    .with_text(record.title.clone()),
            )
            .with_child(
                Element::new("p")
                    .with_class("faq-accordion__subtitle")
                    .with_text(record.subtitle.clone()),
            )
            .with_child(nav)
            .with_child(list);

        let mut expanded = vec![false; record.items.len()];
        if let Some(first) = expanded.first_mut() {
            *first = true;
        }
        let mut faq = Self { root, expanded };
        for index in 0..faq.expanded.len() {
            faq.sync(index);
        }
        faq
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

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Returns `true` if there are no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Whether item `index` is expanded; `false` when out of range.
    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Flips item `index` and returns its new state.
    ///
    /// Returns `None` and changes nothing when `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let state = self.expanded.get_mut(index)?;
        *state = !*state;
        let expanded = *state;
        debug!(index, expanded, "faq: toggle");
        self.sync(index);
        Some(expanded)
    }

    fn sync(&mut self, index: usize) {
        let expanded = self.is_expanded(index);
        let Some(item) = self.root.at_path_mut(&[LIST, index]) else {
            return;
        };
        if let Some(question) = item.child_mut(0) {
            question.set_attr("aria-expanded", if expanded { "true" } else { "false" });
        }
        if let Some(answer) = item.child_mut(1) {
            answer.set_style("display", if expanded { "block" } else { "none" });
        }
    }
}
