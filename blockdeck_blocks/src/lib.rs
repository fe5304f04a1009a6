// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blockdeck Blocks: one-shot authoring blocks.
//!
//! Each block reads authored rows (see [`blockdeck_dom::Row`]) into a small
//! record type and renders that record into an element tree. Blocks with
//! interactive state own their tree and update it in place:
//!
//! - [`FeatureCards`]: section header plus a grid of cards. Linked cards
//!   resolve clicks and `Enter`/space presses to a navigation target.
//! - [`offer_banner()`]: a promotional panel with badge, features, and a CTA.
//! - [`FaqAccordion`]: questions whose answers expand independently.
//! - [`Accordion`]: sections of which at most one is open.
//! - [`nav_header()`]: logo, brand, navigation links, sign-in, and CTA.
//!
//! Blocks that emit icon placeholders take an
//! [`IconDecorator`](blockdeck_dom::IconDecorator) and run it exactly once,
//! after their tree is complete.
//!
//! ## Minimal example
//!
//! ```rust
//! use blockdeck_blocks::FaqAccordion;
//! use blockdeck_dom::{Cell, Row};
//!
//! let row: Row = [
//!     "FAQ", "Common questions",
//!     "Docs", "/docs", "Support", "/support", "Blog", "/blog",
//!     "What is it?", "A block library.",
//!     "Is it free?", "Yes.",
//! ]
//! .into_iter()
//! .map(Cell::text)
//! .collect();
//!
//! let mut faq = FaqAccordion::decorate(&[row]).unwrap();
//! assert_eq!(faq.len(), 2);
//! assert!(faq.is_expanded(0));
//! assert_eq!(faq.toggle(1), Some(true));
//! assert!(faq.is_expanded(0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to `blockdeck_dom`.
//! - `serde`: `Serialize`/`Deserialize` for the record types.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod accordion;
mod faq;
mod feature_cards;
mod nav_header;
mod offer_banner;

pub use accordion::{ACCORDION_CONTENT, ACCORDION_HEADER, Accordion};
pub use faq::{FAQ_BLOCK, FaqAccordion, FaqItem, FaqRecord, MAX_NAV_BUTTONS};
pub use feature_cards::{
    CallToAction, CardActivation, CardRecord, FEATURE_CARDS_BLOCK, FeatureCards, TAG_SEPARATORS,
};
pub use nav_header::{LOGO_ALT, NAV_HEADER_BLOCK, NAV_LINKS, NavHeaderRecord, nav_header};
pub use offer_banner::{
    FEATURE_SEPARATOR, OFFER_BANNER_BLOCK, OFFER_CTA_LABEL, OfferRecord, offer_banner,
};
