// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blockdeck DOM: a headless element tree for authored content blocks.
//!
//! Blocks receive authored content as a table: an ordered list of rows, each
//! an ordered list of cells. They turn those rows into a presentational tree of
//! elements with classes, attributes, inline styles, and text. This crate
//! provides both halves of that contract:
//!
//! - [`Cell`] / [`Row`]: authored content as handed over by the content
//!   extraction layer, with optional image and link references.
//! - [`Element`] / [`Node`]: a small owned tree with a builder API, path
//!   addressing, simple queries, and HTML serialization.
//!
//! It also defines the seams for the two collaborators that blocks call but do
//! not implement:
//!
//! - [`IconDecorator`]: replaces `icon icon-<name>` placeholders with glyphs
//!   once a block's tree is assembled.
//! - [`PictureOptimizer`]: turns an image reference plus width hints into a
//!   renderable `<picture>` element.
//!
//! The tree does **not** model layout, events, or live browser state. Hosts
//! that mount the tree into a real document are responsible for wiring input
//! back into the block that produced it.
//!
//! ## Minimal example
//!
//! ```rust
//! use blockdeck_dom::Element;
//!
//! let button = Element::new("button")
//!     .with_class("carousel-dot")
//!     .with_attr("aria-label", "Go to slide 1");
//!
//! let mut nav = Element::new("div").with_class("carousel-nav");
//! nav.append(button);
//!
//! assert_eq!(
//!     nav.to_html(),
//!     r#"<div class="carousel-nav"><button class="carousel-dot" aria-label="Go to slide 1"></button></div>"#,
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collab;
mod content;
mod element;
mod html;

pub use collab::{
    Breakpoint, IconDecorator, NoIcons, PictureOptimizer, PictureRequest, PlainPictures,
    SvgIcons, icon_names, icon_placeholder,
};
pub use content::{Cell, ImageRef, Link, Row, row_text, split_items};
pub use element::{Element, Node};
pub use html::{escape_attr, escape_text};
