// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML serialization.

use alloc::string::String;
use core::fmt::{self, Write as _};

use crate::{Element, Node};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta", "source", "wbr"];

/// Escapes `&`, `<`, and `>` for use in text content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes `&`, `<`, `>`, and `"` for use in a double-quoted attribute value.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

impl Element {
    /// Serializes this element and its subtree as HTML.
    ///
    /// Attribute order is `class`, then attributes in insertion order, then
    /// `style`. Empty class lists and style maps are omitted.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = write!(out, "{self}");
        out
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag())?;
        if !self.classes().is_empty() {
            f.write_str(" class=\"")?;
            for (i, class) in self.classes().iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                f.write_str(&escape_attr(class))?;
            }
            f.write_char('"')?;
        }
        for (name, value) in self.attrs() {
            write!(f, " {name}=\"{}\"", escape_attr(value))?;
        }
        if !self.styles().is_empty() {
            f.write_str(" style=\"")?;
            for (i, (property, value)) in self.styles().iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{property}: {};", escape_attr(value))?;
            }
            f.write_char('"')?;
        }
        f.write_char('>')?;

        if VOID_ELEMENTS.contains(&self.tag()) {
            return Ok(());
        }
        for child in self.children() {
            match child {
                Node::Element(el) => write!(f, "{el}")?,
                Node::Text(text) => f.write_str(&escape_text(text))?,
                Node::Raw(markup) => f.write_str(markup)?,
            }
        }
        write!(f, "</{}>", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_text_and_attributes() {
        assert_eq!(escape_text("a<b & \"c\""), "a&lt;b &amp; \"c\"");
        assert_eq!(
            escape_attr("say \"hi\" & go"),
            "say &quot;hi&quot; &amp; go"
        );
    }

    #[test]
    fn serializes_classes_attrs_and_styles_in_order() {
        let el = Element::new("div")
            .with_attr("tabindex", "0")
            .with_class("slide active")
            .with_style("transform", "translateX(-100%)")
            .with_style("transition", "transform 350ms ease")
            .with_text("x < y");
        assert_eq!(
            el.to_html(),
            "<div class=\"slide active\" tabindex=\"0\" \
             style=\"transform: translateX(-100%); transition: transform 350ms ease;\">\
             x &lt; y</div>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let img = Element::new("img").with_attr("src", "/a.png");
        let pic = Element::new("picture").with_child(img);
        assert_eq!(pic.to_html(), "<picture><img src=\"/a.png\"></picture>");
    }

    #[test]
    fn raw_markup_is_not_escaped() {
        let el = Element::new("div").with_raw("<strong>Bold</strong>");
        assert_eq!(el.to_html(), "<div><strong>Bold</strong></div>");
    }
}
