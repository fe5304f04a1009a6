// Copyright 2025 the Blockdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The owned element tree.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use smallvec::SmallVec;

/// A child of an [`Element`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// A nested element.
    Element(Element),
    /// Plain text; escaped when serialized.
    Text(String),
    /// Authored markup copied verbatim; never escaped.
    Raw(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl Node {
    /// Returns the element if this node is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Returns the element mutably if this node is one.
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

/// An element with a tag, classes, attributes, inline styles, and children.
///
/// Classes, attributes, and style properties keep insertion order so that
/// serialization is deterministic. Setting an existing attribute or style
/// property overwrites it in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: SmallVec<[String; 2]>,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an empty element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    // --- builder --------------------------------------------------------------

    /// Adds every whitespace-separated class in `classes`.
    #[must_use]
    pub fn with_class(mut self, classes: &str) -> Self {
        self.add_class(classes);
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets an inline style property.
    #[must_use]
    pub fn with_style(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set_style(property, value);
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a text node.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Appends verbatim markup.
    #[must_use]
    pub fn with_raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }

    // --- classes --------------------------------------------------------------

    /// Returns the class list in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns `true` if the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds every whitespace-separated class in `classes` that is not already present.
    pub fn add_class(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        }
    }

    /// Removes `class` if present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes `class` depending on `on`.
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    // --- attributes -----------------------------------------------------------

    /// Returns the attributes in insertion order.
    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Returns the value of attribute `name`.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets attribute `name`, overwriting any existing value.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
    }

    /// Removes attribute `name`, returning its old value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let idx = self.attrs.iter().position(|(n, _)| n == name)?;
        Some(self.attrs.remove(idx).1)
    }

    // --- styles ---------------------------------------------------------------

    /// Returns inline style properties in insertion order.
    #[must_use]
    pub fn styles(&self) -> &[(String, String)] {
        &self.styles
    }

    /// Returns the value of inline style `property`.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Sets inline style `property`, overwriting any existing value.
    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.styles.iter_mut().find(|(p, _)| p == property) {
            slot.1 = value;
        } else {
            self.styles.push((property.to_string(), value));
        }
    }

    // --- children -------------------------------------------------------------

    /// Returns all child nodes.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Appends a child node.
    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Iterates over child elements, skipping text and markup.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Iterates mutably over child elements, skipping text and markup.
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Self> {
        self.children.iter_mut().filter_map(Node::as_element_mut)
    }

    /// Returns the `index`-th child element.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&Self> {
        self.child_elements().nth(index)
    }

    /// Returns the `index`-th child element mutably.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.child_elements_mut().nth(index)
    }

    /// Follows a path of child-element indices from this element.
    ///
    /// An empty path returns `self`.
    #[must_use]
    pub fn at_path(&self, path: &[usize]) -> Option<&Self> {
        path.iter().try_fold(self, |el, &i| el.child(i))
    }

    /// Follows a path of child-element indices from this element, mutably.
    pub fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Self> {
        let mut el = self;
        for &i in path {
            el = el.child_mut(i)?;
        }
        Some(el)
    }

    /// Concatenated text of all descendant text nodes.
    ///
    /// Verbatim markup is included as-is.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(el) => el.collect_text(out),
                Node::Text(text) | Node::Raw(text) => out.push_str(text),
            }
        }
    }

    // --- queries --------------------------------------------------------------

    /// Returns the first element in document order (including `self`) matching `pred`.
    pub fn find(&self, pred: impl Fn(&Self) -> bool + Copy) -> Option<&Self> {
        if pred(self) {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find(pred))
    }

    /// Returns all elements in document order (including `self`) matching `pred`.
    pub fn find_all(&self, pred: impl Fn(&Self) -> bool + Copy) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect_matching(pred, &mut out);
        out
    }

    fn collect_matching<'a>(
        &'a self,
        pred: impl Fn(&Self) -> bool + Copy,
        out: &mut Vec<&'a Self>,
    ) {
        if pred(self) {
            out.push(self);
        }
        for el in self.child_elements() {
            el.collect_matching(pred, out);
        }
    }

    /// Returns the first element carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Option<&Self> {
        self.find(|el| el.has_class(class))
    }

    /// Returns every element carrying `class`.
    #[must_use]
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Self> {
        self.find_all(|el| el.has_class(class))
    }

    /// Visits every element in document order (including `self`) mutably.
    pub fn for_each_mut(&mut self, f: &mut impl FnMut(&mut Self)) {
        f(self);
        for el in self.child_elements_mut() {
            el.for_each_mut(f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .with_class("outer")
            .with_child(
                Element::new("ul")
                    .with_child(Element::new("li").with_text("one"))
                    .with_text(" ")
                    .with_child(Element::new("li").with_class("last").with_text("two")),
            )
            .with_child(Element::new("p").with_text("tail"))
    }

    #[test]
    fn classes_are_deduplicated_and_toggle() {
        let mut el = Element::new("button").with_class("dot dot");
        assert_eq!(el.classes(), ["dot"]);
        el.toggle_class("active", true);
        el.toggle_class("active", true);
        assert_eq!(el.classes(), ["dot", "active"]);
        el.toggle_class("active", false);
        assert!(!el.has_class("active"));
    }

    #[test]
    fn set_attr_overwrites_in_place() {
        let mut el = Element::new("div").with_attr("a", "1").with_attr("b", "2");
        el.set_attr("a", "3");
        assert_eq!(el.attr("a"), Some("3"));
        assert_eq!(el.attrs()[0].0, "a");
        assert_eq!(el.remove_attr("a").as_deref(), Some("3"));
        assert_eq!(el.attr("a"), None);
        assert_eq!(el.remove_attr("missing"), None);
    }

    #[test]
    fn child_indices_skip_text_nodes() {
        let root = sample();
        let list = root.child(0).unwrap();
        assert_eq!(list.children().len(), 3);
        assert!(list.child(1).unwrap().has_class("last"));
        assert!(list.child(2).is_none());
    }

    #[test]
    fn at_path_walks_element_children() {
        let mut root = sample();
        assert_eq!(root.at_path(&[]).map(Element::tag), Some("div"));
        assert_eq!(
            root.at_path(&[0, 1]).map(Element::text_content).as_deref(),
            Some("two")
        );
        assert!(root.at_path(&[5]).is_none());

        root.at_path_mut(&[1]).unwrap().set_attr("id", "p");
        assert_eq!(root.child(1).unwrap().attr("id"), Some("p"));
    }

    #[test]
    fn queries_run_in_document_order() {
        let root = sample();
        let items = root.find_all(|el| el.tag() == "li");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text_content(), "one");
        assert_eq!(
            root.find_by_class("last")
                .map(Element::text_content)
                .as_deref(),
            Some("two")
        );
        assert_eq!(root.text_content(), "one twotail");
    }

    #[test]
    fn for_each_mut_visits_every_element() {
        let mut root = sample();
        let mut count = 0;
        root.for_each_mut(&mut |el| {
            count += 1;
            el.add_class("seen");
        });
        assert_eq!(count, 5);
        assert_eq!(root.find_all_by_class("seen").len(), 5);
    }
}
