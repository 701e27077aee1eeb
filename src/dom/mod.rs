// SPDX-License-Identifier: MPL-2.0
//! A minimal document tree of labeled elements.
//!
//! This is the rendering-surface abstraction the translator applies itself
//! to: elements carry an optional id, arbitrary string attributes, a class
//! list, text content, and (for input-like elements) placeholder text. The
//! tree knows nothing about translation; the `i18n` module walks it and
//! rewrites the nodes it recognizes.

use std::collections::HashMap;

/// A single node in the document tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    id: Option<String>,
    attributes: HashMap<String, String>,
    classes: Vec<String>,
    text: String,
    placeholder: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.placeholder = Some(text.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Adds a class to the element. Adding an already-present class is a
    /// no-op, which keeps repeated style toggles idempotent.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

/// An owned element tree with lookup and traversal helpers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Visits every element in the tree, depth first, root included.
    pub fn walk_mut(&mut self, visit: &mut dyn FnMut(&mut Element)) {
        walk_element_mut(&mut self.root, visit);
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        find_by_id(&self.root, id)
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_by_id_mut(&mut self.root, id)
    }
}

fn walk_element_mut(element: &mut Element, visit: &mut dyn FnMut(&mut Element)) {
    visit(element);
    for child in &mut element.children {
        walk_element_mut(child, visit);
    }
}

fn find_by_id<'a>(element: &'a Element, id: &str) -> Option<&'a Element> {
    if element.id.as_deref() == Some(id) {
        return Some(element);
    }
    element.children.iter().find_map(|child| find_by_id(child, id))
}

fn find_by_id_mut<'a>(element: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if element.id.as_deref() == Some(id) {
        return Some(element);
    }
    for child in &mut element.children {
        if let Some(found) = find_by_id_mut(child, id) {
            return Some(found);
        }
    }
    None
}
