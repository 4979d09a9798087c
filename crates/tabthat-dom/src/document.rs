//! Arena-backed element tree.
//!
//! The arena is the source of truth for attributes, classes and text.
//! Selector matching runs against a `scraper` parse of the arena's own
//! markup, which is built lazily and dropped on every mutation. Elements only
//! enter the arena through the HTML parser, so that parse yields the same
//! elements in the same document order as the arena.

use std::cell::OnceCell;

use scraper::{ElementRef, Html};

use crate::error::SelectorError;
use crate::selector::Selector;

/// Handle to an element inside a [`Document`].
///
/// Ids are only meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the element in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single element with its attributes and text.
///
/// Text is stored the way an element tree stores it: `text` is the content
/// before the first child, `tail` is the content after this element's
/// closing tag and before the next sibling.
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub(crate) tag: String,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) text: String,
    pub(crate) tail: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl Element {
    /// Tag name as written in the source.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attribute value, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in source order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Text before the first child.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text following this element inside its parent.
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Parent element, `None` for the document root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    /// Whether the `class` attribute contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }
}

/// Mutable element tree with focus tracking.
///
/// The document always has a synthetic root element that wraps the parsed
/// fragment. It is never serialized.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    focused: Option<NodeId>,
    snapshot: OnceCell<Html>,
}

/// Tag of the synthetic root element.
const ROOT_TAG: &str = "#document";

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only the root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Element {
                tag: ROOT_TAG.to_owned(),
                ..Element::default()
            }],
            focused: None,
            snapshot: OnceCell::new(),
        }
    }

    /// The synthetic root element.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Borrow an element.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this document.
    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id.0]
    }

    fn element_mut(&mut self, id: NodeId) -> &mut Element {
        self.snapshot.take();
        &mut self.nodes[id.0]
    }

    /// Number of elements, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document holds nothing but its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Create a detached element.
    pub(crate) fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.snapshot.take();
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element {
            tag: tag.into(),
            ..Element::default()
        });
        id
    }

    /// Attach a detached `child` as the last child of `parent`.
    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.element_mut(child).parent = Some(parent);
        self.element_mut(parent).children.push(child);
    }

    /// Append text after the last child of `parent` (or into its leading text).
    pub(crate) fn append_text(&mut self, parent: NodeId, text: &str) {
        match self.element(parent).children.last().copied() {
            Some(last) => self.element_mut(last).tail.push_str(text),
            None => self.element_mut(parent).text.push_str(text),
        }
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.element(id).tag
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.element(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.element(id).children
    }

    /// All descendants of `scope` in document order, excluding `scope`.
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(scope).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        out
    }

    /// Whether `node` lies strictly inside `ancestor`.
    pub fn is_descendant_of(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut current = self.parent(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).attr(name)
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.element(id).attr(name).is_some()
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        let value = value.into();
        let attrs = &mut self.element_mut(id).attrs;
        if let Some(slot) = attrs.iter_mut().find(|(key, _)| key == name) {
            slot.1 = value;
        } else {
            attrs.push((name.to_owned(), value));
        }
    }

    /// Set an attribute and place it at `index` in the attribute list.
    ///
    /// An index past the end appends.
    pub fn insert_attr(&mut self, id: NodeId, index: usize, name: &str, value: impl Into<String>) {
        let value = value.into();
        let attrs = &mut self.element_mut(id).attrs;
        attrs.retain(|(key, _)| key != name);
        let index = index.min(attrs.len());
        attrs.insert(index, (name.to_owned(), value));
    }

    /// Position of an attribute in the attribute list.
    pub fn attr_index(&self, id: NodeId, name: &str) -> Option<usize> {
        self.element(id).attrs.iter().position(|(key, _)| key == name)
    }

    /// Remove an attribute. Returns the previous value.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        let attrs = &mut self.element_mut(id).attrs;
        let pos = attrs.iter().position(|(key, _)| key == name)?;
        Some(attrs.remove(pos).1)
    }

    /// Value of the `id` attribute.
    pub fn id(&self, id: NodeId) -> Option<&str> {
        self.attr(id, "id").filter(|v| !v.is_empty())
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).has_class(class)
    }

    /// Add `class` to the end of the class list unless already present.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        self.insert_class(id, usize::MAX, class);
    }

    /// Insert `class` at `index` in the class list unless already present.
    ///
    /// A missing `class` attribute is appended to the attribute list.
    pub fn insert_class(&mut self, id: NodeId, index: usize, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        let mut classes: Vec<&str> = self.element(id).classes().collect();
        classes.insert(index.min(classes.len()), class);
        let joined = classes.join(" ");
        self.set_attr(id, "class", joined);
    }

    /// Remove every occurrence of `class`.
    ///
    /// The `class` attribute itself is dropped once the list is empty.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if !self.has_class(id, class) {
            return;
        }
        let remaining: Vec<&str> = self.element(id).classes().filter(|&c| c != class).collect();
        if remaining.is_empty() {
            self.remove_attr(id, "class");
        } else {
            let joined = remaining.join(" ");
            self.set_attr(id, "class", joined);
        }
    }

    /// Concatenated text of the element and all its descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let element = self.element(id);
        out.push_str(&element.text);
        for &child in &element.children {
            self.collect_text(child, out);
            out.push_str(&self.element(child).tail);
        }
    }

    /// First element in the whole document whose `id` equals `value`.
    pub fn get_element_by_id(&self, value: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|&id| self.attr(id, "id") == Some(value))
    }

    /// First descendant of `scope` matching `selector`.
    pub fn query_selector(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.matching(selector)
            .find(|&id| self.is_descendant_of(id, scope))
    }

    /// All descendants of `scope` matching `selector`, in document order.
    pub fn query_selector_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.matching(selector)
            .filter(|&id| self.is_descendant_of(id, scope))
            .collect()
    }

    /// Whether `id` matches `selector`. The root never matches.
    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        self.matching(selector).any(|candidate| candidate == id)
    }

    /// Every element matching `selector`, in document order.
    fn matching<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = NodeId> + 'a {
        let html = self
            .snapshot
            .get_or_init(|| Html::parse_fragment(&self.to_html()));
        // Skip the <html> wrapper the fragment parser puts around the markup
        let parsed = html
            .root_element()
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap);

        self.descendants(self.root())
            .into_iter()
            .zip(parsed)
            .filter(|(_, element)| selector.matches_element(element))
            .map(|(id, _)| id)
    }

    /// Parse `selector` and return the first match under `scope`.
    pub fn select(&self, scope: NodeId, selector: &str) -> Result<Option<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.query_selector(scope, &selector))
    }

    /// Parse `selector` and return every match under `scope`.
    pub fn select_all(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(self.query_selector_all(scope, &selector))
    }

    /// Element that currently holds input focus.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn focus(&mut self, id: NodeId) {
        self.focused = Some(id);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }
}
