//! HTML fragment parser.
//!
//! Markup is parsed by `scraper` (html5ever) in fragment mode and copied into
//! the arena. Parsing never fails: malformed markup is repaired the way a
//! browser would repair it.

use scraper::{ElementRef, Html, Node};

use crate::document::{Document, NodeId};

impl Document {
    /// Parse an HTML fragment.
    ///
    /// Valueless attributes (`<div data-tab-that>`) read as empty strings.
    /// Character references, named entities included, are decoded in text
    /// and attribute values. Comments and doctype declarations are dropped.
    #[must_use]
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_fragment(markup);
        let mut doc = Self::new();
        let root = doc.root();
        copy_children(&mut doc, root, html.root_element());
        doc
    }
}

fn copy_children(doc: &mut Document, parent: NodeId, source: ElementRef<'_>) {
    for child in source.children() {
        if let Some(element) = ElementRef::wrap(child) {
            let value = element.value();
            let node = doc.create_element(value.name());
            for (name, attr) in value.attrs() {
                doc.set_attr(node, name, attr);
            }
            doc.append_child(parent, node);
            copy_children(doc, node, element);
        } else if let Node::Text(text) = child.value() {
            doc.append_text(parent, text);
        }
    }
}
