//! HTML serializer.

use std::fmt::Write;

use crate::document::{Document, NodeId};

/// Elements that never have content and are written as `<tag />`.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text content is never escaped.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "plaintext", "script", "style", "xmp",
];

impl Document {
    /// Serialize the document body back to markup.
    ///
    /// The synthetic root is not written. Attributes keep their order.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(1024);
        let root = self.element(self.root());
        out.push_str(&escape_text(root.text()));
        for &child in root.children() {
            self.serialize_node(child, &mut out);
        }
        out
    }

    /// Serialize a single element including its descendants (without its tail).
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_element(id, &mut out);
        out
    }

    fn serialize_node(&self, id: NodeId, out: &mut String) {
        self.write_element(id, out);
        out.push_str(&escape_text(self.element(id).tail()));
    }

    fn write_element(&self, id: NodeId, out: &mut String) {
        let element = self.element(id);

        out.push('<');
        out.push_str(element.tag());
        for (key, value) in element.attrs() {
            let _ = write!(out, r#" {key}="{}""#, escape_attr(value));
        }

        let is_void = VOID_ELEMENTS.contains(&element.tag());
        if is_void && element.children().is_empty() && element.text().is_empty() {
            out.push_str(" />");
            return;
        }
        out.push('>');

        if RAW_TEXT_ELEMENTS.contains(&element.tag()) {
            out.push_str(element.text());
        } else {
            out.push_str(&escape_text(element.text()));
        }
        for &child in element.children() {
            self.serialize_node(child, out);
        }

        let _ = write!(out, "</{}>", element.tag());
    }
}

fn escape_text(text: &str) -> String {
    escape_html(text, false)
}

fn escape_attr(text: &str) -> String {
    escape_html(text, true)
}

fn escape_html(text: &str, escape_quotes: bool) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '\u{00a0}' => result.push_str("&nbsp;"),
            '"' if escape_quotes => result.push_str("&quot;"),
            _ => result.push(ch),
        }
    }
    result
}
