//! In-memory document model for progressive enhancement.
//!
//! This crate provides the small slice of a browser document that tab
//! enhancement needs:
//!
//! - [`Document`]: an arena of elements addressed by [`NodeId`], with
//!   attributes, class lists, text, and focus tracking
//! - [`Selector`]: CSS selectors compiled and matched by `scraper`
//! - HTML round-tripping via [`Document::parse`] (html5ever, fragment mode)
//!   and [`Document::to_html`]
//!
//! # Example
//!
//! ```
//! use tabthat_dom::Document;
//!
//! let mut doc = Document::parse(r#"<div id="a" class="box"><p>Hi</p></div>"#);
//! let div = doc.get_element_by_id("a").unwrap();
//! doc.add_class(div, "is-open");
//!
//! assert_eq!(doc.to_html(), r#"<div id="a" class="box is-open"><p>Hi</p></div>"#);
//! ```

mod document;
mod error;
mod parser;
mod selector;
mod serializer;

pub use document::{Document, Element, NodeId};
pub use error::SelectorError;
pub use selector::Selector;
