//! Compiled CSS selectors.
//!
//! Compilation and matching are done by `scraper`, so the full selector
//! grammar it supports (combinators, attribute operators, `:not()`,
//! structural pseudo-classes) is available. [`Selector`] keeps the source
//! text for error messages and display.

use scraper::ElementRef;

use crate::error::SelectorError;

/// Compiled selector list.
///
/// # Example
///
/// ```
/// use tabthat_dom::{Document, Selector};
///
/// let doc = Document::parse(r##"<ul data-tab-list><li><a href="#x">X</a></li></ul>"##);
/// let selector = Selector::parse("[data-tab-list] > li a").unwrap();
///
/// assert_eq!(doc.query_selector_all(doc.root(), &selector).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Selector {
    source: String,
    compiled: scraper::Selector,
}

impl Selector {
    /// Compile a selector string.
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        if source.trim().is_empty() {
            return Err(SelectorError::Empty(source.to_owned()));
        }
        let compiled = scraper::Selector::parse(source).map_err(|e| SelectorError::Invalid {
            selector: source.to_owned(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            source: source.to_owned(),
            compiled,
        })
    }

    /// The selector text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub(crate) fn matches_element(&self, element: &ElementRef<'_>) -> bool {
        self.compiled.matches(element)
    }
}

impl PartialEq for Selector {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Selector {}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
