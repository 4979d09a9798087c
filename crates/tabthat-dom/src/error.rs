//! Error types for selector compilation.

/// Error while compiling a CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// Selector text is empty or whitespace.
    #[error("empty selector {0:?}")]
    Empty(String),

    /// The CSS parser rejected the selector.
    #[error("invalid selector {selector:?}: {reason}")]
    Invalid {
        /// Full selector text.
        selector: String,
        /// Parser diagnostic.
        reason: String,
    },
}
