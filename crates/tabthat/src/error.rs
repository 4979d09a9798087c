//! Error types for tab enhancement.

use tabthat_config::ConfigError;
use tabthat_dom::SelectorError;

/// Error raised while linking a container into a tab component.
///
/// All variants are detected before the document is modified, so a failed
/// enhancement leaves the markup untouched.
#[derive(Debug, thiserror::Error)]
pub enum TabError {
    /// The container has no element matching the list selector.
    #[error("no tab list matching {selector:?} inside {container}")]
    MissingList {
        /// Description of the container element.
        container: String,
        /// Configured list selector.
        selector: String,
    },

    /// A trigger's `href` carries no `#fragment`.
    #[error("tab trigger {trigger} has no #target in its href")]
    MissingTarget {
        /// Description of the trigger element.
        trigger: String,
    },

    /// A trigger points at an id that does not exist.
    #[error("tab trigger {trigger} targets #{target}, which does not exist")]
    MissingPanel {
        /// Description of the trigger element.
        trigger: String,
        /// The unresolved target id.
        target: String,
    },

    /// Invalid configuration.
    #[error("invalid tab configuration")]
    Config(#[from] ConfigError),

    /// Selector failed to compile.
    #[error("invalid selector")]
    Selector(#[from] SelectorError),
}
