//! Configuration for tab enhancement.
//!
//! Parses `tabthat.toml` files with serde and provides auto-discovery of
//! config files in parent directories. Every field has a documented default,
//! so an empty file (or no file at all) yields a working configuration.
//!
//! ```toml
//! [tabs]
//! list_selector = "[data-tab-list]"
//! selected_class = "is-active"
//! wrap = false
//! focus = "activate"
//! ```
//!
//! Per-instance overrides are expressed with [`TabOptions`] and applied via
//! [`TabsConfig::with_options`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tabthat_dom::{Selector, SelectorError};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tabthat.toml";

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tab enhancement settings.
    pub tabs: TabsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// When input focus follows the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusPolicy {
    /// Focus moves only after keyboard navigation.
    #[default]
    Keyboard,
    /// Every selection change focuses the newly active handle.
    Activate,
}

/// Settings for one tab component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Elements to enhance during bulk discovery.
    pub container_selector: String,
    /// The list holding the trigger links.
    pub list_selector: String,
    /// Controls that select the previous tab.
    pub prev_button_selector: String,
    /// Controls that select the next tab.
    pub next_button_selector: String,
    /// Element whose text becomes the container's `aria-label`.
    pub title_selector: Option<String>,
    /// Marker class added to an enhanced container.
    pub enhanced_class: String,
    /// Marker class on the active handle and panel.
    pub selected_class: String,
    /// Whether previous/next wrap around at the ends.
    pub wrap: bool,
    /// When focus moves to the active handle.
    pub focus: FocusPolicy,
    /// Whether Home/End jump to the first/last tab.
    pub home_end_keys: bool,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            container_selector: "[data-tab-that]".to_owned(),
            list_selector: "[data-tab-list]".to_owned(),
            prev_button_selector: "[data-tab-previous]".to_owned(),
            next_button_selector: "[data-tab-next]".to_owned(),
            title_selector: None,
            enhanced_class: "is-tabbed".to_owned(),
            selected_class: "is-selected".to_owned(),
            wrap: true,
            focus: FocusPolicy::Keyboard,
            home_end_keys: true,
        }
    }
}

/// Per-instance overrides.
///
/// All fields are optional. Only `Some` values replace the base config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabOptions {
    pub container_selector: Option<String>,
    pub list_selector: Option<String>,
    pub prev_button_selector: Option<String>,
    pub next_button_selector: Option<String>,
    pub title_selector: Option<String>,
    pub enhanced_class: Option<String>,
    pub selected_class: Option<String>,
    pub wrap: Option<bool>,
    pub focus: Option<FocusPolicy>,
    pub home_end_keys: Option<bool>,
}

impl TabsConfig {
    /// Return a copy with every `Some` field of `options` applied.
    #[must_use]
    pub fn with_options(&self, options: &TabOptions) -> Self {
        let mut config = self.clone();
        let replace = |slot: &mut String, value: &Option<String>| {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        };

        replace(&mut config.container_selector, &options.container_selector);
        replace(&mut config.list_selector, &options.list_selector);
        replace(&mut config.prev_button_selector, &options.prev_button_selector);
        replace(&mut config.next_button_selector, &options.next_button_selector);
        replace(&mut config.enhanced_class, &options.enhanced_class);
        replace(&mut config.selected_class, &options.selected_class);
        if let Some(title) = &options.title_selector {
            config.title_selector = Some(title.clone());
        }
        if let Some(wrap) = options.wrap {
            config.wrap = wrap;
        }
        if let Some(focus) = options.focus {
            config.focus = focus;
        }
        if let Some(home_end_keys) = options.home_end_keys {
            config.home_end_keys = home_end_keys;
        }
        config
    }

    /// Validate selectors and class names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_selector(&self.container_selector, "tabs.container_selector")?;
        require_selector(&self.list_selector, "tabs.list_selector")?;
        require_selector(&self.prev_button_selector, "tabs.prev_button_selector")?;
        require_selector(&self.next_button_selector, "tabs.next_button_selector")?;
        if let Some(title) = &self.title_selector {
            require_selector(title, "tabs.title_selector")?;
        }
        require_class_name(&self.enhanced_class, "tabs.enhanced_class")?;
        require_class_name(&self.selected_class, "tabs.selected_class")?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a field to hold a selector that compiles.
fn require_selector(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Selector::parse(value)
        .map(|_| ())
        .map_err(|e: SelectorError| ConfigError::Validation(format!("{field}: {e}")))
}

/// Require a field to be a single non-empty class name.
fn require_class_name(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field} must be a single class name"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `tabthat.toml` in the current directory and its parents, falling
    /// back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }
        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.tabs.validate()?;
        Ok(config)
    }
}
