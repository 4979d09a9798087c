//! Accessible tab interfaces from plain link lists.
//!
//! Progressive enhancement of markup like
//!
//! ```html
//! <div data-tab-that>
//!   <ul data-tab-list>
//!     <li><a href="#one">One</a></li>
//!     <li><a href="#two">Two</a></li>
//!   </ul>
//!   <section id="one">...</section>
//!   <section id="two">...</section>
//! </div>
//! ```
//!
//! into a tab widget: ARIA roles and states, exactly one selected tab, click
//! and keyboard navigation, optional previous/next controls, and a teardown
//! that restores the original markup.
//!
//! # Architecture
//!
//! - [`TabController`]: one enhanced container. Owns its (handle, panel)
//!   [`Pair`]s, the selected index and the event [`Binding`]s it registered.
//! - [`TabSet`]: the owning collection of live controllers. Guards against
//!   enhancing a container twice and routes [`Event`]s to controllers.
//!
//! # Example
//!
//! ```
//! use tabthat::{Event, Key, TabOptions, TabSet, TabsConfig};
//! use tabthat_dom::Document;
//!
//! let mut doc = Document::parse(r##"<div data-tab-that>
//!   <ul data-tab-list>
//!     <li><a href="#one">One</a></li>
//!     <li><a href="#two">Two</a></li>
//!   </ul>
//!   <section id="one">First</section>
//!   <section id="two">Second</section>
//! </div>"##);
//!
//! let mut tabs = TabSet::new(TabsConfig::default());
//! let ids = tabs.enhance_all(&mut doc, &TabOptions::default()).unwrap();
//! assert_eq!(tabs.get(ids[0]).unwrap().selected_index(), Some(0));
//!
//! let first = tabs.get(ids[0]).unwrap().pairs()[0].handle;
//! tabs.dispatch(&mut doc, &Event::key_down(first, Key::Right));
//! assert_eq!(tabs.get(ids[0]).unwrap().selected_index(), Some(1));
//! ```

mod controller;
mod error;
mod event;
mod journal;
mod key;
mod registry;

pub use controller::{Pair, TabController};
pub use error::TabError;
pub use event::{Action, Binding, Event, EventKind};
pub use key::Key;
pub use registry::{ControllerId, TabSet};
pub use tabthat_config::{Config, ConfigError, FocusPolicy, TabOptions, TabsConfig};
