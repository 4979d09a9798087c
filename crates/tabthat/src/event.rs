//! Input events and the bindings that route them.

use tabthat_dom::NodeId;

use crate::key::Key;

/// Kind of input event a binding listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyDown,
}

/// An input event delivered to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Pointer activation.
    Click {
        /// Element that received the click.
        target: NodeId,
    },
    /// Key press while `target` has focus.
    KeyDown {
        /// Element that received the key press.
        target: NodeId,
        /// The key pressed.
        key: Key,
    },
}

impl Event {
    pub fn click(target: NodeId) -> Self {
        Self::Click { target }
    }

    pub fn key_down(target: NodeId, key: Key) -> Self {
        Self::KeyDown { target, key }
    }

    pub fn target(&self) -> NodeId {
        match *self {
            Self::Click { target } | Self::KeyDown { target, .. } => target,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::KeyDown { .. } => EventKind::KeyDown,
        }
    }
}

/// What a controller does when a bound event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the tab at this index.
    Select(usize),
    /// Translate the pressed key into navigation.
    Navigate,
    /// Select the previous tab.
    Previous,
    /// Select the next tab.
    Next,
}

/// An event listener registered by a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Element the listener is attached to.
    pub target: NodeId,
    /// Event kind it listens for.
    pub kind: EventKind,
    /// Action performed when it fires.
    pub action: Action,
}

impl Binding {
    /// Whether this binding listens on `target` for `kind`.
    pub fn listens(&self, target: NodeId, kind: EventKind) -> bool {
        self.target == target && self.kind == kind
    }
}
