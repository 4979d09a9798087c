//! Tab controller for a single container.
//!
//! # Output markup
//!
//! ```html
//! <div data-tab-that="" class="is-tabbed">
//!   <ul data-tab-list="" role="tablist">
//!     <li role="presentation">
//!       <a href="#one" id="one-handle" role="tab" aria-controls="one"
//!          tabindex="0" aria-selected="true" class="is-selected">One</a>
//!     </li>
//!     <li role="presentation">
//!       <a href="#two" id="two-handle" role="tab" aria-controls="two"
//!          tabindex="-1" aria-selected="false">Two</a>
//!     </li>
//!   </ul>
//!   <section id="one" role="tabpanel" aria-labelledby="one-handle"
//!            aria-hidden="false" class="is-selected">...</section>
//!   <section id="two" role="tabpanel" aria-labelledby="two-handle"
//!            aria-hidden="true">...</section>
//! </div>
//! ```

use tabthat_config::{FocusPolicy, TabsConfig};
use tabthat_dom::{Document, NodeId, Selector};

use crate::error::TabError;
use crate::event::{Action, Binding, Event, EventKind};
use crate::journal::Journal;
use crate::key::Key;

/// A trigger element and the panel it reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub handle: NodeId,
    pub panel: NodeId,
}

/// An enhanced tab container.
///
/// Invariant: once constructed, exactly one pair carries the active state
/// unless the container has no triggers at all.
#[derive(Debug)]
pub struct TabController {
    container: NodeId,
    config: TabsConfig,
    list: NodeId,
    list_items: Vec<NodeId>,
    pairs: Vec<Pair>,
    prev_buttons: Vec<NodeId>,
    next_buttons: Vec<NodeId>,
    title: Option<NodeId>,
    selected: Option<usize>,
    bindings: Vec<Binding>,
    journal: Journal,
}

/// Resolved structure of a container before any mutation.
struct Structure {
    list: NodeId,
    list_items: Vec<NodeId>,
    pairs: Vec<Pair>,
    prev_buttons: Vec<NodeId>,
    next_buttons: Vec<NodeId>,
    title: Option<NodeId>,
}

impl TabController {
    /// Enhance `container` into a tab component.
    ///
    /// The initial selection is the first trigger already carrying the
    /// selected class, or the first trigger. Focus is not moved.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid configuration, a missing tab list, or a
    /// trigger whose target panel cannot be resolved. The document is not
    /// modified in that case.
    pub fn new(
        doc: &mut Document,
        container: NodeId,
        config: TabsConfig,
    ) -> Result<Self, TabError> {
        config.validate()?;
        let structure = resolve(doc, container, &config)?;

        let initial = structure
            .pairs
            .iter()
            .position(|pair| doc.has_class(pair.handle, &config.selected_class))
            .unwrap_or(0);

        let mut controller = Self {
            container,
            config,
            list: structure.list,
            list_items: structure.list_items,
            pairs: structure.pairs,
            prev_buttons: structure.prev_buttons,
            next_buttons: structure.next_buttons,
            title: structure.title,
            selected: None,
            bindings: Vec::new(),
            journal: Journal::default(),
        };

        controller.link(doc);
        if !controller.pairs.is_empty() {
            controller.activate(doc, initial, false);
        }
        controller.label(doc);
        controller.bind();

        let enhanced_class = controller.config.enhanced_class.clone();
        controller.journal.add_class(doc, container, &enhanced_class);

        tracing::info!(
            tabs = controller.pairs.len(),
            selected = initial,
            "Enhanced tab container"
        );
        Ok(controller)
    }

    /// Set roles and cross references on list, items, handles and panels.
    fn link(&mut self, doc: &mut Document) {
        self.journal.set_attr(doc, self.list, "role", "tablist");
        for &item in &self.list_items {
            self.journal.set_attr(doc, item, "role", "presentation");
        }

        for pair in &self.pairs {
            let panel_id = doc.id(pair.panel).unwrap_or_default().to_owned();
            let handle_id = match doc.id(pair.handle) {
                Some(id) => id.to_owned(),
                None => {
                    let generated = format!("{panel_id}-handle");
                    self.journal.set_attr(doc, pair.handle, "id", &generated);
                    generated
                }
            };

            self.journal.set_attr(doc, pair.handle, "role", "tab");
            self.journal.set_attr(doc, pair.handle, "aria-controls", &panel_id);
            self.journal.set_attr(doc, pair.handle, "tabindex", "-1");
            self.journal.set_attr(doc, pair.panel, "role", "tabpanel");
            self.journal.set_attr(doc, pair.panel, "aria-labelledby", &handle_id);
        }

        tracing::debug!(pairs = self.pairs.len(), "Linked tab pairs");
    }

    /// Label the container with the title element's text.
    fn label(&mut self, doc: &mut Document) {
        let Some(title) = self.title else {
            return;
        };
        let text = doc.text_content(title);
        let text = text.trim();
        if !text.is_empty() {
            self.journal.set_attr(doc, self.container, "aria-label", text);
        }
    }

    /// Register click and keydown bindings.
    fn bind(&mut self) {
        for (index, pair) in self.pairs.iter().enumerate() {
            self.bindings.push(Binding {
                target: pair.handle,
                kind: EventKind::Click,
                action: Action::Select(index),
            });
            self.bindings.push(Binding {
                target: pair.handle,
                kind: EventKind::KeyDown,
                action: Action::Navigate,
            });
        }
        for &button in &self.prev_buttons {
            self.bindings.push(Binding {
                target: button,
                kind: EventKind::Click,
                action: Action::Previous,
            });
        }
        for &button in &self.next_buttons {
            self.bindings.push(Binding {
                target: button,
                kind: EventKind::Click,
                action: Action::Next,
            });
        }
        tracing::debug!(bindings = self.bindings.len(), "Bound tab events");
    }

    /// Remove every binding this controller registered.
    fn unbind(&mut self) {
        tracing::debug!(bindings = self.bindings.len(), "Unbound tab events");
        self.bindings.clear();
    }

    /// Tear the component down and return the container.
    ///
    /// Bindings are removed and every attribute and class touched during
    /// linking and selection is restored to its pre-enhancement value.
    pub fn destroy(mut self, doc: &mut Document) -> NodeId {
        self.unbind();
        let restored = self.journal.len();
        self.journal.rollback(doc);
        tracing::info!(restored, "Destroyed tab container");
        self.container
    }

    /// Select the pair at `index`.
    ///
    /// Out-of-range indices are clamped into `[0, len - 1]`; selecting the
    /// current index does nothing. Returns whether the selection changed.
    pub fn select(&mut self, doc: &mut Document, index: isize) -> bool {
        if self.pairs.is_empty() {
            return false;
        }
        let last = self.pairs.len() - 1;
        let index = usize::try_from(index).unwrap_or(0).min(last);
        self.activate(doc, index, self.config.focus == FocusPolicy::Activate)
    }

    /// Select the next pair, wrapping to the first when configured.
    pub fn select_next(&mut self, doc: &mut Document) -> bool {
        let Some(current) = self.selected else {
            return self.select_first(doc);
        };
        let len = self.pairs.len();
        let next = if self.config.wrap {
            (current + 1) % len
        } else {
            (current + 1).min(len - 1)
        };
        self.activate(doc, next, self.config.focus == FocusPolicy::Activate)
    }

    /// Select the previous pair, wrapping to the last when configured.
    pub fn select_previous(&mut self, doc: &mut Document) -> bool {
        let Some(current) = self.selected else {
            return self.select_first(doc);
        };
        let previous = match current.checked_sub(1) {
            Some(index) => index,
            None if self.config.wrap => self.pairs.len() - 1,
            None => 0,
        };
        self.activate(doc, previous, self.config.focus == FocusPolicy::Activate)
    }

    pub fn select_first(&mut self, doc: &mut Document) -> bool {
        if self.pairs.is_empty() {
            return false;
        }
        self.activate(doc, 0, self.config.focus == FocusPolicy::Activate)
    }

    pub fn select_last(&mut self, doc: &mut Document) -> bool {
        let Some(last) = self.pairs.len().checked_sub(1) else {
            return false;
        };
        self.activate(doc, last, self.config.focus == FocusPolicy::Activate)
    }

    /// Handle a key press on one of the handles.
    ///
    /// Returns whether the key was a navigation key. Under
    /// [`FocusPolicy::Keyboard`] a handled key moves focus to the selected
    /// handle.
    pub fn on_key(&mut self, doc: &mut Document, key: Key) -> bool {
        match key {
            Key::Left | Key::Up => self.select_previous(doc),
            Key::Right | Key::Down => self.select_next(doc),
            Key::Home if self.config.home_end_keys => self.select_first(doc),
            Key::End if self.config.home_end_keys => self.select_last(doc),
            _ => return false,
        };
        if self.config.focus == FocusPolicy::Keyboard
            && let Some(pair) = self.selected_pair()
        {
            doc.focus(pair.handle);
        }
        true
    }

    /// Run the binding matching `event` on `target`, if any.
    ///
    /// `target` may differ from the event's own target when the event is
    /// bubbling up from a descendant.
    pub(crate) fn handle(&mut self, doc: &mut Document, target: NodeId, event: &Event) -> bool {
        let Some(binding) = self
            .bindings
            .iter()
            .find(|binding| binding.listens(target, event.kind()))
            .copied()
        else {
            return false;
        };

        match (binding.action, event) {
            (Action::Select(index), _) => {
                self.activate(doc, index, self.config.focus == FocusPolicy::Activate);
            }
            (Action::Navigate, Event::KeyDown { key, .. }) => {
                self.on_key(doc, *key);
            }
            (Action::Navigate, Event::Click { .. }) => {}
            (Action::Previous, _) => {
                self.select_previous(doc);
            }
            (Action::Next, _) => {
                self.select_next(doc);
            }
        }
        true
    }

    /// Whether any binding listens on `target` for `kind`.
    pub fn listens(&self, target: NodeId, kind: EventKind) -> bool {
        self.bindings.iter().any(|b| b.listens(target, kind))
    }

    /// Switch the active pair to `index` (already in range).
    fn activate(&mut self, doc: &mut Document, index: usize, focus: bool) -> bool {
        if self.selected == Some(index) {
            return false;
        }
        if let Some(previous) = self.selected {
            self.hide(doc, previous);
        }
        self.show(doc, index);
        self.selected = Some(index);
        if focus {
            doc.focus(self.pairs[index].handle);
        }
        tracing::debug!(index, "Selected tab");
        true
    }

    fn hide(&mut self, doc: &mut Document, index: usize) {
        let Pair { handle, panel } = self.pairs[index];
        let class = &self.config.selected_class;
        self.journal.set_attr(doc, handle, "tabindex", "-1");
        self.journal.set_attr(doc, handle, "aria-selected", "false");
        self.journal.remove_class(doc, handle, class);
        self.journal.set_attr(doc, panel, "aria-hidden", "true");
        self.journal.remove_class(doc, panel, class);
    }

    fn show(&mut self, doc: &mut Document, index: usize) {
        let Pair { handle, panel } = self.pairs[index];
        let class = &self.config.selected_class;
        self.journal.set_attr(doc, handle, "tabindex", "0");
        self.journal.set_attr(doc, handle, "aria-selected", "true");
        self.journal.add_class(doc, handle, class);
        self.journal.set_attr(doc, panel, "aria-hidden", "false");
        self.journal.add_class(doc, panel, class);
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Index of the active pair, `None` only for an empty component.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_pair(&self) -> Option<Pair> {
        self.selected.map(|index| self.pairs[index])
    }

    /// Event bindings currently registered.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Index of the pair whose handle is `handle`.
    pub fn index_of(&self, handle: NodeId) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.handle == handle)
    }
}

/// Find the list, triggers, panels and controls without touching the document.
fn resolve(doc: &Document, container: NodeId, config: &TabsConfig) -> Result<Structure, TabError> {
    let list_selector = Selector::parse(&config.list_selector)?;
    let list = doc
        .query_selector(container, &list_selector)
        .ok_or_else(|| TabError::MissingList {
            container: describe(doc, container),
            selector: config.list_selector.clone(),
        })?;

    let list_items = doc.select_all(list, "li")?;
    let handles = doc.select_all(list, "a")?;

    let pairs = handles
        .into_iter()
        .map(|handle| {
            let target = doc
                .attr(handle, "href")
                .and_then(|href| href.split_once('#'))
                .map(|(_, fragment)| fragment)
                .filter(|fragment| !fragment.is_empty())
                .ok_or_else(|| TabError::MissingTarget {
                    trigger: describe(doc, handle),
                })?;
            let panel = doc
                .get_element_by_id(target)
                .ok_or_else(|| TabError::MissingPanel {
                    trigger: describe(doc, handle),
                    target: target.to_owned(),
                })?;
            Ok(Pair { handle, panel })
        })
        .collect::<Result<Vec<_>, TabError>>()?;

    let prev_buttons = doc.select_all(container, &config.prev_button_selector)?;
    let next_buttons = doc.select_all(container, &config.next_button_selector)?;
    let title = match &config.title_selector {
        Some(selector) => doc.select(container, selector)?,
        None => None,
    };

    Ok(Structure {
        list,
        list_items,
        pairs,
        prev_buttons,
        next_buttons,
        title,
    })
}

/// Short description of an element for error messages: `a#id` or `a[href="..."]`.
fn describe(doc: &Document, node: NodeId) -> String {
    let tag = doc.tag(node);
    if let Some(id) = doc.id(node) {
        return format!("{tag}#{id}");
    }
    match doc.attr(node, "href") {
        Some(href) => format!(r#"{tag}[href="{href}"]"#),
        None => format!("<{tag}>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const THREE_TABS: &str = r##"<div id="tabs" data-tab-that="">
<h2 data-tab-title="">Install options</h2>
<ul data-tab-list="">
<li><a href="#one">One</a></li>
<li><a href="#two">Two</a></li>
<li><a href="#three">Three</a></li>
</ul>
<section id="one">First</section>
<section id="two">Second</section>
<section id="three">Third</section>
<button type="button" data-tab-previous="">Previous</button>
<button type="button" data-tab-next="">Next</button>
</div>"##;

    fn setup(markup: &str, config: TabsConfig) -> (Document, TabController) {
        let mut doc = Document::parse(markup);
        let container = doc.get_element_by_id("tabs").unwrap();
        let controller = TabController::new(&mut doc, container, config).unwrap();
        (doc, controller)
    }

    fn no_wrap() -> TabsConfig {
        TabsConfig {
            wrap: false,
            ..TabsConfig::default()
        }
    }

    /// Indices of pairs whose handle or panel carries any active marker.
    fn active_pairs(doc: &Document, controller: &TabController) -> Vec<usize> {
        let class = &controller.config().selected_class;
        controller
            .pairs()
            .iter()
            .enumerate()
            .filter(|(_, pair)| {
                doc.has_class(pair.handle, class)
                    || doc.has_class(pair.panel, class)
                    || doc.attr(pair.handle, "aria-selected") == Some("true")
                    || doc.attr(pair.handle, "tabindex") == Some("0")
                    || doc.attr(pair.panel, "aria-hidden") == Some("false")
            })
            .map(|(index, _)| index)
            .collect()
    }

    #[test]
    fn test_initial_selection_defaults_to_first() {
        let (doc, controller) = setup(THREE_TABS, TabsConfig::default());

        assert_eq!(controller.len(), 3);
        assert_eq!(controller.selected_index(), Some(0));
        assert_eq!(active_pairs(&doc, &controller), vec![0]);
        assert_eq!(doc.focused(), None);
    }

    #[test]
    fn test_initial_selection_from_marked_trigger() {
        let markup = THREE_TABS.replace(
            r##"<a href="#three">"##,
            r##"<a href="#three" class="is-selected">"##,
        );
        let (doc, controller) = setup(&markup, TabsConfig::default());

        assert_eq!(controller.selected_index(), Some(2));
        assert_eq!(active_pairs(&doc, &controller), vec![2]);
    }

    #[test]
    fn test_link_sets_roles_and_references() {
        let (doc, controller) = setup(THREE_TABS, TabsConfig::default());
        let list = doc.select(doc.root(), "ul").unwrap().unwrap();
        let Pair { handle, panel } = controller.pairs()[1];

        assert_eq!(doc.attr(list, "role"), Some("tablist"));
        for item in doc.select_all(list, "li").unwrap() {
            assert_eq!(doc.attr(item, "role"), Some("presentation"));
        }
        assert_eq!(doc.attr(handle, "id"), Some("two-handle"));
        assert_eq!(doc.attr(handle, "role"), Some("tab"));
        assert_eq!(doc.attr(handle, "aria-controls"), Some("two"));
        assert_eq!(doc.attr(handle, "tabindex"), Some("-1"));
        assert_eq!(doc.attr(handle, "aria-selected"), None);
        assert_eq!(doc.attr(panel, "role"), Some("tabpanel"));
        assert_eq!(doc.attr(panel, "aria-labelledby"), Some("two-handle"));

        let container = controller.container();
        assert!(doc.has_class(container, "is-tabbed"));
    }

    #[test]
    fn test_existing_handle_id_is_kept() {
        let markup = THREE_TABS.replace(r##"<a href="#one">"##, r##"<a href="#one" id="custom">"##);
        let (doc, controller) = setup(&markup, TabsConfig::default());
        let Pair { handle, panel } = controller.pairs()[0];

        assert_eq!(doc.attr(handle, "id"), Some("custom"));
        assert_eq!(doc.attr(panel, "aria-labelledby"), Some("custom"));
    }

    #[test]
    fn test_select_switches_active_pair() {
        let (mut doc, mut controller) = setup(THREE_TABS, TabsConfig::default());

        assert!(controller.select(&mut doc, 1));
        assert_eq!(controller.selected_index(), Some(1));
        assert_eq!(active_pairs(&doc, &controller), vec![1]);

        let Pair { handle, panel } = controller.pairs()[0];
        assert_eq!(doc.attr(handle, "aria-selected"), Some("false"));
        assert_eq!(doc.attr(handle, "tabindex"), Some("-1"));
        assert_eq!(doc.attr(panel, "aria-hidden"), Some("true"));
    }

    #[test]
    fn test_select_is_idempotent() {
        let (mut doc, mut controller) = setup(THREE_TABS, TabsConfig::default());
        controller.select(&mut doc, 2);
        let before = doc.to_html();

        assert!(!controller.select(&mut doc, 2));
        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn test_select_clamps_out_of_range() {
        let (mut doc, mut controller) = setup(THREE_TABS, TabsConfig::default());

        controller.select(&mut doc, 99);
        assert_eq!(controller.selected_index(), Some(2));
        controller.select(&mut doc, -5);
        assert_eq!(controller.selected_index(), Some(0));
        controller.select(&mut doc, isize::MAX);
        assert_eq!(controller.selected_index(), Some(2));
        assert_eq!(active_pairs(&doc, &controller), vec![2]);
    }

    #[test]
    fn test_exactly_one_active_through_navigation() {
        let (mut doc, mut controller) = setup(THREE_TABS, TabsConfig::default());
        let steps: [fn(&mut TabController, &mut Document) -> bool; 4] = [
            TabController::select_next,
            TabController::select_previous,
            TabController::select_last,
            TabController::select_first,
        ];

        for step in steps.iter().cycle().take(12) {
            step(&mut controller, &mut doc);
            let selected = controller.selected_index().unwrap();
            assert_eq!(active_pairs(&doc, &controller), vec![selected]);
        }
    }

    #[test]
    fn test_wrap_at_both_ends() {
        let (mut doc, mut controller) = setup(THREE_TABS, TabsConfig::default());

        controller.select_previous(&mut doc);
        assert_eq!(controller.selected_index(), Some(2));
        controller.select_next(&mut doc);
        assert_eq!(controller.selected_index(), Some(0));
    }

    #[test]
    fn test_clamp_at_both_ends_without_wrap() {
        let (mut doc, mut controller) = setup(THREE_TABS, no_wrap());

        assert!(!controller.select_previous(&mut doc));
        assert_eq!(controller.selected_index(), Some(0));

        controller.select_last(&mut doc);
        assert!(!controller.select_next(&mut doc));
        assert_eq!(controller.selected_index(), Some(2));
    }

    #[test]
    fn test_select_first_and_last() {
        let (mut doc, mut controller) = setup(THREE_TABS, TabsConfig::default());

        assert!(controller.select_last(&mut doc));
        assert_eq!(controller.selected_index(), Some(2));
        assert!(controller.select_first(&mut doc));
        assert_eq!(controller.selected_index(), Some(0));
    }

    #[test]
    fn test_keyboard_navigation_focuses_selected_handle() {
        let (mut doc, mut controller) = setup(THREE_TABS, TabsConfig::default());

        assert!(controller.on_key(&mut doc, Key::Right));
        assert_eq!(controller.selected_index(), Some(1));
        assert_eq!(doc.focused(), Some(controller.pairs()[1].handle));

        assert!(controller.on_key(&mut doc, Key::Up));
        assert_eq!(controller.selected_index(), Some(0));
        assert!(controller.on_key(&mut doc, Key::End));
        assert_eq!(controller.selected_index(), Some(2));
        assert!(controller.on_key(&mut doc, Key::Home));
        assert_eq!(controller.selected_index(), Some(0));
        assert!(controller.on_key(&mut doc, Key::Down));
        assert!(controller.on_key(&mut doc, Key::Left));
        assert_eq!(controller.selected_index(), Some(0));

        doc.blur();
        assert!(!controller.on_key(&mut doc, Key::Other));
        assert_eq!(doc.focused(), None);
    }

    #[test]
    fn test_home_end_can_be_disabled() {
        let config = TabsConfig {
            home_end_keys: false,
            ..TabsConfig::default()
        };
        let (mut doc, mut controller) = setup(THREE_TABS, config);

        assert!(!controller.on_key(&mut doc, Key::End));
        assert_eq!(controller.selected_index(), Some(0));
    }

    #[test]
    fn test_activate_focus_policy() {
        let config = TabsConfig {
            focus: FocusPolicy::Activate,
            ..TabsConfig::default()
        };
        let (mut doc, mut controller) = setup(THREE_TABS, config);
        assert_eq!(doc.focused(), None);

        controller.select(&mut doc, 2);
        assert_eq!(doc.focused(), Some(controller.pairs()[2].handle));
    }

    #[test]
    fn test_keyboard_policy_leaves_focus_on_plain_select() {
        let (mut doc, mut controller) = setup(THREE_TABS, TabsConfig::default());

        controller.select(&mut doc, 2);
        assert_eq!(doc.focused(), None);
    }

    #[test]
    fn test_title_labels_container() {
        let config = TabsConfig {
            title_selector: Some("[data-tab-title]".to_owned()),
            ..TabsConfig::default()
        };
        let (doc, controller) = setup(THREE_TABS, config);

        assert_eq!(
            doc.attr(controller.container(), "aria-label"),
            Some("Install options")
        );
    }

    #[test]
    fn test_bindings_cover_handles_and_controls() {
        let (_, controller) = setup(THREE_TABS, TabsConfig::default());

        // click + keydown per handle, one click each for previous and next
        assert_eq!(controller.bindings().len(), 8);
        let handle = controller.pairs()[2].handle;
        assert!(controller.listens(handle, EventKind::Click));
        assert!(controller.listens(handle, EventKind::KeyDown));
    }

    #[test]
    fn test_destroy_restores_markup() {
        let (mut doc, mut controller) = setup(THREE_TABS, TabsConfig::default());
        controller.select(&mut doc, 1);
        let container = controller.container();

        let returned = controller.destroy(&mut doc);

        assert_eq!(returned, container);
        assert_eq!(doc.to_html(), THREE_TABS);
    }

    #[test]
    fn test_destroy_keeps_authored_selected_marker() {
        let markup = THREE_TABS.replace(
            r##"<a href="#two">"##,
            r##"<a href="#two" class="is-selected">"##,
        );
        let (mut doc, mut controller) = setup(&markup, TabsConfig::default());
        controller.select(&mut doc, 0);

        controller.destroy(&mut doc);
        assert_eq!(doc.to_html(), markup);
    }

    #[test]
    fn test_destroy_restores_attribute_order() {
        let markup = THREE_TABS.replace(
            r##"<a href="#one">"##,
            r##"<a class="is-selected" href="#one">"##,
        );
        let (mut doc, mut controller) = setup(&markup, TabsConfig::default());
        controller.select(&mut doc, 1);
        let first = controller.pairs()[0].handle;
        assert!(!doc.has_attr(first, "class"));

        controller.destroy(&mut doc);
        assert_eq!(doc.to_html(), markup);
    }

    #[test]
    fn test_missing_panel_is_reported_without_mutation() {
        let markup = THREE_TABS.replace(r#"<section id="two">"#, r#"<section id="deux">"#);
        let mut doc = Document::parse(&markup);
        let container = doc.get_element_by_id("tabs").unwrap();

        let err = TabController::new(&mut doc, container, TabsConfig::default()).unwrap_err();

        assert!(matches!(
            &err,
            TabError::MissingPanel { trigger, target }
                if trigger == r##"a[href="#two"]"## && target == "two"
        ));
        assert_eq!(doc.to_html(), markup);
    }

    #[test]
    fn test_missing_target_fragment() {
        let markup = THREE_TABS.replace(r##"<a href="#one">"##, r#"<a href="/one">"#);
        let mut doc = Document::parse(&markup);
        let container = doc.get_element_by_id("tabs").unwrap();

        let err = TabController::new(&mut doc, container, TabsConfig::default()).unwrap_err();
        assert!(matches!(err, TabError::MissingTarget { .. }));
    }

    #[test]
    fn test_missing_list() {
        let mut doc = Document::parse(r#"<div id="tabs"><p>No list</p></div>"#);
        let container = doc.get_element_by_id("tabs").unwrap();

        let err = TabController::new(&mut doc, container, TabsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("div#tabs"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut doc = Document::parse(THREE_TABS);
        let container = doc.get_element_by_id("tabs").unwrap();
        let config = TabsConfig {
            selected_class: String::new(),
            ..TabsConfig::default()
        };

        let err = TabController::new(&mut doc, container, config).unwrap_err();
        assert!(matches!(err, TabError::Config(_)));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut doc = Document::parse(r#"<div id="tabs"><ul data-tab-list=""></ul></div>"#);
        let container = doc.get_element_by_id("tabs").unwrap();
        let mut controller =
            TabController::new(&mut doc, container, TabsConfig::default()).unwrap();

        assert!(controller.is_empty());
        assert_eq!(controller.selected_index(), None);
        assert!(!controller.select(&mut doc, 0));
        assert!(!controller.select_first(&mut doc));
        assert!(!controller.select_last(&mut doc));
        assert!(!controller.select_next(&mut doc));
        assert!(!controller.select_previous(&mut doc));
        assert_eq!(controller.selected_index(), None);
    }
}
