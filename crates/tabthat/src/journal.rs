//! Reversible document mutations.
//!
//! Every attribute or class change a controller makes goes through a
//! [`Journal`], which remembers the value each slot held before it was first
//! touched, along with where it sat in the attribute or class list. Rolling
//! back restores exactly that state.

use std::collections::HashSet;

use tabthat_dom::{Document, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Slot {
    Attr(String),
    Class(String),
}

/// Where a class sat before it was touched.
#[derive(Debug, Clone, Copy)]
struct ClassPlace {
    /// Index in the class list.
    position: usize,
    /// Index of the `class` attribute in the attribute list.
    attr_index: usize,
}

#[derive(Debug)]
enum Entry {
    Attr {
        node: NodeId,
        name: String,
        /// Attribute index and value.
        previous: Option<(usize, String)>,
    },
    Class {
        node: NodeId,
        class: String,
        previous: Option<ClassPlace>,
    },
}

#[derive(Debug, Default)]
pub(crate) struct Journal {
    entries: Vec<Entry>,
    touched: HashSet<(NodeId, Slot)>,
}

impl Journal {
    pub(crate) fn set_attr(&mut self, doc: &mut Document, node: NodeId, name: &str, value: &str) {
        if self.touched.insert((node, Slot::Attr(name.to_owned()))) {
            self.entries.push(Entry::Attr {
                node,
                name: name.to_owned(),
                previous: doc
                    .attr_index(node, name)
                    .zip(doc.attr(node, name))
                    .map(|(index, old)| (index, old.to_owned())),
            });
        }
        doc.set_attr(node, name, value);
    }

    pub(crate) fn add_class(&mut self, doc: &mut Document, node: NodeId, class: &str) {
        self.record_class(doc, node, class);
        doc.add_class(node, class);
    }

    pub(crate) fn remove_class(&mut self, doc: &mut Document, node: NodeId, class: &str) {
        self.record_class(doc, node, class);
        doc.remove_class(node, class);
    }

    fn record_class(&mut self, doc: &Document, node: NodeId, class: &str) {
        if self.touched.insert((node, Slot::Class(class.to_owned()))) {
            self.entries.push(Entry::Class {
                node,
                class: class.to_owned(),
                previous: doc
                    .element(node)
                    .classes()
                    .position(|c| c == class)
                    .zip(doc.attr_index(node, "class"))
                    .map(|(position, attr_index)| ClassPlace {
                        position,
                        attr_index,
                    }),
            });
        }
    }

    /// Number of distinct slots touched so far.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Restore every touched slot, newest first.
    pub(crate) fn rollback(self, doc: &mut Document) {
        for entry in self.entries.into_iter().rev() {
            match entry {
                Entry::Attr {
                    node,
                    name,
                    previous: Some((index, value)),
                } => doc.insert_attr(node, index, &name, value),
                Entry::Attr {
                    node,
                    name,
                    previous: None,
                } => {
                    doc.remove_attr(node, &name);
                }
                Entry::Class {
                    node,
                    class,
                    previous: Some(place),
                } => {
                    doc.insert_class(node, place.position, &class);
                    if let Some(value) = doc.attr(node, "class").map(str::to_owned) {
                        doc.insert_attr(node, place.attr_index, "class", value);
                    }
                }
                Entry::Class {
                    node,
                    class,
                    previous: None,
                } => doc.remove_class(node, &class),
            }
        }
    }
}
