//! A single node of the hierarchy.

use crate::path;

/// One item in a [`PathIndex`](crate::PathIndex).
///
/// An entry is either a leaf created by [`put`](crate::PathIndex::put),
/// which carries the caller's value, or a directory synthesized to host
/// descendants, which carries none.
///
/// `children` holds snapshots: copies of each child as it was when that
/// child was last inserted beneath this entry. Grandchildren are reachable
/// through the nested snapshots, not through a flat list. Inserting the
/// same path twice appends a second snapshot to its parent, so a children
/// list can name the same path more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    full_name: String,
    children: Vec<Entry<T>>,
    value: Option<T>,
}

impl<T> Entry<T> {
    pub(crate) fn new(full_name: String, value: Option<T>) -> Self {
        debug_assert!(path::is_normalized(&full_name));
        Self {
            full_name,
            children: Vec::new(),
            value,
        }
    }

    pub(crate) fn directory(full_name: String) -> Self {
        Self::new(full_name, None)
    }

    pub(crate) fn push_child(&mut self, child: Entry<T>) {
        self.children.push(child);
    }

    /// The normalized absolute path of this entry.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Snapshots of the entries directly beneath this one, in insertion order.
    pub fn children(&self) -> &[Entry<T>] {
        &self.children
    }

    /// The value stored by `put`, if any.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume the entry, returning its value.
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// True for entries that only exist because a descendant implied them,
    /// or that were explicitly stored without a value.
    pub fn is_synthesized(&self) -> bool {
        self.value.is_none()
    }

    /// Find the most recent snapshot of the child with the given final segment.
    pub fn child(&self, name: &str) -> Option<&Entry<T>> {
        self.children
            .iter()
            .rev()
            .find(|child| path::base(&child.full_name) == name)
    }
}
