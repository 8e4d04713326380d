//! The path index itself.
//!
//! `PathIndex<T>` maps normalized path strings to [`Entry`] records. Lookups
//! cost O(k) map probes where k is the path depth, independent of how many
//! entries the index holds.

use std::collections::BTreeMap;

use tracing::trace;

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::path;

/// An index of values keyed by POSIX-style paths.
///
/// Inserting a path creates every missing ancestor directory, and records a
/// snapshot of the inserted entry in its parent's children (and of the
/// parent in the grandparent's, up to `/`).
///
/// Mutation requires `&mut self`; share an index across tasks by wrapping it
/// in a reader/writer lock.
///
/// # Example
///
/// ```rust
/// use structfs_path_index::PathIndex;
///
/// let mut index = PathIndex::new();
/// index.put("/a/b", 1);
/// index.put("/a/b/c", 2);
///
/// assert_eq!(index.get("/a/b").and_then(|e| e.value()), Some(&1));
/// assert_eq!(index.longest_prefix("/a/b/c/d").map(|e| e.full_name()), Some("/a/b/c"));
///
/// // Only strict ancestors are considered.
/// assert_eq!(index.longest_prefix("/a/b/c").map(|e| e.full_name()), Some("/a/b"));
/// ```
#[derive(Debug, Clone)]
pub struct PathIndex<T> {
    index: BTreeMap<String, Entry<T>>,
}

impl<T> Default for PathIndex<T> {
    fn default() -> Self {
        Self {
            index: BTreeMap::new(),
        }
    }
}

impl<T> PathIndex<T> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` at `name`, creating missing ancestor directories.
    ///
    /// `value` may be `None` to store an entry without a value.
    ///
    /// Any children previously recorded at exactly `name` are discarded;
    /// ancestors keep theirs. Each ancestor then receives a snapshot of its
    /// immediate child along the path. Children lists only grow, so
    /// storing the same path twice leaves two snapshots of it in the parent.
    pub fn put(&mut self, name: &str, value: impl Into<Option<T>>)
    where
        T: Clone,
    {
        let name = path::normalize(name);
        trace!(path = %name, "put");

        let mut child = Entry::new(name.clone(), value.into());
        self.index.insert(name.clone(), child.clone());

        let mut last = name;
        while let Some(dir) = path::parent(&last).map(str::to_owned) {
            let parent = self.index.entry(dir.clone()).or_insert_with(|| {
                trace!(path = %dir, "synthesized directory");
                Entry::directory(dir.clone())
            });
            parent.push_child(child);
            child = parent.clone();
            last = dir;
        }
    }

    /// The entry stored or synthesized at exactly `name`.
    pub fn get(&self, name: &str) -> Option<&Entry<T>> {
        self.index.get(&path::normalize(name))
    }

    /// The entry at the nearest strict ancestor of `name`.
    ///
    /// The walk starts at the parent of the normalized name and moves up to
    /// `/`, so an entry at `name` itself is never returned. Callers that
    /// want an exact match to win should try [`get`](Self::get) first, or
    /// use [`resolve`](Self::resolve).
    pub fn longest_prefix(&self, name: &str) -> Option<&Entry<T>> {
        let name = path::normalize(name);
        for dir in path::ancestors(&name) {
            if let Some(entry) = self.index.get(dir) {
                return Some(entry);
            }
        }
        None
    }

    /// Route `name` to its governing entry.
    ///
    /// Returns the exact entry if one exists, else the longest strict
    /// prefix, along with the remainder of the normalized name below it
    /// (empty for an exact match).
    ///
    /// ```rust
    /// use structfs_path_index::PathIndex;
    ///
    /// let mut routes = PathIndex::new();
    /// routes.put("/static", "files");
    ///
    /// let (entry, rest) = routes.resolve("/static/css/site.css").unwrap();
    /// assert_eq!(entry.value(), Some(&"files"));
    /// assert_eq!(rest, "css/site.css");
    /// ```
    pub fn resolve(&self, name: &str) -> Option<(&Entry<T>, String)> {
        let name = path::normalize(name);
        if let Some(entry) = self.index.get(&name) {
            return Some((entry, String::new()));
        }
        let entry = self.longest_prefix(&name)?;
        let rest = path::strip_ancestor(&name, entry.full_name())?;
        Some((entry, rest.to_string()))
    }

    /// List the child snapshots of the directory at `name`.
    ///
    /// Snapshots appear in insertion order, repeats included.
    pub fn read_dir(&self, name: &str) -> Result<&[Entry<T>]> {
        let name = path::normalize(name);
        let entry = self
            .index
            .get(&name)
            .ok_or_else(|| Error::NotFound { path: name.clone() })?;
        if entry.children().is_empty() {
            return Err(Error::NotADirectory { path: name });
        }
        Ok(entry.children())
    }

    /// Check whether an entry exists at exactly `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of entries, synthesized directories included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over every entry in ascending path order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<T>> {
        self.index.values()
    }
}
