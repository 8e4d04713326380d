//! Lexical cleaning of POSIX-style path strings.
//!
//! Every key stored in a [`PathIndex`](crate::PathIndex) goes through
//! [`normalize`] first, so two inputs that clean to the same string always
//! address the same entry. Nothing here touches the filesystem.

/// The normalized root path.
pub const ROOT: &str = "/";

const SEPARATOR: char = '/';

/// Clean `path` into a canonical absolute path.
///
/// # Rules
///
/// - A leading `/` is implied when missing
/// - Repeated slashes collapse and a trailing slash is dropped (except for `/`)
/// - `.` components are removed
/// - `..` removes the preceding component, and is ignored at the root
///
/// Every input maps to some normalized path; the empty string maps to `/`.
///
/// # Examples
///
/// ```rust
/// use structfs_path_index::path::normalize;
///
/// assert_eq!(normalize("a/b/"), "/a/b");
/// assert_eq!(normalize("//a/./b/../c"), "/a/c");
/// assert_eq!(normalize("../.."), "/");
/// ```
pub fn normalize(path: &str) -> String {
    let mut components: Vec<&str> = Vec::new();
    for component in path.split(SEPARATOR) {
        match component {
            "" | "." => {}
            ".." => {
                components.pop();
            }
            other => components.push(other),
        }
    }

    if components.is_empty() {
        return ROOT.to_string();
    }

    let mut normalized = String::with_capacity(path.len() + 1);
    for component in components {
        normalized.push(SEPARATOR);
        normalized.push_str(component);
    }
    normalized
}

/// Check whether `path` is already in normalized form.
pub(crate) fn is_normalized(path: &str) -> bool {
    normalize(path) == path
}

/// The directory containing a normalized path, or `None` for the root.
///
/// ```rust
/// use structfs_path_index::path::parent;
///
/// assert_eq!(parent("/a/b"), Some("/a"));
/// assert_eq!(parent("/a"), Some("/"));
/// assert_eq!(parent("/"), None);
/// ```
pub fn parent(path: &str) -> Option<&str> {
    if path == ROOT {
        return None;
    }
    match path.rfind(SEPARATOR)? {
        0 => Some(ROOT),
        i => Some(&path[..i]),
    }
}

/// The final segment of a normalized path. The root's base is `/`.
pub fn base(path: &str) -> &str {
    if path == ROOT {
        return ROOT;
    }
    match path.rfind(SEPARATOR) {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

/// Every strict ancestor of a normalized path, nearest first, ending at `/`.
///
/// The path itself is not yielded.
pub fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    std::iter::successors(parent(path), |&dir| parent(dir))
}

/// The part of `path` below `ancestor`, without a leading slash.
///
/// Both arguments must be normalized and `ancestor` must be `path` or one
/// of its ancestors; otherwise `None` is returned.
pub fn strip_ancestor<'a>(path: &'a str, ancestor: &str) -> Option<&'a str> {
    if ancestor == ROOT {
        return path.strip_prefix(SEPARATOR);
    }
    let rest = path.strip_prefix(ancestor)?;
    if rest.is_empty() {
        Some(rest)
    } else {
        rest.strip_prefix(SEPARATOR)
    }
}
