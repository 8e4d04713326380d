//! StructFS path index: values keyed by POSIX-style paths.
//!
//! A [`PathIndex`] answers three kinds of query over hierarchical paths
//! like `/a/b/c`:
//! - exact lookup with [`PathIndex::get`]
//! - nearest strict ancestor with [`PathIndex::longest_prefix`]
//! - immediate children with [`PathIndex::read_dir`]
//!
//! Every key is lexically normalized by [`path::normalize`]. Inserting a
//! path creates its missing ancestor directories. Each [`Entry`] implements
//! [`FileInfo`], so an index can back a synthetic read-only filesystem.
//!
//! Use it for:
//! - Path routers that pick the most specific registered handler
//! - Virtual filesystem overlays
//! - Namespace dispatch
//!
//! # Example
//!
//! ```rust
//! use structfs_path_index::{FileInfo, PathIndex};
//!
//! let mut routes = PathIndex::new();
//! routes.put("/users", "list_users");
//! routes.put("/users/admin", "admin");
//!
//! let handler = routes
//!     .get("/users/42")
//!     .or_else(|| routes.longest_prefix("/users/42"))
//!     .and_then(|entry| entry.value());
//! assert_eq!(handler, Some(&"list_users"));
//!
//! let root = routes.get("/").unwrap();
//! assert!(root.is_dir());
//! assert_eq!(root.mode().to_string(), "dr-xr-xr-x");
//! ```

mod entry;
mod error;
mod index;
mod metadata;
pub mod path;

pub use entry::Entry;
pub use error::{Error, Result};
pub use index::PathIndex;
pub use metadata::{FileInfo, FileMode, SIZE_PER_CHILD};
