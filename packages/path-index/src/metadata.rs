//! Read-only file metadata for index entries.
//!
//! [`FileInfo`] is the capability a directory listing or static file
//! adapter depends on. [`Entry`] implements it by deriving every field from
//! its own path and children, so an index can be presented as a synthetic,
//! read-only filesystem.

use std::any::Any;
use std::fmt;
use std::time::SystemTime;

use crate::entry::Entry;
use crate::path;

/// Nominal size reported per child. Not a real byte count.
pub const SIZE_PER_CHILD: u64 = 512;

/// Generic file metadata, in the shape of `stat(2)`.
pub trait FileInfo {
    /// Final path segment.
    fn name(&self) -> &str;

    /// Size in bytes. May be an approximation.
    fn size(&self) -> u64;

    /// File type and permission bits.
    fn mode(&self) -> FileMode;

    /// Last modification time, `None` when not tracked.
    fn modified(&self) -> Option<SystemTime>;

    /// True if the mode marks a directory.
    fn is_dir(&self) -> bool {
        self.mode().is_dir()
    }

    /// Underlying OS object, if any.
    fn sys(&self) -> Option<&dyn Any>;
}

/// Unix-style mode bits: file type plus permission bits.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct FileMode(u32);

impl FileMode {
    /// File type mask.
    pub const TYPE_MASK: u32 = 0o170_000;
    /// Directory type bit (`S_IFDIR`).
    pub const DIR: u32 = 0o040_000;
    /// Regular file type bit (`S_IFREG`).
    pub const REGULAR: u32 = 0o100_000;
    /// Permission bit mask.
    pub const PERM_MASK: u32 = 0o777;

    /// `dr-xr-xr-x`
    pub const READ_ONLY_DIR: FileMode = FileMode(Self::DIR | 0o555);
    /// `-r--r--r--`
    pub const READ_ONLY_FILE: FileMode = FileMode(Self::REGULAR | 0o444);

    /// Wrap raw `st_mode` bits.
    pub const fn from_bits(bits: u32) -> Self {
        FileMode(bits)
    }

    /// The raw `st_mode` bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if the type bits mark a directory.
    pub const fn is_dir(self) -> bool {
        self.0 & Self::TYPE_MASK == Self::DIR
    }

    /// True if the type bits mark a regular file.
    pub const fn is_file(self) -> bool {
        self.0 & Self::TYPE_MASK == Self::REGULAR
    }

    /// The permission bits alone, e.g. `0o555`.
    pub const fn permissions(self) -> u32 {
        self.0 & Self::PERM_MASK
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const RWX: [char; 3] = ['r', 'w', 'x'];

        let kind = if self.is_dir() { 'd' } else { '-' };
        let mut out = String::with_capacity(10);
        out.push(kind);
        for bit in (0..9).rev() {
            if self.permissions() & (1 << bit) != 0 {
                out.push(RWX[2 - bit % 3]);
            } else {
                out.push('-');
            }
        }
        f.write_str(&out)
    }
}

impl<T> FileInfo for Entry<T> {
    fn name(&self) -> &str {
        path::base(self.full_name())
    }

    fn size(&self) -> u64 {
        SIZE_PER_CHILD * self.children().len() as u64
    }

    fn mode(&self) -> FileMode {
        if self.children().is_empty() {
            FileMode::READ_ONLY_FILE
        } else {
            FileMode::READ_ONLY_DIR
        }
    }

    fn modified(&self) -> Option<SystemTime> {
        None
    }

    fn sys(&self) -> Option<&dyn Any> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> Entry<u8> {
        Entry::new(name.to_string(), Some(0))
    }

    #[test]
    fn leaf_metadata() {
        let entry = leaf("/docs/readme");
        assert_eq!(entry.name(), "readme");
        assert_eq!(entry.size(), 0);
        assert!(!entry.is_dir());
        assert_eq!(entry.mode(), FileMode::READ_ONLY_FILE);
        assert_eq!(entry.modified(), None);
        assert!(entry.sys().is_none());
    }

    #[test]
    fn directory_metadata() {
        let mut dir = Entry::directory("/docs".to_string());
        dir.push_child(leaf("/docs/a"));
        dir.push_child(leaf("/docs/b"));
        dir.push_child(leaf("/docs/b"));

        assert_eq!(dir.name(), "docs");
        assert!(dir.is_dir());
        assert_eq!(dir.size(), 3 * SIZE_PER_CHILD);
        assert_eq!(dir.mode(), FileMode::READ_ONLY_DIR);
    }

    #[test]
    fn synthesized_entry_without_children_is_a_file() {
        let dir: Entry<u8> = Entry::directory("/empty".to_string());
        assert!(!dir.is_dir());
        assert_eq!(dir.size(), 0);
    }

    #[test]
    fn root_name() {
        let root: Entry<u8> = Entry::directory("/".to_string());
        assert_eq!(root.name(), "/");
    }

    #[test]
    fn mode_bits() {
        assert!(FileMode::READ_ONLY_DIR.is_dir());
        assert!(!FileMode::READ_ONLY_DIR.is_file());
        assert_eq!(FileMode::READ_ONLY_DIR.permissions(), 0o555);
        assert!(FileMode::READ_ONLY_FILE.is_file());
        assert_eq!(FileMode::READ_ONLY_FILE.permissions(), 0o444);
        assert_eq!(FileMode::from_bits(0o100_644).bits(), 0o100_644);
    }

    #[test]
    fn mode_display() {
        assert_eq!(FileMode::READ_ONLY_DIR.to_string(), "dr-xr-xr-x");
        assert_eq!(FileMode::READ_ONLY_FILE.to_string(), "-r--r--r--");
        assert_eq!(FileMode::from_bits(FileMode::DIR | 0o750).to_string(), "drwxr-x---");
    }

    #[test]
    fn usable_as_trait_object() {
        let entry = leaf("/a");
        let info: &dyn FileInfo = &entry;
        assert_eq!(info.name(), "a");
        assert!(!info.is_dir());
    }
}
