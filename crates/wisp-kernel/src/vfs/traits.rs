//! Core VFS traits and types.

use async_trait::async_trait;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Metadata about a file or directory.
#[derive(Debug, Clone)]
pub struct Metadata {
    /// True if this is a directory.
    pub is_dir: bool,
    /// True if this is a file.
    pub is_file: bool,
    /// Size in bytes (0 for directories).
    pub size: u64,
    /// Last modification time, if available.
    pub modified: Option<SystemTime>,
}

/// Type of directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

/// A directory entry returned by `list`.
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Name of the entry (not full path).
    pub name: String,
    /// Type of entry.
    pub entry_type: EntryType,
}

/// Read-only filesystem interface.
///
/// Listing a single directory level and stat are the only capabilities
/// pattern expansion needs. `list` and `stat` fail with `NotFound` when the
/// path does not exist and with `NotADirectory` when a directory operation
/// hits a file.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// List entries in a directory.
    async fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Get metadata for a file or directory.
    async fn stat(&self, path: &Path) -> io::Result<Metadata>;

    /// Check if a path exists.
    async fn exists(&self, path: &Path) -> bool {
        self.stat(path).await.is_ok()
    }
}
