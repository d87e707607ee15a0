//! The simulated working directory.
//!
//! `Workspace` bundles a filesystem handle with an absolute current
//! directory. It replaces an ambient process-global cwd: every path
//! resolution takes the workspace it should resolve against, and a scoped
//! override is just a second value from [`Workspace::with_cwd`] — nothing
//! is mutated, so there is nothing to restore and concurrent use is safe.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use crate::vfs::Filesystem;

/// Filesystem handle plus current working directory.
#[derive(Clone)]
pub struct Workspace {
    fs: Arc<dyn Filesystem>,
    cwd: PathBuf,
}

impl Workspace {
    /// Create a workspace at an explicit working directory.
    ///
    /// `cwd` should be absolute; relative paths resolve against it as-is.
    pub fn new(fs: Arc<dyn Filesystem>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            cwd: cwd.into(),
        }
    }

    /// Create a workspace at the real process working directory.
    ///
    /// The directory is read and canonicalized once, here; later changes to
    /// the process cwd do not affect the workspace.
    pub fn from_env(fs: Arc<dyn Filesystem>) -> io::Result<Self> {
        let cwd = std::env::current_dir()?.canonicalize()?;
        Ok(Self { fs, cwd })
    }

    /// The filesystem this workspace resolves against.
    pub fn fs(&self) -> &Arc<dyn Filesystem> {
        &self.fs
    }

    /// The current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// A workspace with the same filesystem and a different working
    /// directory. The receiver is untouched, so an override ends when the
    /// returned value goes out of scope.
    pub fn with_cwd(&self, cwd: impl Into<PathBuf>) -> Self {
        Self {
            fs: Arc::clone(&self.fs),
            cwd: cwd.into(),
        }
    }

    /// Resolve a path against the working directory.
    ///
    /// Absolute paths pass through; `.` resolves to the working directory
    /// itself; anything else joins onto it. `.`/`..` segments are folded
    /// lexically so the result is a clean absolute path.
    pub fn resolve(&self, path: &str) -> PathBuf {
        if path == "." {
            return self.cwd.clone();
        }
        let joined = if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        };
        normalize(&joined)
    }
}

/// Fold `.` and `..` segments without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::RootDir => result.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(s) => result.push(s),
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
        }
    }
    result
}
