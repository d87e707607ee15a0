//! Pattern expansion: from a glob pattern to the matching entries of one
//! directory level.
//!
//! A full pattern splits into a directory part and a final glob part. The
//! directory part resolves against the workspace; the final part compiles
//! to a matcher and filters that directory's direct children. Expansion is
//! never recursive — one listing per call.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use wisp_glob::Glob;

use crate::paths::{join_path, split_path};
use crate::workspace::Workspace;

/// Errors from resolving a pattern against a directory.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The directory part of the pattern does not exist.
    #[error("no such directory: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    /// The directory part of the pattern names something other than a
    /// directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// Any other failure from the underlying filesystem.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Expand a glob pattern against the workspace.
///
/// A pattern with no directory part lists the working directory itself;
/// otherwise everything up to the last separator names the directory and
/// the last component is the glob. Matches come back as absolute paths in
/// the order the filesystem yields them. No matches is an empty vec, not
/// an error; a missing directory is an error, not an empty vec.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
/// use wisp_kernel::vfs::LocalFs;
/// use wisp_kernel::{list, Workspace};
///
/// # async fn demo() -> Result<(), wisp_kernel::ResolveError> {
/// let ws = Workspace::from_env(Arc::new(LocalFs::new("/")))?;
/// for path in list(&ws, "*.txt").await? {
///     println!("{}", path.display());
/// }
/// # Ok(())
/// # }
/// ```
#[tracing::instrument(level = "debug", skip(ws))]
pub async fn list(ws: &Workspace, pattern: &str) -> Result<Vec<PathBuf>, ResolveError> {
    let (root, components) = split_path(pattern);

    let (dir, glob) = if root.is_none() && components.len() == 1 {
        (".".to_string(), components[0].clone())
    } else {
        match components.split_last() {
            Some((glob, dir_parts)) => (join_path(root, dir_parts), glob.clone()),
            // Bare root marker: list it with an empty glob.
            None => (join_path(root, &[]), String::new()),
        }
    };

    let dir = ws.resolve(&dir);
    tracing::debug!(dir = %dir.display(), glob = %glob, "expanding pattern");
    list_in(ws, &dir, &glob).await
}

/// Expand a bare glob against the direct children of a directory.
///
/// `dir` must already be resolved; `glob` is a single path component. The
/// matcher runs on each child's base name and matching entries come back
/// joined onto `dir`.
pub async fn list_in(ws: &Workspace, dir: &Path, glob: &str) -> Result<Vec<PathBuf>, ResolveError> {
    let matcher = Glob::compile(glob);

    let info = match ws.fs().stat(dir).await {
        Ok(info) => info,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ResolveError::DirectoryNotFound(dir.to_path_buf()));
        }
        Err(e) => return Err(ResolveError::Io(e)),
    };
    if !info.is_dir {
        return Err(ResolveError::NotADirectory(dir.to_path_buf()));
    }

    let entries = ws.fs().list(dir).await?;
    Ok(entries
        .into_iter()
        .filter(|entry| matcher.matches(&entry.name))
        .map(|entry| dir.join(&entry.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::MemoryFs;
    use std::sync::Arc;

    fn make_ws() -> Workspace {
        let mem = MemoryFs::new();
        mem.add_file("readme.txt", b"hi").unwrap();
        mem.add_file("notes.md", b"md").unwrap();
        mem.add_file(".hidden", b"shh").unwrap();
        mem.add_dir("docs").unwrap();
        mem.add_file("docs/guide.txt", b"g").unwrap();
        mem.add_file("docs/draft.md", b"d").unwrap();
        Workspace::new(Arc::new(mem), "/")
    }

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[tokio::test]
    async fn test_bare_glob_lists_cwd() {
        let ws = make_ws();
        let matches = list(&ws, "*.txt").await.unwrap();
        assert_eq!(names(&matches), vec!["readme.txt"]);
        assert_eq!(matches[0], PathBuf::from("/readme.txt"));
    }

    #[tokio::test]
    async fn test_star_skips_dotfiles() {
        let ws = make_ws();
        let matches = list(&ws, "*").await.unwrap();
        assert_eq!(names(&matches), vec!["docs", "notes.md", "readme.txt"]);
    }

    #[tokio::test]
    async fn test_dot_star_lists_hidden() {
        let ws = make_ws();
        let matches = list(&ws, ".*").await.unwrap();
        assert!(names(&matches).contains(&".hidden".to_string()));
    }

    #[tokio::test]
    async fn test_directory_part_is_resolved() {
        let ws = make_ws();
        let matches = list(&ws, "docs/*.txt").await.unwrap();
        assert_eq!(matches, vec![PathBuf::from("/docs/guide.txt")]);

        let matches = list(&ws, "/docs/*.md").await.unwrap();
        assert_eq!(matches, vec![PathBuf::from("/docs/draft.md")]);
    }

    #[tokio::test]
    async fn test_cwd_affects_bare_globs() {
        let ws = make_ws().with_cwd("/docs");
        let matches = list(&ws, "*").await.unwrap();
        assert_eq!(names(&matches), vec!["draft.md", "guide.txt"]);
        assert_eq!(matches[0], PathBuf::from("/docs/draft.md"));
    }

    #[tokio::test]
    async fn test_no_matches_is_empty_not_error() {
        let ws = make_ws();
        let matches = list(&ws, "*.zip").await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_missing_directory_is_error() {
        let ws = make_ws();
        let err = list(&ws, "/nonexistent-dir/*").await.unwrap_err();
        assert!(matches!(err, ResolveError::DirectoryNotFound(_)));
    }

    #[tokio::test]
    async fn test_file_as_directory_is_error() {
        let ws = make_ws();
        let err = list(&ws, "/readme.txt/*").await.unwrap_err();
        assert!(matches!(err, ResolveError::NotADirectory(_)));
    }

    #[tokio::test]
    async fn test_bare_root_pattern_is_empty() {
        // "/" splits to a root with no components; the empty glob matches
        // no real entry name.
        let ws = make_ws();
        let matches = list(&ws, "/").await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_brace_alternation_end_to_end() {
        let ws = make_ws();
        let matches = list(&ws, "*.{txt,md}").await.unwrap();
        assert_eq!(names(&matches), vec!["notes.md", "readme.txt"]);
    }

    #[tokio::test]
    async fn test_question_mark_end_to_end() {
        let ws = make_ws();
        let matches = list(&ws, "notes.m?").await.unwrap();
        assert_eq!(names(&matches), vec!["notes.md"]);
    }
}
