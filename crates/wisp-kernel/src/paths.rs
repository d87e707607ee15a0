//! Path decomposition: root marker plus separator-split components.
//!
//! Splitting here is purely lexical. Empty components produced by doubled
//! or trailing separators are kept as-is, and `.`/`..` segments are not
//! folded; resolution against a working directory belongs to
//! [`Workspace`](crate::workspace::Workspace).

use std::path::MAIN_SEPARATOR;

/// The absolute-root marker for this platform.
///
/// Derived once from the OS path separator: `/` where the separator is `/`,
/// absent on platforms without a single-character root.
pub fn root_marker() -> Option<&'static str> {
    if MAIN_SEPARATOR == '/' {
        Some("/")
    } else {
        None
    }
}

/// Split a path string into its root marker and ordered components.
///
/// # Examples
/// ```
/// use wisp_kernel::paths::split_path;
///
/// assert_eq!(split_path("/a/b/c"), (Some("/"), vec!["a".into(), "b".into(), "c".into()]));
/// assert_eq!(split_path("a/b"), (None, vec!["a".into(), "b".into()]));
/// assert_eq!(split_path("/"), (Some("/"), vec![]));
/// ```
pub fn split_path(path: &str) -> (Option<&'static str>, Vec<String>) {
    if let Some(root) = root_marker() {
        if path == root {
            return (Some(root), Vec::new());
        }
        if let Some(rest) = path.strip_prefix(root) {
            return (Some(root), split_components(rest));
        }
    }
    (None, split_components(path))
}

/// Join a root marker and components back into a path string.
///
/// Inverse of [`split_path`]: the result is equivalent to the original
/// input, modulo nothing (empty components are preserved by both sides).
pub fn join_path(root: Option<&str>, components: &[String]) -> String {
    let sep = MAIN_SEPARATOR.to_string();
    format!("{}{}", root.unwrap_or(""), components.join(&sep))
}

fn split_components(s: &str) -> Vec<String> {
    s.split(MAIN_SEPARATOR).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_yields_root_and_components() {
        let (root, components) = split_path("/a/b/c");
        assert_eq!(root, Some("/"));
        assert_eq!(components, vec!["a", "b", "c"]);
    }

    #[test]
    fn relative_path_has_no_root() {
        let (root, components) = split_path("a/b");
        assert_eq!(root, None);
        assert_eq!(components, vec!["a", "b"]);
    }

    #[test]
    fn bare_root_has_no_components() {
        let (root, components) = split_path("/");
        assert_eq!(root, Some("/"));
        assert!(components.is_empty());
    }

    #[test]
    fn single_component() {
        let (root, components) = split_path("readme.txt");
        assert_eq!(root, None);
        assert_eq!(components, vec!["readme.txt"]);
    }

    #[test]
    fn empty_components_are_preserved() {
        let (root, components) = split_path("a//b");
        assert_eq!(root, None);
        assert_eq!(components, vec!["a", "", "b"]);

        let (root, components) = split_path("/a/");
        assert_eq!(root, Some("/"));
        assert_eq!(components, vec!["a", ""]);
    }

    #[test]
    fn dot_segments_are_not_folded() {
        let (root, components) = split_path("./a/../b");
        assert_eq!(root, None);
        assert_eq!(components, vec![".", "a", "..", "b"]);
    }

    #[test]
    fn join_reconstructs_split() {
        for path in ["/a/b/c", "a/b", "/", "readme.txt", "a//b", "/a/"] {
            let (root, components) = split_path(path);
            assert_eq!(join_path(root, &components), *path);
        }
    }

    #[test]
    fn root_marker_is_slash_here() {
        // These tests only run on separator-`/` platforms.
        assert_eq!(root_marker(), Some("/"));
    }
}
