//! Gitignore-style pattern matching
//!
//! Uses the `ignore` crate so exclude patterns behave exactly like lines of
//! a `.gitignore` placed at the pattern root.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::domain::ports::PatternMatcher;

type CacheKey = (PathBuf, Vec<String>);

/// Compiled matchers are kept per root and pattern list, so a collection
/// pass builds each one once instead of once per file.
#[derive(Debug, Default)]
pub struct GitignoreMatcher {
    cache: Mutex<HashMap<CacheKey, Option<Arc<Gitignore>>>>,
}

impl GitignoreMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    fn build(patterns: &[String], root: &Path) -> Option<Gitignore> {
        let mut builder = GitignoreBuilder::new(root);
        for pattern in patterns {
            // An unparsable line matches nothing, as in git.
            let _ = builder.add_line(None, pattern);
        }
        builder.build().ok()
    }

    fn compiled(&self, patterns: &[String], root: &Path) -> Option<Arc<Gitignore>> {
        let Ok(mut cache) = self.cache.lock() else {
            return Self::build(patterns, root).map(Arc::new);
        };
        cache
            .entry((root.to_path_buf(), patterns.to_vec()))
            .or_insert_with(|| Self::build(patterns, root).map(Arc::new))
            .clone()
    }

    #[cfg(test)]
    fn compiled_count(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl PatternMatcher for GitignoreMatcher {
    fn matches(&self, path: &Path, is_dir: bool, patterns: &[String], root: &Path) -> bool {
        if patterns.is_empty() {
            return false;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            return false;
        };
        if relative.as_os_str().is_empty() {
            return false;
        }
        let Some(matcher) = self.compiled(patterns, root) else {
            return false;
        };
        matcher
            .matched_path_or_any_parents(relative, is_dir)
            .is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(|p| p.to_string()).collect()
    }

    fn matches(path: &str, patterns: &[&str]) -> bool {
        let root = Path::new("/proj");
        GitignoreMatcher::new().matches(Path::new(path), false, &strings(patterns), root)
    }

    #[test]
    fn double_star_matches_at_any_depth() {
        assert!(matches("/proj/pkg/test_a.py", &["**/test_*.py"]));
        assert!(matches("/proj/pkg/deep/test_b.py", &["**/test_*.py"]));
        assert!(!matches("/proj/pkg/a.py", &["**/test_*.py"]));
    }

    #[test]
    fn unanchored_pattern_matches_basename() {
        assert!(matches("/proj/pkg/sub/cache.py", &["cache.py"]));
    }

    #[test]
    fn trailing_slash_excludes_directory_contents() {
        assert!(matches("/proj/pkg/tests/helper.py", &["tests/"]));
        assert!(!matches("/proj/pkg/tests.py", &["tests/"]));
    }

    #[test]
    fn negation_reincludes() {
        assert!(!matches("/proj/pkg/keep.py", &["*.py", "!keep.py"]));
        assert!(matches("/proj/pkg/drop.py", &["*.py", "!keep.py"]));
    }

    #[test]
    fn anchored_pattern_is_relative_to_root() {
        assert!(matches("/proj/pkg/gen.py", &["/pkg/gen.py"]));
        assert!(!matches("/proj/other/pkg/gen.py", &["/pkg/gen.py"]));
    }

    #[test]
    fn paths_outside_root_never_match() {
        assert!(!matches("/elsewhere/a.py", &["*.py"]));
    }

    #[test]
    fn directory_flag_comes_from_caller() {
        let matcher = GitignoreMatcher::new();
        let patterns = strings(&["build/"]);
        // Nothing exists on disk at these paths.
        let (path, root) = (Path::new("/proj/pkg/build"), Path::new("/proj"));
        assert!(matcher.matches(path, true, &patterns, root));
        assert!(!matcher.matches(path, false, &patterns, root));
    }

    #[test]
    fn pattern_sets_compile_once_per_root() {
        let matcher = GitignoreMatcher::new();
        let patterns = strings(&["*.tmp"]);
        for name in ["a.tmp", "b.py", "c/d.tmp"] {
            let path = Path::new("/proj").join(name);
            matcher.matches(&path, false, &patterns, Path::new("/proj"));
        }
        assert_eq!(matcher.compiled_count(), 1);

        matcher.matches(Path::new("/other/a.tmp"), false, &patterns, Path::new("/other"));
        assert_eq!(matcher.compiled_count(), 2);
    }
}
