//! PatternMatcher port - glob matching with gitignore semantics

use std::path::Path;

/// Decides whether a path matches any of a set of glob patterns.
///
/// Patterns are interpreted relative to `root`: `**` crosses directories,
/// a trailing `/` restricts a pattern to directories (and so to everything
/// beneath them), a leading `!` re-includes, and a pattern without a slash
/// matches a basename at any depth. A `path` outside `root` never matches.
///
/// `is_dir` comes from the caller, which already knows what it walked;
/// implementations must not stat the path themselves.
pub trait PatternMatcher {
    fn matches(&self, path: &Path, is_dir: bool, patterns: &[String], root: &Path) -> bool;
}
