//! Resolved standalone inclusion requests

use std::path::PathBuf;

use super::Origin;

/// How the included path is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IncludeKind {
    /// Directory, plain file or archive, decided by inspecting the path
    #[default]
    Auto,
    /// Always read as a zip archive
    Archive,
}

/// A standalone file, directory or archive to put into the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeSpec {
    /// Absolute source path
    pub path: PathBuf,
    /// Directory the declaration was resolved against
    pub root: PathBuf,
    pub origin: Origin,
    /// Archive-relative name or prefix; defaults to the basename of `path`
    pub destination: Option<String>,
    pub kind: IncludeKind,
    /// The declaration as written
    pub pattern: String,
}

/// Split a textual include into `(path, destination)`.
///
/// The split happens on the last `:`. A part before it that looks like a
/// drive letter (`C`, `C\`) is not a separator. An empty destination after
/// the colon yields `None`.
pub fn parse_include_with_dest(raw: &str) -> (String, Option<String>) {
    let Some((path_part, dest_part)) = raw.rsplit_once(':') else {
        return (raw.to_string(), None);
    };

    let len = path_part.chars().count();
    let is_drive_letter = len <= 2 && (len == 1 || path_part.ends_with('\\'));
    if is_drive_letter {
        return (raw.to_string(), None);
    }

    let dest = if dest_part.is_empty() {
        None
    } else {
        Some(dest_part.to_string())
    };
    (path_part.to_string(), dest)
}
