//! Listing of the files a build would bundle

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::entities::SourceEntry;
use crate::domain::ports::{BuildLogger, FileSystem, PatternMatcher};
use crate::domain::services::FileCollector;
use crate::domain::value_objects::ExcludeSpec;
use crate::error::BundlerResult;

/// Collected sources in archive order. Missing sources are skipped with a
/// warning, as in a build.
pub fn list_sources(
    packages: &[PathBuf],
    excludes: &[ExcludeSpec],
    fs: &dyn FileSystem,
    matcher: &dyn PatternMatcher,
    logger: &dyn BuildLogger,
) -> BundlerResult<Vec<SourceEntry>> {
    let outcome = FileCollector::new(fs, matcher, logger).collect(packages, excludes)?;
    Ok(outcome.entries)
}

#[derive(Debug, Default)]
struct TreeNode {
    children: BTreeMap<String, TreeNode>,
}

/// Render archive names as a sorted box-drawing tree, one line per node.
pub fn render_tree<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut root = TreeNode::default();
    for name in names {
        let mut node = &mut root;
        for part in name.split('/').filter(|p| !p.is_empty()) {
            node = node.children.entry(part.to_string()).or_default();
        }
    }

    let mut out = String::new();
    render_children(&root, "", &mut out);
    out
}

fn render_children(node: &TreeNode, prefix: &str, out: &mut String) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let last = i + 1 == count;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(name);
        out.push('\n');
        if !child.children.is_empty() {
            let extension = if last { "    " } else { "│   " };
            render_children(child, &format!("{}{}", prefix, extension), out);
        }
    }
}
