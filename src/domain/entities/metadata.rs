//! `PKG-INFO` metadata record

/// Archive name of the metadata member
pub const PKG_INFO: &str = "PKG-INFO";

/// Fixed `Metadata-Version` value
pub const METADATA_VERSION: &str = "2.1";

/// `Build-Timestamp` value used when timestamps are disabled
pub const BUILD_TIMESTAMP_PLACEHOLDER: &str = "<build-timestamp>";

/// strftime format of a real `Build-Timestamp` (UTC)
pub const BUILD_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// `License` value used when the metadata names none and no fallback is configured
pub const DEFAULT_LICENSE_FALLBACK: &str = "All rights reserved. See additional license files if distributed alongside this file for additional terms.";

/// Package metadata written into the archive as `PKG-INFO`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    pub name: Option<String>,
    pub version: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
}

impl PackageMetadata {
    /// Render the flat `Key: value` record.
    ///
    /// Missing fields are left out, except `Name` (falls back to `Unknown`)
    /// and `License` (falls back to `license_fallback` when given).
    pub fn render_pkg_info(&self, license_fallback: Option<&str>, build_timestamp: &str) -> String {
        let mut lines = Vec::new();
        lines.push(format!(
            "Name: {}",
            self.name.as_deref().unwrap_or("Unknown")
        ));
        if let Some(version) = &self.version {
            lines.push(format!("Version: {}", version));
        }
        if let Some(summary) = &self.summary {
            lines.push(format!("Summary: {}", summary.replace('\n', " ")));
        }
        if let Some(author) = &self.author {
            lines.push(format!("Author: {}", author));
        }
        if let Some(license) = self.license.as_deref().or(license_fallback) {
            lines.push(format!("License: {}", license));
        }
        lines.push(format!("Metadata-Version: {}", METADATA_VERSION));
        lines.push(format!("Build-Timestamp: {}", build_timestamp));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Parse `Key: value` lines back into ordered pairs.
///
/// Lines without a `:` are ignored.
pub fn parse_pkg_info(content: &str) -> Vec<(String, String)> {
    content
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> PackageMetadata {
        PackageMetadata {
            name: Some("My Tool".to_string()),
            version: Some("1.2.0".to_string()),
            summary: Some("Does things\nwell".to_string()),
            author: Some("Jane".to_string()),
            license: Some("MIT".to_string()),
        }
    }

    #[test]
    fn render_pkg_info_orders_fields() {
        let rendered = full().render_pkg_info(None, BUILD_TIMESTAMP_PLACEHOLDER);
        insta::assert_snapshot!(rendered, @r###"
        Name: My Tool
        Version: 1.2.0
        Summary: Does things well
        Author: Jane
        License: MIT
        Metadata-Version: 2.1
        Build-Timestamp: <build-timestamp>
        "###);
    }

    #[test]
    fn render_pkg_info_uses_fallbacks() {
        let meta = PackageMetadata::default();
        let rendered = meta.render_pkg_info(Some("Proprietary"), "2024-01-02T03:04:05Z");
        insta::assert_snapshot!(rendered, @r###"
        Name: Unknown
        License: Proprietary
        Metadata-Version: 2.1
        Build-Timestamp: 2024-01-02T03:04:05Z
        "###);
    }

    #[test]
    fn render_pkg_info_is_deterministic_with_placeholder() {
        let a = full().render_pkg_info(None, BUILD_TIMESTAMP_PLACEHOLDER);
        let b = full().render_pkg_info(None, BUILD_TIMESTAMP_PLACEHOLDER);
        assert_eq!(a, b);
    }

    #[test]
    fn parse_pkg_info_reads_rendered_record() {
        let rendered = full().render_pkg_info(None, BUILD_TIMESTAMP_PLACEHOLDER);
        let fields = parse_pkg_info(&rendered);
        assert_eq!(fields[0], ("Name".to_string(), "My Tool".to_string()));
        assert!(fields.contains(&("Metadata-Version".to_string(), "2.1".to_string())));
        assert_eq!(fields.len(), 7);
    }
}
