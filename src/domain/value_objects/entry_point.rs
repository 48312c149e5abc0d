//! Entry point declarations (`module.path[:function]`) and the startup code
//! generated from them

use std::fmt;
use std::str::FromStr;

use crate::error::BundlerError;

/// A validated `module.path` or `module.path:function` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub module: String,
    pub function: Option<String>,
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl EntryPoint {
    /// Check the `module.path[:function]` shape without building a value.
    pub fn is_valid(raw: &str) -> bool {
        raw.parse::<EntryPoint>().is_ok()
    }

    /// Startup code that imports and calls the entry point.
    pub fn to_code(&self) -> String {
        match &self.function {
            Some(function) => format!("from {} import {}\n{}()", self.module, function, function),
            None => {
                let m = &self.module;
                [
                    format!("import {}", m),
                    format!("if hasattr({}, '__main__'):", m),
                    format!("    {}.__main__()", m),
                    format!("elif hasattr({}, 'main'):", m),
                    format!("    {}.main()", m),
                ]
                .join("\n")
            }
        }
    }
}

impl FromStr for EntryPoint {
    type Err = BundlerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            BundlerError::invalid(format!(
                "invalid entry point '{}' (expected 'module.path' or 'module.path:function')",
                raw
            ))
        };

        let (module, function) = match raw.split_once(':') {
            Some((module, function)) => (module, Some(function)),
            None => (raw, None),
        };

        if module.is_empty() || !module.split('.').all(is_identifier) {
            return Err(invalid());
        }
        if let Some(function) = function {
            if !is_identifier(function) {
                return Err(invalid());
            }
        }

        Ok(EntryPoint {
            module: module.to_string(),
            function: function.map(str::to_string),
        })
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.function {
            Some(function) => write!(f, "{}:{}", self.module, function),
            None => f.write_str(&self.module),
        }
    }
}

/// Wrap startup code in `if __name__ == '__main__':`.
///
/// Non-blank lines are indented by four spaces; one trailing newline is
/// dropped.
pub fn wrap_main_guard(code: &str) -> String {
    let mut indented = String::with_capacity(code.len() + 32);
    for line in code.split_inclusive('\n') {
        if !line.trim().is_empty() {
            indented.push_str("    ");
        }
        indented.push_str(line);
    }
    if indented.ends_with('\n') {
        indented.pop();
    }
    format!("if __name__ == '__main__':\n{}", indented)
}
