//! Interpreter line prepended to the archive

use std::fmt;

/// Interpreter line used when none is configured
pub const DEFAULT_SHEBANG: &str = "#!/usr/bin/env python3";

/// A `#!` line, stored without the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shebang(String);

impl Shebang {
    /// Accepts `/usr/bin/python3` or `#!/usr/bin/python3`.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("#!") {
            Shebang(trimmed.to_string())
        } else {
            Shebang(format!("#!{}", trimmed))
        }
    }

    pub fn python3() -> Self {
        Shebang(DEFAULT_SHEBANG.to_string())
    }

    /// The full line, including `#!`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The interpreter part, without `#!`
    pub fn interpreter(&self) -> &str {
        self.0.trim_start_matches("#!")
    }

    /// Bytes written ahead of the zip data
    pub fn to_prefix(&self) -> Vec<u8> {
        format!("{}\n", self.0).into_bytes()
    }
}

impl Default for Shebang {
    fn default() -> Self {
        Self::python3()
    }
}

impl fmt::Display for Shebang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
