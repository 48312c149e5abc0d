//! Where an include or exclude declaration came from

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Configuration file
    Config,
    /// `--include` / `--exclude`: replaces the configured list
    CliOverride,
    /// `--add-include` / `--add-exclude` / `--add-zip`: extends it
    CliAdditive,
    /// `.gitignore` next to the configuration
    Gitignore,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Config => "config",
            Origin::CliOverride => "cli-override",
            Origin::CliAdditive => "cli-additive",
            Origin::Gitignore => "gitignore",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
