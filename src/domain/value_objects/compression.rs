//! Compression method and level

use std::fmt;
use std::str::FromStr;

use crate::error::BundlerError;

/// Level used for deflate when none is given
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;

/// Supported member compression methods
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompressionMethod {
    #[default]
    Stored,
    Deflate,
    Bzip2,
    Zstd,
}

impl CompressionMethod {
    pub const ALL: [CompressionMethod; 4] = [
        CompressionMethod::Stored,
        CompressionMethod::Deflate,
        CompressionMethod::Bzip2,
        CompressionMethod::Zstd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompressionMethod::Stored => "stored",
            CompressionMethod::Deflate => "deflate",
            CompressionMethod::Bzip2 => "bzip2",
            CompressionMethod::Zstd => "zstd",
        }
    }

    /// Only deflate honors an explicit level.
    pub fn supports_level(&self) -> bool {
        matches!(self, CompressionMethod::Deflate)
    }

    /// Comma separated list for error messages
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompressionMethod {
    type Err = BundlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stored" | "store" | "none" => Ok(CompressionMethod::Stored),
            "deflate" | "deflated" => Ok(CompressionMethod::Deflate),
            "bzip2" => Ok(CompressionMethod::Bzip2),
            "zstd" => Ok(CompressionMethod::Zstd),
            other => Err(BundlerError::invalid(format!(
                "unknown compression method '{}' (valid: {})",
                other,
                Self::valid_names()
            ))),
        }
    }
}

/// Method plus optional level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Compression {
    pub method: CompressionMethod,
    /// 0-9; ignored unless the method is deflate
    pub level: Option<u8>,
}

impl Compression {
    pub fn new(method: CompressionMethod, level: Option<u8>) -> Result<Self, BundlerError> {
        if let Some(level) = level {
            if level > 9 {
                return Err(BundlerError::invalid(format!(
                    "compression level must be between 0 and 9, got {}",
                    level
                )));
            }
        }
        Ok(Self { method, level })
    }

    pub fn stored() -> Self {
        Self::default()
    }

    pub fn deflate(level: Option<u8>) -> Result<Self, BundlerError> {
        Self::new(CompressionMethod::Deflate, level)
    }

    /// Level actually passed to the encoder.
    pub fn effective_level(&self) -> Option<u8> {
        if self.method.supports_level() {
            Some(self.level.unwrap_or(DEFAULT_COMPRESSION_LEVEL))
        } else {
            None
        }
    }

    /// Human readable form, e.g. `deflate (level 6)`.
    pub fn describe(&self) -> String {
        match self.effective_level() {
            Some(level) => format!("{} (level {})", self.method, level),
            None => self.method.to_string(),
        }
    }
}
