//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compression;
mod entry_point;
mod exclude_spec;
mod include_spec;
mod origin;
mod shebang;

pub use compression::{Compression, CompressionMethod, DEFAULT_COMPRESSION_LEVEL};
pub use entry_point::{wrap_main_guard, EntryPoint};
pub use exclude_spec::ExcludeSpec;
pub use include_spec::{parse_include_with_dest, IncludeKind, IncludeSpec};
pub use origin::Origin;
pub use shebang::{Shebang, DEFAULT_SHEBANG};
