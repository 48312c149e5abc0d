//! Domain Layer
//!
//! The archive-assembly core: what goes into a bundle, under which names,
//! and whether a rebuild is needed at all.
//!
//! ## Structure
//!
//! - `entities/` - Archive entries, the build output, package metadata
//! - `value_objects/` - Compression, include/exclude specs, shebang, entry point
//! - `services/` - File collection, include/exclude resolution, staleness
//! - `ports/` - Interface definitions for infrastructure
//!
//! All I/O goes through the traits in `ports/`.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
