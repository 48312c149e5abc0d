//! Build Use Case
//!
//! - `BuildRequest` - raw inputs (command line plus optional configuration)
//!   resolved into `BuildOptions`
//! - `EntryPlanner` - collects, expands includes, merges and adds generated
//!   members
//! - `BuildUseCase` - plans, checks staleness and writes the archive

mod options;
mod plan;
mod request;
mod use_case;


pub use options::BuildOptions;
pub use plan::{BuildPlan, EntryPlanner};
pub use request::{BuildRequest, ResolvedBuild};
pub use use_case::{dry_run_summary, BuildResult, BuildStatus, BuildUseCase};
