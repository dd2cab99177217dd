pub mod raw;
pub mod resolved;

pub use raw::{RawFsOptions, RawOptions};
pub use resolved::{DEFAULT_DENY, DEFAULT_PORT, ResolvedFsOptions, ResolvedOptions};
