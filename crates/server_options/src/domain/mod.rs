pub mod logger;
pub mod sourcemap;

pub use logger::{Logger, TracingLogger};
pub use sourcemap::{IgnorePredicate, SourcemapIgnoreList};
