//! Resolution of dev server options.
//!
//! Turns partially populated user options into a [`ResolvedOptions`] record:
//! file-system allow entries become absolute normalized directories, the
//! deny-list gets its defaults and the server's client directory is always
//! servable. [`FsAccess`] then answers whether a given file may be served.
//!
//! ```no_run
//! use std::path::Path;
//! use dev_server_options::{FsAccess, TracingLogger, resolve_server_options};
//!
//! let resolved = resolve_server_options(Path::new("."), None, &TracingLogger);
//! let access = FsAccess::from_resolved(&resolved)?;
//! assert!(!access.is_allowed(Path::new(".env")));
//! # Ok::<(), dev_server_options::ServerOptionsError>(())
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod service;
pub mod utils;

pub use domain::{Logger, SourcemapIgnoreList, TracingLogger};
pub use errors::{ServerOptionsError, ServerOptionsResult};
pub use models::{RawFsOptions, RawOptions, ResolvedFsOptions, ResolvedOptions};
pub use service::{
    AccessDecision, FsAccess, OptionsResolver, resolve_server_options, search_for_package_root,
    search_for_workspace_root,
};
