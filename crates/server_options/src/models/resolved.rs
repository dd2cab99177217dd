use std::collections::BTreeMap;
use std::path::PathBuf;

use derive_getters::Getters;
use serde::Serialize;

use crate::domain::SourcemapIgnoreList;

/// Port used when none is configured
pub const DEFAULT_PORT: u16 = 5173;

/// Deny patterns applied when the user sets none
pub const DEFAULT_DENY: [&str; 3] = [".env", ".env.*", "*.{crt,pem}"];

/// Fully populated server options
///
/// Only produced by the options resolver; read through the generated getters.
#[derive(Debug, Clone, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOptions {
    /// Project root every relative path was resolved against
    pub(crate) root: PathBuf,
    /// `None` means localhost
    pub(crate) host: Option<String>,
    pub(crate) port: u16,
    pub(crate) strict_port: bool,
    pub(crate) headers: BTreeMap<String, String>,
    /// Never ends with `/`
    pub(crate) origin: Option<String>,
    pub(crate) middleware_mode: bool,
    pub(crate) pre_transform_requests: bool,
    pub(crate) sourcemap_ignore_list: SourcemapIgnoreList,
    pub(crate) fs: ResolvedFsOptions,
}

/// File-system access settings with every default applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedFsOptions {
    pub(crate) strict: bool,
    /// Absolute, normalized directories
    pub(crate) allow: Vec<PathBuf>,
    /// Glob patterns, taking precedence over `allow`
    pub(crate) deny: Vec<String>,
    pub(crate) cached_checks: Option<bool>,
}

impl ResolvedFsOptions {
    pub(crate) fn default_deny() -> Vec<String> {
        DEFAULT_DENY.iter().map(|p| p.to_string()).collect()
    }
}
