//! File access policy built from resolved `fs` options
//!
//! Answers whether a file may be served. Deny patterns are checked first and
//! win over everything else; in strict mode the file must then live inside one
//! of the allowed directories.

use std::fmt;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::{
    errors::{ServerOptionsError, ServerOptionsResult},
    models::{ResolvedFsOptions, ResolvedOptions},
    utils::path::{is_parent_directory, resolve_against, to_slash_string},
};

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    /// First deny pattern that matched
    Denied { pattern: String },
    OutsideAllowList,
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allowed)
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessDecision::Allowed => f.write_str("allowed"),
            AccessDecision::Denied { pattern } => write!(f, "denied by {:?}", pattern),
            AccessDecision::OutsideAllowList => f.write_str("outside allow list"),
        }
    }
}

/// Compiled allow/deny policy
#[derive(Debug, Clone)]
pub struct FsAccess {
    root: PathBuf,
    strict: bool,
    allow: Vec<PathBuf>,
    deny_patterns: Vec<String>,
    deny: GlobSet,
}

impl FsAccess {
    /// Build the policy of fully resolved options
    pub fn from_resolved(options: &ResolvedOptions) -> ServerOptionsResult<Self> {
        Self::new(options.root(), options.fs())
    }

    /// Build a policy; relative paths checked later resolve against `root`
    ///
    /// Patterns without a `/` match at any depth. Matching ignores case and
    /// includes dot files.
    pub fn new(root: &Path, fs: &ResolvedFsOptions) -> ServerOptionsResult<Self> {
        let mut builder = GlobSetBuilder::new();

        for pattern in fs.deny() {
            let anchored = if pattern.contains('/') {
                pattern.clone()
            } else {
                format!("**/{}", pattern)
            };

            let glob = GlobBuilder::new(&anchored)
                .case_insensitive(true)
                .literal_separator(true)
                .build()
                .map_err(|source| ServerOptionsError::InvalidDenyPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
            builder.add(glob);
        }

        let deny = builder
            .build()
            .map_err(|source| ServerOptionsError::InvalidDenyPattern {
                pattern: fs.deny().join(", "),
                source,
            })?;

        Ok(Self {
            root: root.to_path_buf(),
            strict: *fs.strict(),
            allow: fs.allow().clone(),
            deny_patterns: fs.deny().clone(),
            deny,
        })
    }

    /// Decide whether `path` may be served
    pub fn check(&self, path: &Path) -> AccessDecision {
        let path = resolve_against(&self.root, path);
        let candidate = to_slash_string(&path);

        if let Some(index) = self.deny.matches(&candidate).into_iter().min() {
            let pattern = self.deny_patterns[index].clone();
            tracing::debug!("Denied {} by pattern {:?}", candidate, pattern);
            return AccessDecision::Denied { pattern };
        }

        if !self.strict {
            return AccessDecision::Allowed;
        }

        if self.allow.iter().any(|dir| is_parent_directory(dir, &path)) {
            AccessDecision::Allowed
        } else {
            tracing::debug!("{} is outside the allow list", candidate);
            AccessDecision::OutsideAllowList
        }
    }

    /// Shorthand for `check(path).is_allowed()`
    pub fn is_allowed(&self, path: &Path) -> bool {
        self.check(path).is_allowed()
    }
}
