use std::path::{Path, PathBuf};

use crate::{
    domain::{Logger, SourcemapIgnoreList},
    models::{DEFAULT_PORT, RawFsOptions, RawOptions, ResolvedFsOptions, ResolvedOptions},
    service::workspace::search_for_workspace_root,
    utils::path::{absolutize, is_parent_directory, normalize_path, resolve_against},
};

/// Name of the client asset directory installed next to the executable
pub const CLIENT_DIR_NAME: &str = "client";

/// Directory holding the dev server's own client assets
///
/// Located next to the running executable. When the executable path is
/// unknown, `client` under the current directory is used instead.
pub fn default_client_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => normalize_path(&dir.join(CLIENT_DIR_NAME)),
            None => absolutize(Path::new(CLIENT_DIR_NAME)),
        },
        Err(e) => {
            tracing::debug!("Executable path unavailable: {}", e);
            absolutize(Path::new(CLIENT_DIR_NAME))
        }
    }
}

/// Resolve raw server options into a fully populated record
///
/// Uses [`default_client_dir`] as the client directory. See
/// [`OptionsResolver::resolve`] for the rules applied.
pub fn resolve_server_options(
    root: &Path,
    raw: Option<RawOptions>,
    logger: &dyn Logger,
) -> ResolvedOptions {
    OptionsResolver::new().resolve(root, raw, logger)
}

/// Options resolver with a configurable client directory
#[derive(Debug, Clone)]
pub struct OptionsResolver {
    client_dir: PathBuf,
}

impl Default for OptionsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsResolver {
    pub fn new() -> Self {
        Self {
            client_dir: default_client_dir(),
        }
    }

    /// Use `client_dir` instead of the bundled client directory
    ///
    /// A relative directory is resolved against the project root.
    pub fn with_client_dir(mut self, client_dir: impl Into<PathBuf>) -> Self {
        self.client_dir = client_dir.into();
        self
    }

    /// Resolve `raw` against the project `root`
    ///
    /// - an unset allow-list becomes the workspace root containing `root`
    /// - an unset deny-list becomes [`crate::models::DEFAULT_DENY`]
    /// - allow entries are made absolute against `root` and normalized
    /// - the client directory is appended unless an entry already covers it
    /// - `sourcemapIgnoreList: false` disables the ignore list
    /// - a trailing `/` on `origin` is dropped with a warning
    ///
    /// Never fails.
    pub fn resolve(
        &self,
        root: &Path,
        raw: Option<RawOptions>,
        logger: &dyn Logger,
    ) -> ResolvedOptions {
        let root = absolutize(root);
        let raw = raw.unwrap_or_default();

        let fs = self.resolve_fs(&root, raw.fs.unwrap_or_default(), logger);
        let origin = raw.origin.map(|origin| trim_origin(origin, logger));

        let resolved = ResolvedOptions {
            host: raw.host,
            port: raw.port.unwrap_or(DEFAULT_PORT),
            strict_port: raw.strict_port.unwrap_or(false),
            headers: raw.headers.unwrap_or_default(),
            origin,
            middleware_mode: raw.middleware_mode.unwrap_or(false),
            pre_transform_requests: raw.pre_transform_requests.unwrap_or(true),
            sourcemap_ignore_list: raw.sourcemap_ignore_list.unwrap_or_default(),
            fs,
            root,
        };

        tracing::debug!(
            root = %resolved.root.display(),
            allow = resolved.fs.allow.len(),
            deny = resolved.fs.deny.len(),
            "Resolved server options"
        );
        resolved
    }

    fn resolve_fs(
        &self,
        root: &Path,
        raw: RawFsOptions,
        logger: &dyn Logger,
    ) -> ResolvedFsOptions {
        let allow = raw.allow.unwrap_or_else(|| {
            let workspace = search_for_workspace_root(root);
            logger.info(&format!(
                "server.fs.allow not set, allowing workspace root \"{}\"",
                workspace.display()
            ));
            vec![workspace]
        });
        let deny = raw.deny.unwrap_or_else(ResolvedFsOptions::default_deny);

        let mut allow: Vec<PathBuf> = allow
            .iter()
            .map(|dir| resolve_against(root, dir))
            .collect();

        let client_dir = resolve_against(root, &self.client_dir);
        if !allow.iter().any(|dir| is_parent_directory(dir, &client_dir)) {
            allow.push(client_dir);
        }

        ResolvedFsOptions {
            strict: raw.strict.unwrap_or(true),
            allow,
            deny,
            cached_checks: raw.cached_checks,
        }
    }
}

fn trim_origin(origin: String, logger: &dyn Logger) -> String {
    match origin.strip_suffix('/') {
        Some(trimmed) => {
            logger.warn(&format!(
                "(!) server.origin should not end with \"/\". Using \"{}\" instead.",
                trimmed
            ));
            trimmed.to_string()
        }
        None => origin,
    }
}
