//! Workspace root detection
//!
//! The default allow-list is the workspace containing the project, so that
//! sibling packages of a monorepo stay servable. A directory is a workspace
//! root when it holds one of [`WORKSPACE_MARKER_FILES`] or a `package.json`
//! declaring `workspaces`. Without any marker the nearest package root wins.

use std::fs;
use std::path::{Path, PathBuf};

/// Files whose presence marks a workspace root
pub const WORKSPACE_MARKER_FILES: [&str; 2] = ["pnpm-workspace.yaml", "lerna.json"];

const PACKAGE_MANIFEST: &str = "package.json";

/// Find the nearest directory, starting at `current`, that holds a `package.json`
///
/// Falls back to `current` when no ancestor has one.
pub fn search_for_package_root(current: &Path) -> PathBuf {
    current
        .ancestors()
        .find(|dir| dir.join(PACKAGE_MANIFEST).is_file())
        .unwrap_or(current)
        .to_path_buf()
}

/// Find the workspace root containing `current`
///
/// Falls back to [`search_for_package_root`] when no ancestor looks like a
/// workspace root.
pub fn search_for_workspace_root(current: &Path) -> PathBuf {
    match current.ancestors().find(|dir| is_workspace_root(dir)) {
        Some(dir) => {
            tracing::debug!("Workspace root found at {}", dir.display());
            dir.to_path_buf()
        }
        None => {
            let root = search_for_package_root(current);
            tracing::debug!(
                "No workspace marker above {}, using package root {}",
                current.display(),
                root.display()
            );
            root
        }
    }
}

fn is_workspace_root(dir: &Path) -> bool {
    WORKSPACE_MARKER_FILES
        .iter()
        .any(|marker| dir.join(marker).is_file())
        || has_workspace_manifest(dir)
}

/// Whether `dir/package.json` declares a truthy `workspaces` field
///
/// Unreadable or malformed manifests count as plain packages.
fn has_workspace_manifest(dir: &Path) -> bool {
    let manifest = dir.join(PACKAGE_MANIFEST);
    let content = match fs::read_to_string(&manifest) {
        Ok(content) => content,
        Err(_) => return false,
    };

    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(value) => value.get("workspaces").is_some_and(is_truthy),
        Err(e) => {
            tracing::debug!("Ignoring malformed {}: {}", manifest.display(), e);
            false
        }
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;

    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
