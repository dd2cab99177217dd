use std::path::{Component, Path, PathBuf};

/// Normalize path by resolving components lexically
///
/// `.` components are dropped, `..` pops the previous component (never past the
/// root) and trailing separators disappear. Leading `..` of a relative path
/// are kept. The filesystem is not consulted.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.components()
        .fold(PathBuf::new(), |mut result, component| {
            match component {
                Component::ParentDir => match result.components().next_back() {
                    Some(Component::Normal(_)) => {
                        result.pop();
                    }
                    Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                    _ => result.push(Component::ParentDir),
                },
                Component::CurDir => {}
                _ => {
                    result.push(component);
                }
            }
            result
        })
}

/// Resolve `path` against `root` and normalize the result
///
/// Absolute paths are kept as they are, relative ones are joined onto `root`.
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&root.join(path))
    }
}

/// Make `path` absolute using the current directory and normalize it
///
/// If the current directory cannot be determined the path is only normalized.
pub fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return normalize_path(path);
    }

    match std::env::current_dir() {
        Ok(cwd) => normalize_path(&cwd.join(path)),
        Err(e) => {
            tracing::debug!("Current directory unavailable, keeping {}: {}", path.display(), e);
            normalize_path(path)
        }
    }
}

/// Check whether `dir` is `path` itself or one of its ancestors
///
/// Comparison is component-wise, so `/app` does not contain `/application`.
/// Both arguments are expected to be normalized.
pub fn is_parent_directory(dir: &Path, path: &Path) -> bool {
    if cfg!(any(windows, target_os = "macos")) {
        // Default filesystems there are case-insensitive
        let dir = to_slash_string(dir).to_lowercase();
        let path = to_slash_string(path).to_lowercase();
        let dir = dir.trim_end_matches('/');
        path == dir || path.starts_with(&format!("{}/", dir))
    } else {
        path.starts_with(dir)
    }
}

/// Render a path with forward slashes, the form glob patterns are matched against
pub fn to_slash_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
