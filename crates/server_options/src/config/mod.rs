use std::path::Path;

use tokio::fs;

use crate::errors::{ServerOptionsError, ServerOptionsResult};
use crate::models::RawOptions;

/// Load raw server options from a JSON file
///
/// Keys use camelCase, e.g. `{"origin": "http://localhost:5173", "fs": {"allow": [".."]}}`.
pub async fn load_raw_options(path: &Path) -> ServerOptionsResult<RawOptions> {
    let content = fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ServerOptionsError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ServerOptionsError::ConfigRead {
                path: path.display().to_string(),
                source,
            }
        }
    })?;

    let raw = serde_json::from_str(&content).map_err(|source| ServerOptionsError::ConfigParse {
        path: path.display().to_string(),
        source,
    })?;

    tracing::debug!("Loaded raw options from {}", path.display());
    Ok(raw)
}
