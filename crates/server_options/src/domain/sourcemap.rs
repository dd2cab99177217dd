use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marker identifying third-party dependency sources
pub const DEPENDENCY_DIR_MARKER: &str = "node_modules";

/// Predicate receiving `(source_path, sourcemap_path)`
pub type IgnorePredicate = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Decides which sources are added to a sourcemap's ignore list
///
/// In raw JSON options this is a boolean: `false` disables the ignore list,
/// `true` keeps the default. Custom predicates can only be set from code.
#[derive(Clone, Default)]
pub enum SourcemapIgnoreList {
    /// Nothing is ignored
    Disabled,
    /// Sources whose path contains [`DEPENDENCY_DIR_MARKER`] are ignored
    #[default]
    DependencySources,
    /// Caller supplied predicate
    Custom(IgnorePredicate),
}

impl SourcemapIgnoreList {
    /// Wrap a closure as a custom predicate
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&str, &str) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    /// Whether `source_path`, referenced from `sourcemap_path`, should be ignored
    pub fn is_ignored(&self, source_path: &str, sourcemap_path: &str) -> bool {
        match self {
            Self::Disabled => false,
            Self::DependencySources => source_path.contains(DEPENDENCY_DIR_MARKER),
            Self::Custom(predicate) => predicate(source_path, sourcemap_path),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::DependencySources => "dependency-sources",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for SourcemapIgnoreList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for SourcemapIgnoreList {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::DependencySources
        } else {
            Self::Disabled
        }
    }
}

impl<'de> Deserialize<'de> for SourcemapIgnoreList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        bool::deserialize(deserializer).map(Self::from)
    }
}

impl Serialize for SourcemapIgnoreList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
