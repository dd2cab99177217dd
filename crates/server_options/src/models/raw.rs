use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::SourcemapIgnoreList;

/// Server options as supplied by the user; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawOptions {
    /// Host name or address to listen on
    pub host: Option<String>,
    /// Port to listen on
    pub port: Option<u16>,
    /// Fail instead of trying the next free port
    pub strict_port: Option<bool>,
    /// Extra response headers
    pub headers: Option<BTreeMap<String, String>>,
    /// Public origin of generated asset URLs
    pub origin: Option<String>,
    /// Run as middleware inside another server
    pub middleware_mode: Option<bool>,
    /// Transform known imports ahead of the request
    pub pre_transform_requests: Option<bool>,
    /// `false` disables the sourcemap ignore list
    pub sourcemap_ignore_list: Option<SourcemapIgnoreList>,
    /// File-system access settings
    pub fs: Option<RawFsOptions>,
}

/// File-system access settings as supplied by the user
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawFsOptions {
    /// Restrict serving to the allow-list
    pub strict: Option<bool>,
    /// Directories files may be served from, relative to the project root
    pub allow: Option<Vec<PathBuf>>,
    /// Glob patterns that are never served
    pub deny: Option<Vec<String>>,
    /// Cache file-system lookups
    pub cached_checks: Option<bool>,
}

impl RawOptions {
    /// Overlay the fields set in `other` on top of `self`
    ///
    /// The `fs` section is merged field by field.
    pub fn merge(self, other: RawOptions) -> RawOptions {
        let fs = match (self.fs, other.fs) {
            (Some(base), Some(over)) => Some(base.merge(over)),
            (base, over) => over.or(base),
        };

        RawOptions {
            host: other.host.or(self.host),
            port: other.port.or(self.port),
            strict_port: other.strict_port.or(self.strict_port),
            headers: other.headers.or(self.headers),
            origin: other.origin.or(self.origin),
            middleware_mode: other.middleware_mode.or(self.middleware_mode),
            pre_transform_requests: other.pre_transform_requests.or(self.pre_transform_requests),
            sourcemap_ignore_list: other.sourcemap_ignore_list.or(self.sourcemap_ignore_list),
            fs,
        }
    }
}

impl RawFsOptions {
    /// Overlay the fields set in `other` on top of `self`
    pub fn merge(self, other: RawFsOptions) -> RawFsOptions {
        RawFsOptions {
            strict: other.strict.or(self.strict),
            allow: other.allow.or(self.allow),
            deny: other.deny.or(self.deny),
            cached_checks: other.cached_checks.or(self.cached_checks),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let raw: RawOptions = serde_json::from_str(
            r#"{
                "port": 3000,
                "strictPort": true,
                "origin": "http://localhost:3000/",
                "preTransformRequests": false,
                "sourcemapIgnoreList": false,
                "fs": { "allow": ["..", "/opt/shared"], "deny": ["*.key"] }
            }"#,
        )
        .unwrap();

        assert_eq!(raw.port, Some(3000));
        assert_eq!(raw.strict_port, Some(true));
        assert_eq!(raw.pre_transform_requests, Some(false));
        assert!(matches!(
            raw.sourcemap_ignore_list,
            Some(SourcemapIgnoreList::Disabled)
        ));

        let fs = raw.fs.unwrap();
        assert_eq!(
            fs.allow,
            Some(vec![PathBuf::from(".."), PathBuf::from("/opt/shared")])
        );
        assert_eq!(fs.deny, Some(vec!["*.key".to_string()]));
        assert_eq!(fs.strict, None);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result = serde_json::from_str::<RawOptions>(r#"{ "prot": 3000 }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base = RawOptions {
            port: Some(3000),
            origin: Some("http://a".to_string()),
            fs: Some(RawFsOptions {
                strict: Some(false),
                deny: Some(vec![".env".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let overlay = RawOptions {
            origin: Some("http://b".to_string()),
            fs: Some(RawFsOptions {
                allow: Some(vec![PathBuf::from("shared")]),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = base.merge(overlay);
        assert_eq!(merged.port, Some(3000));
        assert_eq!(merged.origin.as_deref(), Some("http://b"));

        let fs = merged.fs.unwrap();
        assert_eq!(fs.strict, Some(false));
        assert_eq!(fs.deny, Some(vec![".env".to_string()]));
        assert_eq!(fs.allow, Some(vec![PathBuf::from("shared")]));
    }

    #[test]
    fn test_merge_keeps_base_fs_without_overlay() {
        let base = RawOptions {
            fs: Some(RawFsOptions {
                cached_checks: Some(true),
                ..Default::default()
            }),
            ..Default::default()
        };

        let merged = base.merge(RawOptions::default());
        assert_eq!(merged.fs.unwrap().cached_checks, Some(true));
    }
}
