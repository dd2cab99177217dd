use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::load_raw_options;
use crate::domain::SourcemapIgnoreList;
use crate::errors::ServerOptionsResult;
use crate::models::{RawFsOptions, RawOptions};

/// Dev Server Options
///
/// Resolves dev server options the way the server itself would, and checks
/// which files the resolved file-system policy lets it serve.
///
/// ## Configuration
/// Raw options are read from a JSON file with camelCase keys:
/// ```json
/// {
///   "origin": "http://localhost:5173",
///   "fs": { "allow": ["../shared"], "deny": [".env", "*.pem"] }
/// }
/// ```
/// Command line flags override values from the file.
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "dev-server-options")]
#[command(about = "Resolve dev server options and file-system access policy")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the fully resolved options as JSON
    Resolve {
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Report whether each path may be served
    Check {
        #[command(flatten)]
        options: OptionArgs,

        /// Paths to check, relative to the project root
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
    },
}

/// Flags shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Project root; defaults to the current directory
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// JSON file with raw server options
    #[arg(long, short, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory files may be served from (repeatable)
    #[arg(long = "allow", value_name = "DIR")]
    pub allow: Vec<PathBuf>,

    /// Glob pattern that is never served (repeatable)
    #[arg(long = "deny", value_name = "GLOB")]
    pub deny: Vec<String>,

    /// Public origin of generated asset URLs
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,

    /// Serve files outside the allow-list
    #[arg(long)]
    pub no_strict: bool,

    /// Disable the sourcemap ignore list
    #[arg(long)]
    pub no_sourcemap_ignore: bool,
}

impl OptionArgs {
    /// Raw options from the config file, overridden by the flags that were given
    pub async fn raw_options(&self) -> ServerOptionsResult<RawOptions> {
        let from_file = match &self.config {
            Some(path) => load_raw_options(path).await?,
            None => RawOptions::default(),
        };

        Ok(from_file.merge(self.flag_overrides()))
    }

    fn flag_overrides(&self) -> RawOptions {
        let fs = RawFsOptions {
            strict: self.no_strict.then_some(false),
            allow: (!self.allow.is_empty()).then(|| self.allow.clone()),
            deny: (!self.deny.is_empty()).then(|| self.deny.clone()),
            cached_checks: None,
        };

        RawOptions {
            origin: self.origin.clone(),
            sourcemap_ignore_list: self
                .no_sourcemap_ignore
                .then_some(SourcemapIgnoreList::Disabled),
            fs: Some(fs),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_command() {
        let cli = Cli::try_parse_from([
            "dev-server-options",
            "check",
            "--root",
            "/srv/site",
            "--allow",
            "src",
            "--allow",
            "../shared",
            "--deny",
            "*.key",
            "src/main.ts",
            ".env",
        ])
        .unwrap();

        match cli.command {
            Command::Check { options, paths } => {
                assert_eq!(options.root, PathBuf::from("/srv/site"));
                assert_eq!(
                    options.allow,
                    vec![PathBuf::from("src"), PathBuf::from("../shared")]
                );
                assert_eq!(options.deny, vec!["*.key".to_string()]);
                assert_eq!(paths.len(), 2);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_check_requires_paths() {
        assert!(Cli::try_parse_from(["dev-server-options", "check"]).is_err());
    }

    #[tokio::test]
    async fn test_flags_without_values_leave_options_unset() {
        let args = OptionArgs::default();
        let raw = args.raw_options().await.unwrap();

        assert!(raw.origin.is_none());
        assert!(raw.sourcemap_ignore_list.is_none());
        let fs = raw.fs.unwrap();
        assert!(fs.allow.is_none());
        assert!(fs.deny.is_none());
        assert!(fs.strict.is_none());
    }

    #[tokio::test]
    async fn test_flags_override_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("server.json");
        tokio::fs::write(
            &config,
            r#"{ "origin": "http://file/", "port": 4000, "fs": { "deny": ["*.key"], "allow": ["lib"] } }"#,
        )
        .await
        .unwrap();

        let args = OptionArgs {
            config: Some(config),
            origin: Some("http://flag".to_string()),
            allow: vec![PathBuf::from("src")],
            no_strict: true,
            no_sourcemap_ignore: true,
            ..Default::default()
        };
        let raw = args.raw_options().await.unwrap();

        assert_eq!(raw.origin.as_deref(), Some("http://flag"));
        assert_eq!(raw.port, Some(4000));
        assert!(matches!(
            raw.sourcemap_ignore_list,
            Some(SourcemapIgnoreList::Disabled)
        ));
        let fs = raw.fs.unwrap();
        assert_eq!(fs.allow, Some(vec![PathBuf::from("src")]));
        assert_eq!(fs.deny, Some(vec!["*.key".to_string()]));
        assert_eq!(fs.strict, Some(false));
    }
}
