use std::io::Write;

use crate::cli::{Cli, Command, OptionArgs};
use crate::domain::TracingLogger;
use crate::errors::ServerOptionsResult;
use crate::models::ResolvedOptions;
use crate::service::{FsAccess, resolve_server_options};

/// Run a parsed command, writing its report to `out`
///
/// Returns `false` when a `check` found a path that may not be served.
pub async fn run(cli: Cli, out: &mut dyn Write) -> ServerOptionsResult<bool> {
    match cli.command {
        Command::Resolve { options } => {
            let resolved = resolve(&options).await?;
            serde_json::to_writer_pretty(&mut *out, &resolved)?;
            writeln!(out)?;
            Ok(true)
        }
        Command::Check { options, paths } => {
            let resolved = resolve(&options).await?;
            let access = FsAccess::from_resolved(&resolved)?;

            let mut all_allowed = true;
            for path in &paths {
                let decision = access.check(path);
                all_allowed &= decision.is_allowed();
                writeln!(out, "{}: {}", path.display(), decision)?;
            }
            Ok(all_allowed)
        }
    }
}

async fn resolve(options: &OptionArgs) -> ServerOptionsResult<ResolvedOptions> {
    let raw = options.raw_options().await?;
    Ok(resolve_server_options(&options.root, Some(raw), &TracingLogger))
}
