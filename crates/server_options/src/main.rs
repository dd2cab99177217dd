use std::process::ExitCode;

use clap::Parser;
use dev_server_options::{cli::Cli, handlers::run, utils::logging};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on environment
    if let Err(e) = logging::init_logging() {
        eprintln!("{}", e);
        return ExitCode::from(2);
    }

    let mut stdout = std::io::stdout().lock();
    match run(cli, &mut stdout).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("Failed to resolve server options: {}", e);
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}
