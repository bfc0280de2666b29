//! tfectl - main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use tfectl::{run_command, Cli, HostResolver, Result, TfeClient, TokenResolver};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting tfectl v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error ({}): {}", e.kind(), e);
            ExitCode::from(e.kind().exit_code() as u8)
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let host = HostResolver::resolve(cli.host.as_deref(), cli.batch)?;
    debug!(
        "CLI args: host={}, org={:?}, batch={}, strict_names={}",
        host, cli.org, cli.batch, cli.strict_names
    );

    let token = TokenResolver::new(&host).resolve(cli.token.as_deref())?;
    let client = TfeClient::new(token, host);

    run_command(&client, cli).await
}
