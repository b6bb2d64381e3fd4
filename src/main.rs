// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Start logging and build the GitHub gateway
// 3. Run either a one-shot `show` or the interactive `browse` prompt
// 4. Exit with proper code (0 = page shown, 1 = lookup failed, 2 = error)
//
// The runtime is single-threaded on purpose: the only concurrency the viewer
// needs is the language lookups of one page, and those interleave at their
// network calls on this one thread.
// =============================================================================

mod aggregate;
mod browse;
mod cli;
mod error;
mod github;
mod logging;
mod pagination;
mod render;
mod session;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Commands};
use github::HttpGateway;
use render::{JsonPresenter, TerminalPresenter};
use session::SessionController;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = the requested page was shown (or the prompt was closed)
//   Ok(1) = the profile or repository lookup failed
//   Err   = bad arguments or output failure (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(&cli.log_level)?;

    let config = cli.gateway_config();
    debug!(?config, "gateway config");
    let gateway = HttpGateway::new(config)?;

    match cli.command {
        Commands::Show { username, page, per_page, json } => {
            handle_show(gateway, &username, page, per_page, json).await
        }
        Commands::Browse => {
            let mut session = SessionController::new(gateway, TerminalPresenter::stdout());
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            browse::run(&mut session, stdin).await?;
            Ok(0)
        }
    }
}

async fn handle_show(
    gateway: HttpGateway,
    username: &str,
    page: u32,
    per_page: u32,
    json: bool,
) -> Result<i32> {
    if json {
        let mut session = SessionController::with_page_size(gateway, JsonPresenter::stdout(), per_page)?;
        let ready = session.open(username, page).await?.is_ready();
        session.into_presenter().finish()?;
        Ok(exit_code(ready))
    } else {
        let mut session =
            SessionController::with_page_size(gateway, TerminalPresenter::stdout(), per_page)?;
        let ready = session.open(username, page).await?.is_ready();
        Ok(exit_code(ready))
    }
}

fn exit_code(ready: bool) -> i32 {
    if ready {
        0
    } else {
        1
    }
}
