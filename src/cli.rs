// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two ways to use the viewer:
//   gh-profile-viewer show octocat --page 2 --per-page 20
//   gh-profile-viewer browse
//
// The global flags (API URL, timeout, log level) are the whole of the
// viewer's configuration. There are no config files and no environment
// variables to read.
// =============================================================================

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::github::{GatewayConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::pagination::DEFAULT_PAGE_SIZE;

#[derive(Parser, Debug)]
#[command(
    name = "gh-profile-viewer",
    version,
    about = "View a GitHub profile and page through its repositories",
    long_about = "gh-profile-viewer fetches a public GitHub profile, lists its repositories \
                  newest first with the languages each one uses, and lets you page through them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the GitHub REST API
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds (0 waits forever)
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Logging level: trace, debug, info, warn, error
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of a user's profile and repositories, then exit
    ///
    /// Example: gh-profile-viewer show octocat --per-page 20
    Show {
        /// GitHub username
        username: String,

        /// Page of repositories to show (falls back to 1 if out of range)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Repositories per page, 10 to 100
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: u32,

        /// Output the page as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Look up users and page through repositories interactively
    Browse,
}

impl Cli {
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            api_url: self.api_url.clone(),
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            ..GatewayConfig::default()
        }
    }
}
