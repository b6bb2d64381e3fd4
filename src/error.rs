// src/error.rs
// =============================================================================
// The failure cases the viewer knows about.
//
// Every one of these is expected during normal use (typos in usernames,
// flaky networks, bad input at the prompt). The session controller catches
// them and turns them into messages on screen; none of them end the program.
//
// Rust concepts:
// - thiserror: Derives Display and std::error::Error from attributes
// - Enums with data: Each variant carries what the message needs
// =============================================================================

use thiserror::Error;

use crate::pagination::{MAX_PAGE_SIZE, MIN_PAGE_SIZE};

/// Errors produced by the gateway, the aggregator and the pagination rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewerError {
    /// The profile endpoint answered 404 for this username
    #[error("no profile with username '{0}'")]
    NotFound(String),

    /// Any other transport or HTTP failure on a profile or page fetch
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// A language lookup failed while enriching a page of repositories
    #[error("failed to load languages for '{repo}': {reason}")]
    EnrichmentFailed { repo: String, reason: String },

    /// Page size outside MIN_PAGE_SIZE..=MAX_PAGE_SIZE
    #[error(
        "page size must be between {min} and {max}, got {0}",
        min = MIN_PAGE_SIZE,
        max = MAX_PAGE_SIZE
    )]
    InvalidPageSize(u32),
}

// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ViewerError>;
