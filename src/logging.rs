// src/logging.rs
// =============================================================================
// Sets up tracing output.
//
// Logs go to stderr so stdout only carries the rendered profile (and stays
// valid JSON with --json). The level comes from --log-level: a level name
// like "debug", or EnvFilter directives like "gh_profile_viewer=trace".
// Anything else is an error rather than a silent fallback.
// =============================================================================

use anyhow::{bail, Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init(level: &str) -> Result<()> {
    let filter = build_filter(level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .ok(); // Already initialized (e.g. in tests) is fine

    Ok(())
}

// EnvFilter reads a bare word as a target name, so a typo like "verbose"
// would quietly turn logging off. Bare directives must be level names;
// target-scoped ones use "target=level".
fn build_filter(level: &str) -> Result<EnvFilter> {
    for directive in level.split(',').map(str::trim) {
        if !directive.contains('=') && directive.parse::<LevelFilter>().is_err() {
            bail!(
                "Invalid log level '{directive}' (expected off, error, warn, info, debug, trace or target=level)"
            );
        }
    }

    EnvFilter::try_new(level).with_context(|| format!("Failed to parse log level '{level}'"))
}
