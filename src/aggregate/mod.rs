// src/aggregate/mod.rs
// =============================================================================
// Turns a page of repository summaries into what the screen shows.
//
// Submodules:
// - enrich: Looks up every repository's languages at once and merges them in
// - describe: Shortens descriptions for display
// =============================================================================

mod describe;
mod enrich;

pub use describe::display_description;
pub use enrich::enrich;
