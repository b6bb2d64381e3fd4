// src/github/mod.rs
// =============================================================================
// This module handles everything that comes from the GitHub REST API.
//
// Submodules:
// - models: The profile and repository types decoded from JSON
// - gateway: The Gateway trait and its reqwest-backed implementation
// - fake: An in-memory Gateway for tests (only compiled for `cargo test`)
// =============================================================================

mod gateway;
mod models;

#[cfg(test)]
pub mod fake;

pub use gateway::{Gateway, GatewayConfig, HttpGateway, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
pub use models::{Profile, RepositoryDetail, RepositorySummary};
