// src/session/mod.rs
// =============================================================================
// The part of the viewer that decides what happens next.
//
// Submodules:
// - intent: The user's requests and the prompt syntax for them
// - controller: The state machine that turns requests into fetches and output
// =============================================================================

mod controller;
mod intent;

pub use controller::{SessionController, SessionState};
pub use intent::{Command, Intent, HELP};
