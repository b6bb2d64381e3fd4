// src/render/mod.rs
// =============================================================================
// Where the session's output goes.
//
// The session controller never prints anything itself. It calls a Presenter
// at each step (loading, profile card, error card, list, toolbar) and the
// presenter decides what that looks like.
//
// Implementations:
// - terminal: Human-readable text, the default
// - json: Collects the final page and prints it as one JSON document
// =============================================================================

mod json;
mod terminal;

use std::io;

use crate::github::{Profile, RepositoryDetail};
use crate::pagination::PaginationView;

pub use json::JsonPresenter;
pub use terminal::TerminalPresenter;

/// Receives everything the session produces, in the order it happens.
///
/// Only I/O failures are errors here; viewer failures arrive as
/// `error_card` / `repo_error` calls.
pub trait Presenter {
    /// A new username was submitted; any previous output is stale.
    fn profile_loading(&mut self, username: &str) -> io::Result<()>;

    fn profile(&mut self, profile: &Profile) -> io::Result<()>;

    /// Shown in place of the profile card.
    fn error_card(&mut self, message: &str) -> io::Result<()>;

    fn repos_loading(&mut self) -> io::Result<()>;

    fn repositories(&mut self, repos: &[RepositoryDetail]) -> io::Result<()>;

    /// Shown in place of the repository list; the profile card stays.
    fn repo_error(&mut self, message: &str) -> io::Result<()>;

    fn pagination(&mut self, view: &PaginationView) -> io::Result<()>;

    /// A one-off message about rejected input.
    fn alert(&mut self, message: &str) -> io::Result<()>;
}
