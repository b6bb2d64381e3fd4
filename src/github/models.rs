// src/github/models.rs
// =============================================================================
// Shapes of the GitHub API responses we read.
//
// serde ignores every JSON field we don't name here, so these structs only
// list what the viewer actually shows.
// =============================================================================

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A user as returned by `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    pub followers: u32,
    pub following: u32,
    pub public_repos: u32,
}

impl Profile {
    /// The display name, or the login for users who never set one.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.login,
        }
    }
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub created_at: String,
}

/// A repository summary together with the languages it uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryDetail {
    #[serde(flatten)]
    pub summary: RepositorySummary,
    pub languages: BTreeSet<String>,
}
