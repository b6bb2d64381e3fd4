// src/render/terminal.rs
// =============================================================================
// Plain-text rendering for a terminal.
//
// Layout of a full page:
//
//   👤 The Octocat (@octocat)
//      <bio>
//      20 Followers · 9 Following · 8 Repos
//
//   Page 1/2 · 10 per page   [Prev]  [1]  2  [Next]
//
//   📦 hello-world  https://github.com/octocat/hello-world
//      [Ruby] [Shell]
//      Description: My first repository on GitHub!
//
// The writer is generic so tests can render into a Vec<u8>.
// =============================================================================

use std::io::{self, Write};

use super::Presenter;
use crate::aggregate::display_description;
use crate::github::{Profile, RepositoryDetail};
use crate::pagination::PaginationView;

pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn profile_loading(&mut self, username: &str) -> io::Result<()> {
        writeln!(self.out, "\n🔍 Loading profile for {username}...")
    }

    fn profile(&mut self, profile: &Profile) -> io::Result<()> {
        writeln!(self.out, "\n👤 {} (@{})", profile.display_name(), profile.login)?;
        if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
            writeln!(self.out, "   {}", bio.trim())?;
        }
        writeln!(
            self.out,
            "   {} Followers · {} Following · {} Repos",
            profile.followers, profile.following, profile.public_repos
        )?;
        writeln!(self.out, "   Avatar: {}", profile.avatar_url)?;
        if let Some(url) = &profile.html_url {
            writeln!(self.out, "   Profile: {url}")?;
        }
        Ok(())
    }

    fn error_card(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "\n❌ {message}")
    }

    fn repos_loading(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n⏳ Loading repositories...")
    }

    fn repositories(&mut self, repos: &[RepositoryDetail]) -> io::Result<()> {
        if repos.is_empty() {
            return writeln!(self.out, "\n   No public repositories");
        }

        for repo in repos {
            writeln!(self.out, "\n📦 {}  {}", repo.summary.name, repo.summary.html_url)?;
            if !repo.languages.is_empty() {
                let tags: Vec<String> = repo.languages.iter().map(|l| format!("[{l}]")).collect();
                writeln!(self.out, "   {}", tags.join(" "))?;
            }
            writeln!(
                self.out,
                "   Description: {}",
                display_description(repo.summary.description.as_deref())
            )?;
        }
        Ok(())
    }

    fn repo_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "\n⚠️  {message}")
    }

    fn pagination(&mut self, view: &PaginationView) -> io::Result<()> {
        writeln!(self.out, "\n{}", toolbar(view))
    }

    fn alert(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "⚠️  {message}")
    }
}

// One line: "Page 2/3 · 10 per page   [Prev]  1  [2]  3  [Next]"
// Brackets on Prev/Next mean enabled; brackets on a number mark the
// current page.
fn toolbar(view: &PaginationView) -> String {
    let mut parts = Vec::with_capacity(view.pages.len() + 2);
    parts.push(button("Prev", view.has_previous));
    for &page in &view.pages {
        parts.push(if page == view.current_page {
            format!("[{page}]")
        } else {
            page.to_string()
        });
    }
    parts.push(button("Next", view.has_next));

    format!(
        "Page {}/{} · {} per page   {}",
        view.current_page,
        view.total_pages,
        view.page_size,
        parts.join("  ")
    )
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{label}]")
    } else {
        format!(" {label} ")
    }
}
