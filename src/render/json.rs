// src/render/json.rs
// =============================================================================
// Machine-readable output for `show --json`.
//
// Nothing is written while the session runs. The presenter keeps the latest
// profile, toolbar and repository list, and finish() prints them as a single
// JSON document so scripts can pipe it into jq.
// =============================================================================

use std::io::{self, Write};

use serde::Serialize;

use super::Presenter;
use crate::aggregate::display_description;
use crate::github::{Profile, RepositoryDetail};
use crate::pagination::PaginationView;

#[derive(Debug, Default, Serialize)]
pub struct PageReport {
    pub profile: Option<Profile>,
    pub pagination: Option<PaginationView>,
    pub repositories: Vec<RepositoryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RepositoryEntry {
    #[serde(flatten)]
    pub detail: RepositoryDetail,
    /// The description as the terminal view would show it
    pub display_description: String,
}

pub struct JsonPresenter<W: Write> {
    out: W,
    report: PageReport,
}

impl JsonPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            report: PageReport::default(),
        }
    }

    /// Writes the collected report and hands back the writer.
    pub fn finish(mut self) -> anyhow::Result<W> {
        serde_json::to_writer_pretty(&mut self.out, &self.report)?;
        writeln!(self.out)?;
        Ok(self.out)
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn profile_loading(&mut self, _username: &str) -> io::Result<()> {
        self.report = PageReport::default();
        Ok(())
    }

    fn profile(&mut self, profile: &Profile) -> io::Result<()> {
        self.report.profile = Some(profile.clone());
        Ok(())
    }

    fn error_card(&mut self, message: &str) -> io::Result<()> {
        self.report.profile = None;
        self.report.error = Some(message.to_string());
        Ok(())
    }

    fn repos_loading(&mut self) -> io::Result<()> {
        self.report.repositories.clear();
        self.report.pagination = None;
        self.report.error = None;
        Ok(())
    }

    fn repositories(&mut self, repos: &[RepositoryDetail]) -> io::Result<()> {
        self.report.repositories = repos
            .iter()
            .map(|detail| RepositoryEntry {
                display_description: display_description(detail.summary.description.as_deref()),
                detail: detail.clone(),
            })
            .collect();
        Ok(())
    }

    fn repo_error(&mut self, message: &str) -> io::Result<()> {
        self.report.error = Some(message.to_string());
        Ok(())
    }

    fn pagination(&mut self, view: &PaginationView) -> io::Result<()> {
        self.report.pagination = Some(view.clone());
        Ok(())
    }

    fn alert(&mut self, message: &str) -> io::Result<()> {
        self.report.error = Some(message.to_string());
        Ok(())
    }
}
