// src/github/fake.rs
// =============================================================================
// An in-memory Gateway for tests.
//
// It serves one user's profile and repositories from memory, can be told to
// fail specific calls or to answer some language lookups slowly, and records
// every call so tests can assert what was (and wasn't) fetched.
// =============================================================================

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{Gateway, Profile, RepositorySummary};
use crate::error::{Result, ViewerError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Profile(String),
    RepositoryPage { username: String, page: u32, page_size: u32 },
    Languages(String),
}

#[derive(Default)]
pub struct FakeGateway {
    profiles: HashMap<String, Profile>,
    repos: HashMap<String, Vec<RepositorySummary>>,
    languages: HashMap<String, BTreeSet<String>>,
    delays: HashMap<String, Duration>,
    failing_languages: HashSet<String>,
    failing_profiles: HashSet<String>,
    failing_pages: HashSet<u32>,
    calls: Mutex<Vec<Call>>,
}

pub fn profile(login: &str, public_repos: u32) -> Profile {
    Profile {
        login: login.to_string(),
        name: None,
        avatar_url: format!("https://avatars.example.com/{login}"),
        bio: None,
        html_url: Some(format!("https://github.com/{login}")),
        followers: 3,
        following: 1,
        public_repos,
    }
}

pub fn summary(name: &str) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        html_url: format!("https://github.com/octocat/{name}"),
        description: Some(format!("The {name} project")),
        created_at: "2020-01-01T00:00:00Z".to_string(),
    }
}

impl FakeGateway {
    /// A user owning `count` repositories named repo-1..repo-N, each
    /// written in Rust plus one language named after the repository.
    pub fn with_user(login: &str, count: u32) -> Self {
        let mut fake = Self::default();
        let summaries: Vec<_> = (1..=count).map(|i| summary(&format!("repo-{i}"))).collect();
        for s in &summaries {
            fake.languages.insert(
                s.name.clone(),
                ["Rust".to_string(), format!("Lang-{}", s.name)].into_iter().collect(),
            );
        }
        fake.profiles.insert(login.to_string(), profile(login, count));
        fake.repos.insert(login.to_string(), summaries);
        fake
    }

    pub fn delay_languages(mut self, repo: &str, delay: Duration) -> Self {
        self.delays.insert(repo.to_string(), delay);
        self
    }

    pub fn fail_languages(mut self, repo: &str) -> Self {
        self.failing_languages.insert(repo.to_string());
        self
    }

    pub fn fail_profile(mut self, login: &str) -> Self {
        self.failing_profiles.insert(login.to_string());
        self
    }

    pub fn fail_page(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn profile_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Profile(_)))
            .count()
    }

    pub fn page_calls(&self) -> Vec<(u32, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::RepositoryPage { page, page_size, .. } => Some((page, page_size)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn fetch_profile(&self, username: &str) -> Result<Profile> {
        self.record(Call::Profile(username.to_string()));
        if self.failing_profiles.contains(username) {
            return Err(ViewerError::RequestFailed("HTTP 500".to_string()));
        }
        self.profiles
            .get(username)
            .cloned()
            .ok_or_else(|| ViewerError::NotFound(username.to_string()))
    }

    async fn fetch_repository_page(
        &self,
        username: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<RepositorySummary>> {
        self.record(Call::RepositoryPage {
            username: username.to_string(),
            page,
            page_size,
        });
        if self.failing_pages.contains(&page) {
            return Err(ViewerError::RequestFailed("HTTP 502".to_string()));
        }

        let all = self
            .repos
            .get(username)
            .ok_or_else(|| ViewerError::RequestFailed("HTTP 404".to_string()))?;
        let start = ((page.saturating_sub(1)) * page_size) as usize;
        Ok(all.iter().skip(start).take(page_size as usize).cloned().collect())
    }

    async fn fetch_languages(&self, _username: &str, repo: &str) -> Result<BTreeSet<String>> {
        self.record(Call::Languages(repo.to_string()));
        if let Some(delay) = self.delays.get(repo) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_languages.contains(repo) {
            return Err(ViewerError::RequestFailed("HTTP 500".to_string()));
        }
        Ok(self.languages.get(repo).cloned().unwrap_or_default())
    }
}
