// src/session/controller.rs
// =============================================================================
// The session state machine.
//
//   Idle ──submit──> ProfileLoading ──fail──> ProfileError
//                          │
//                          └──ok──> RepoLoading ──fail──> RepoError
//                                       │    ^
//                                       ok   │ page / size change
//                                       v    │
//                                       Ready
//
// A new submission can start from any state. Page and page-size changes only
// fetch from Ready; the profile is never fetched again for them.
//
// The controller owns everything that used to be loose global state (the
// current username, the pagination numbers, the page on screen) in one
// SessionContext. It reaches the network only through the Gateway trait and
// the screen only through the Presenter trait, so tests can drive it with
// fakes for both.
// =============================================================================

use std::io;

use tracing::{debug, info, warn};

use super::intent::Intent;
use crate::aggregate::enrich;
use crate::error::{Result, ViewerError};
use crate::github::{Gateway, Profile, RepositoryDetail};
use crate::pagination::{PaginationState, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
use crate::render::Presenter;

pub const PROFILE_NOT_FOUND: &str = "No profile with this username";
pub const PROFILE_FAILED: &str = "Problem fetching profile";
pub const REPOS_FAILED: &str = "Problem fetching repos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    ProfileLoading,
    ProfileError(ViewerError),
    RepoLoading,
    RepoError(ViewerError),
    Ready,
}

impl SessionState {
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionState::Ready)
    }
}

/// What the session currently knows.
#[derive(Debug, Default)]
pub struct SessionContext {
    /// Set once a profile has been fetched for it
    pub username: Option<String>,
    pub profile: Option<Profile>,
    pub pagination: PaginationState,
    /// The page on screen; replaced on every fetch, never cached
    pub repositories: Vec<RepositoryDetail>,
}

pub struct SessionController<G, P> {
    gateway: G,
    presenter: P,
    state: SessionState,
    context: SessionContext,
}

impl<G: Gateway, P: Presenter> SessionController<G, P> {
    pub fn new(gateway: G, presenter: P) -> Self {
        Self {
            gateway,
            presenter,
            state: SessionState::Idle,
            context: SessionContext::default(),
        }
    }

    /// Starts with a non-default page size. Fails with `InvalidPageSize`
    /// outside the allowed range.
    pub fn with_page_size(gateway: G, presenter: P, page_size: u32) -> Result<Self> {
        let mut session = Self::new(gateway, presenter);
        session.context.pagination = PaginationState::with_page_size(page_size)?;
        Ok(session)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    #[cfg(test)]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    #[cfg(test)]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Applies one intent and runs until the session settles.
    ///
    /// Viewer failures end up in the returned state and on the presenter;
    /// only presenter I/O errors come back as `Err`.
    pub async fn dispatch(&mut self, intent: Intent) -> io::Result<&SessionState> {
        debug!(?intent, state = ?self.state, "dispatch");

        match intent {
            Intent::Submit(username) => return self.open(&username, 1).await,
            Intent::GoToPage(page) => self.change_page(page).await?,
            Intent::NextPage => {
                let pagination = self.context.pagination;
                if pagination.has_next() {
                    self.change_page(pagination.next_page().current_page()).await?
                }
            }
            Intent::PreviousPage => {
                let pagination = self.context.pagination;
                if pagination.has_previous() {
                    self.change_page(pagination.previous_page().current_page()).await?
                }
            }
            Intent::SetPageSize(size) => self.change_page_size(size).await?,
        }

        Ok(&self.state)
    }

    /// Submits `username` and lands on `start_page` when that page exists,
    /// page 1 otherwise. Blank usernames are ignored.
    pub async fn open(&mut self, username: &str, start_page: u32) -> io::Result<&SessionState> {
        let username = username.trim();
        if username.is_empty() {
            debug!("ignoring blank username");
            return Ok(&self.state);
        }

        info!(username, "loading profile");
        self.context.username = None;
        self.context.profile = None;
        self.context.repositories.clear();
        self.state = SessionState::ProfileLoading;
        self.presenter.profile_loading(username)?;

        let profile = match self.gateway.fetch_profile(username).await {
            Ok(profile) => profile,
            Err(error) => {
                warn!(username, %error, "profile fetch failed");
                let message = match error {
                    ViewerError::NotFound(_) => PROFILE_NOT_FOUND,
                    _ => PROFILE_FAILED,
                };
                self.presenter.error_card(message)?;
                self.state = SessionState::ProfileError(error);
                return Ok(&self.state);
            }
        };

        self.context.pagination = self
            .context
            .pagination
            .reset(profile.public_repos)
            .go_to_page(start_page);
        self.context.username = Some(username.to_string());
        self.state = SessionState::RepoLoading;
        let profile = self.context.profile.insert(profile);
        self.presenter.profile(profile)?;

        self.load_repositories().await?;
        Ok(&self.state)
    }

    async fn change_page(&mut self, page: u32) -> io::Result<()> {
        if !self.state.is_ready() {
            debug!(page, state = ?self.state, "ignoring page change");
            return Ok(());
        }

        let pagination = self.context.pagination;
        if !(1..=pagination.total_pages()).contains(&page) {
            debug!(page, total_pages = pagination.total_pages(), "page out of range");
            return Ok(());
        }

        self.context.pagination = pagination.go_to_page(page);
        self.load_repositories().await
    }

    async fn change_page_size(&mut self, size: u32) -> io::Result<()> {
        let resized = match self.context.pagination.set_page_size(size) {
            Ok(resized) => resized,
            Err(error) => {
                debug!(%error, "rejected page size");
                return self.presenter.alert(&format!(
                    "Please enter a valid value between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE} for items per page."
                ));
            }
        };

        self.context.pagination = resized;
        if self.state.is_ready() {
            self.load_repositories().await
        } else {
            // Kept for the next submission; nothing on screen to refresh
            debug!(size, state = ?self.state, "page size stored");
            Ok(())
        }
    }

    // RepoLoading: fetch the current page, enrich it, settle in Ready or
    // RepoError. The profile card is left alone either way.
    async fn load_repositories(&mut self) -> io::Result<()> {
        self.state = SessionState::RepoLoading;
        self.context.repositories.clear();
        self.presenter.repos_loading()?;

        match self.fetch_current_page().await {
            Ok(details) => {
                debug!(count = details.len(), page = self.context.pagination.current_page(), "page ready");
                self.presenter.pagination(&self.context.pagination.view())?;
                self.presenter.repositories(&details)?;
                self.context.repositories = details;
                self.state = SessionState::Ready;
            }
            Err(error) => {
                warn!(%error, "repository fetch failed");
                self.presenter.repo_error(REPOS_FAILED)?;
                self.state = SessionState::RepoError(error);
            }
        }
        Ok(())
    }

    async fn fetch_current_page(&self) -> Result<Vec<RepositoryDetail>> {
        let username = self
            .context
            .username
            .as_deref()
            .ok_or_else(|| ViewerError::RequestFailed("no username submitted".to_string()))?;
        let pagination = &self.context.pagination;

        let summaries = self
            .gateway
            .fetch_repository_page(username, pagination.current_page(), pagination.page_size())
            .await?;

        enrich(&self.gateway, username, summaries).await
    }
}
