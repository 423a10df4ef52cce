//! # API Facade
//!
//! Thin facade over the command layer, and the single entry point for all
//! encyclo operations regardless of the client rendering them.
//!
//! The facade dispatches to `commands/*`, tracks the active
//! [`AccountSession`], and returns structured `Result<CmdResult>` values.
//! It holds no business logic, performs no I/O of its own beyond what the
//! storage backend does, and never touches stdout or stderr.

use crate::commands;
use crate::commands::{CmdMessage, CmdResult, ImageAction};
use crate::error::{EncycloError, Result};
use crate::session::AccountSession;
use crate::store::accounts::CredentialStore;
use crate::store::StorageBackend;

/// The main facade. Generic over the storage backend: `FileBackend` in
/// production, `MemBackend` in tests.
pub struct EncycloApi<B: StorageBackend> {
    store: CredentialStore<B>,
    session: Option<AccountSession>,
}

impl<B: StorageBackend> EncycloApi<B> {
    pub fn new(backend: B) -> Self {
        Self {
            store: CredentialStore::new(backend),
            session: None,
        }
    }

    pub fn register(&mut self, username: &str, password: &str) -> Result<CmdResult> {
        self.store.register(username, password)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Account created: {}",
            username.trim()
        )));
        Ok(result)
    }

    /// Authenticate and make the account the active session.
    pub fn login(&mut self, username: &str, password: &str) -> Result<CmdResult> {
        let session = self.store.authenticate(username, password)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!("Logged in as {}", session.username)));
        self.session = Some(session);
        Ok(result)
    }

    /// Discard in-memory edits and re-read the active account from storage.
    pub fn reload(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or_else(no_session)?;
        self.store.reload(session)
    }

    pub fn create_article(
        &mut self,
        title: &str,
        categories_raw: &str,
        content: &str,
        image: Option<Vec<u8>>,
    ) -> Result<CmdResult> {
        let session = self.session.as_mut().ok_or_else(no_session)?;
        commands::create::run(
            &mut self.store,
            session,
            title,
            categories_raw,
            content,
            image,
        )
    }

    pub fn update_article(
        &mut self,
        old_title: &str,
        new_title: &str,
        categories_raw: &str,
        content: &str,
        image_action: ImageAction,
    ) -> Result<CmdResult> {
        let session = self.session.as_mut().ok_or_else(no_session)?;
        commands::update::run(
            &mut self.store,
            session,
            old_title,
            new_title,
            categories_raw,
            content,
            image_action,
        )
    }

    pub fn delete_article(&mut self, title: &str) -> Result<CmdResult> {
        let session = self.session.as_mut().ok_or_else(no_session)?;
        commands::delete::run(&mut self.store, session, title)
    }

    pub fn list_articles(&self) -> Result<CmdResult> {
        commands::list::run(self.active_session()?)
    }

    pub fn view_articles<T: AsRef<str>>(&self, titles: &[T]) -> Result<CmdResult> {
        commands::view::run(self.active_session()?, titles)
    }

    pub fn search_articles(
        &self,
        query: Option<&str>,
        category: Option<&str>,
    ) -> Result<CmdResult> {
        commands::search::run(self.active_session()?, query, category)
    }

    pub fn categories(&self) -> Result<CmdResult> {
        let session = self.active_session()?;
        let universe = commands::search::category_universe(session.articles());
        Ok(CmdResult::default().with_categories(universe))
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(self.active_session()?)
    }

    pub fn active_session(&self) -> Result<&AccountSession> {
        self.session.as_ref().ok_or_else(no_session)
    }
}

fn no_session() -> EncycloError {
    EncycloError::Api("No active session; log in first".to_string())
}

pub use crate::commands::{ArticleView, MessageLevel};
pub use crate::commands::stats::ArticleStats;
