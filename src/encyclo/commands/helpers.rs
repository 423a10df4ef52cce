use crate::error::{EncycloError, Result};
use crate::model::Article;
use crate::session::AccountSession;
use crate::store::accounts::CredentialStore;
use crate::store::StorageBackend;
use std::collections::BTreeMap;

/// Persist a candidate article map, then swap it into the session.
///
/// Mutating commands build the post-state as a separate map and hand it
/// here. If the commit fails the session keeps its previous map, so the
/// caller never observes a partial mutation.
pub fn commit_articles<B: StorageBackend>(
    store: &mut CredentialStore<B>,
    session: &mut AccountSession,
    next: BTreeMap<String, Article>,
) -> Result<()> {
    let candidate = AccountSession::new(session.username.clone(), next);
    store.commit(&candidate)?;
    session.articles = candidate.articles;
    Ok(())
}

pub fn require_non_empty_title(title: &str) -> Result<&str> {
    let title = title.trim();
    if title.is_empty() {
        return Err(EncycloError::InvalidInput(
            "Title cannot be empty".to_string(),
        ));
    }
    Ok(title)
}

pub fn require_non_empty_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(EncycloError::InvalidInput(
            "Content cannot be empty".to_string(),
        ));
    }
    Ok(())
}
