use crate::model::Article;
use std::collections::BTreeMap;

/// An authenticated account: the username plus an in-memory copy of its
/// article map.
///
/// A session is obtained from [`CredentialStore::authenticate`] and passed
/// explicitly to every article operation. Mutations edit the in-memory map
/// and are persisted through [`CredentialStore::commit`]; nothing is held
/// in ambient state.
///
/// [`CredentialStore::authenticate`]: crate::store::accounts::CredentialStore::authenticate
/// [`CredentialStore::commit`]: crate::store::accounts::CredentialStore::commit
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSession {
    pub username: String,
    pub articles: BTreeMap<String, Article>,
}

impl AccountSession {
    pub fn new(username: String, articles: BTreeMap<String, Article>) -> Self {
        Self { username, articles }
    }

    /// Read-only snapshot of the article map.
    pub fn articles(&self) -> &BTreeMap<String, Article> {
        &self.articles
    }
}
