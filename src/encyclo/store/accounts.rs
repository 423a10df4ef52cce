use super::StorageBackend;
use crate::auth::{digest_password, verify_password, MIN_PASSWORD_LEN};
use crate::error::{EncycloError, Result};
use crate::model::Account;
use crate::session::AccountSession;

/// Account registry over a storage backend.
///
/// Registration persists immediately; authentication is read-only and
/// hands back an [`AccountSession`] holding a copy of the account's
/// article map. Article mutations go through [`commit`], which writes the
/// session's map back under its username.
///
/// [`commit`]: CredentialStore::commit
pub struct CredentialStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> CredentialStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Create an account. Fails on an empty username, an empty or
    /// too-short password, or a taken username.
    pub fn register(&mut self, username: &str, password: &str) -> Result<()> {
        let username = username.trim();
        if username.is_empty() {
            return Err(EncycloError::InvalidInput(
                "Username cannot be empty".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(EncycloError::InvalidInput(
                "Password cannot be empty".to_string(),
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(EncycloError::InvalidInput(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let mut db = self.backend.load()?;
        if db.contains_key(username) {
            return Err(EncycloError::DuplicateUsername(username.to_string()));
        }
        db.insert(username.to_string(), Account::new(digest_password(password)));
        self.backend.save(&db)
    }

    /// Check credentials and open a session on the account's articles.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<AccountSession> {
        let username = username.trim();
        let db = self.backend.load()?;
        let account = db
            .get(username)
            .ok_or_else(|| EncycloError::UnknownUser(username.to_string()))?;
        if !verify_password(password, &account.password_hash) {
            return Err(EncycloError::WrongPassword);
        }
        Ok(AccountSession::new(
            username.to_string(),
            account.articles.clone(),
        ))
    }

    /// Persist the session's article map under its username. The rest of
    /// the account record (digest, signup time) is left untouched.
    pub fn commit(&mut self, session: &AccountSession) -> Result<()> {
        let mut db = self.backend.load()?;
        let account = db
            .get_mut(&session.username)
            .ok_or_else(|| EncycloError::UnknownUser(session.username.clone()))?;
        account.articles = session.articles.clone();
        self.backend.save(&db)
    }

    /// Replace the session's article map with the persisted state.
    pub fn reload(&self, session: &mut AccountSession) -> Result<()> {
        let db = self.backend.load()?;
        let account = db
            .get(&session.username)
            .ok_or_else(|| EncycloError::UnknownUser(session.username.clone()))?;
        session.articles = account.articles.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Article;
    use crate::store::memory::MemBackend;

    fn store() -> CredentialStore<MemBackend> {
        CredentialStore::new(MemBackend::new())
    }

    #[test]
    fn register_then_authenticate_opens_an_empty_session() {
        let mut store = store();
        store.register("alice", "hunter2").unwrap();

        let session = store.authenticate("alice", "hunter2").unwrap();
        assert_eq!(session.username, "alice");
        assert!(session.articles().is_empty());
    }

    #[test]
    fn register_rejects_duplicate_username() {
        let mut store = store();
        store.register("alice", "hunter2").unwrap();
        match store.register("alice", "other-pass") {
            Err(EncycloError::DuplicateUsername(name)) => assert_eq!(name, "alice"),
            other => panic!("Expected DuplicateUsername, got {:?}", other.err()),
        }
    }

    #[test]
    fn register_rejects_empty_and_short_inputs() {
        let mut store = store();
        assert!(matches!(
            store.register("", "hunter2"),
            Err(EncycloError::InvalidInput(_))
        ));
        assert!(matches!(
            store.register("alice", ""),
            Err(EncycloError::InvalidInput(_))
        ));
        assert!(matches!(
            store.register("alice", "abc"),
            Err(EncycloError::InvalidInput(_))
        ));
        // exactly 4 code points passes
        store.register("alice", "abcd").unwrap();
    }

    #[test]
    fn stored_digest_is_not_the_plaintext() {
        let mut store = store();
        store.register("alice", "hunter2").unwrap();
        let db = store.backend.load().unwrap();
        assert_ne!(db["alice"].password_hash, "hunter2");
        assert_eq!(db["alice"].password_hash.len(), 64);
    }

    #[test]
    fn authenticate_distinguishes_unknown_user_from_wrong_password() {
        let mut store = store();
        store.register("alice", "hunter2").unwrap();

        assert!(matches!(
            store.authenticate("bob", "hunter2"),
            Err(EncycloError::UnknownUser(_))
        ));
        assert!(matches!(
            store.authenticate("alice", "wrong"),
            Err(EncycloError::WrongPassword)
        ));
    }

    #[test]
    fn commit_persists_the_session_map_and_reload_picks_it_up() {
        let mut store = store();
        store.register("alice", "hunter2").unwrap();

        let mut session = store.authenticate("alice", "hunter2").unwrap();
        session.articles.insert(
            "Apple".to_string(),
            Article::new(vec!["Fruit".to_string()], "Crunchy".to_string(), None),
        );
        store.commit(&session).unwrap();

        let mut fresh = store.authenticate("alice", "hunter2").unwrap();
        assert!(fresh.articles().contains_key("Apple"));

        fresh.articles.clear();
        store.reload(&mut fresh).unwrap();
        assert!(fresh.articles().contains_key("Apple"));
    }

    #[test]
    fn commit_preserves_digest_and_signup_time() {
        let mut store = store();
        store.register("alice", "hunter2").unwrap();
        let before = store.backend.load().unwrap()["alice"].clone();

        let session = store.authenticate("alice", "hunter2").unwrap();
        store.commit(&session).unwrap();

        let after = store.backend.load().unwrap()["alice"].clone();
        assert_eq!(after.password_hash, before.password_hash);
        assert_eq!(after.created_at, before.created_at);
    }
}
