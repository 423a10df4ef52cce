use super::StorageBackend;
use crate::error::Result;
use crate::model::Database;

/// In-memory backend for tests: no persistence, no filesystem.
#[derive(Debug, Default)]
pub struct MemBackend {
    db: Database,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Database> {
        Ok(self.db.clone())
    }

    fn save(&mut self, db: &Database) -> Result<()> {
        self.db = db.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::session::AccountSession;
    use crate::store::accounts::CredentialStore;

    /// Builder for a credential store pre-seeded with an account and an
    /// open session, so command tests can skip the signup dance.
    pub struct StoreFixture {
        pub store: CredentialStore<MemBackend>,
        pub session: AccountSession,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            let mut store = CredentialStore::new(MemBackend::new());
            store.register("alice", "hunter2").unwrap();
            let session = store.authenticate("alice", "hunter2").unwrap();
            Self { store, session }
        }

        pub fn with_article(mut self, title: &str, categories_raw: &str, content: &str) -> Self {
            crate::commands::create::run(
                &mut self.store,
                &mut self.session,
                title,
                categories_raw,
                content,
                None,
            )
            .unwrap();
            self
        }

        pub fn with_image_article(
            mut self,
            title: &str,
            categories_raw: &str,
            content: &str,
            image: Vec<u8>,
        ) -> Self {
            crate::commands::create::run(
                &mut self.store,
                &mut self.session,
                title,
                categories_raw,
                content,
                Some(image),
            )
            .unwrap();
            self
        }
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::{Account, Database};

    #[test]
    fn save_then_load_returns_a_copy() {
        let mut backend = MemBackend::new();
        let mut db = Database::new();
        db.insert("alice".to_string(), Account::new("digest".to_string()));
        backend.save(&db).unwrap();

        let loaded = backend.load().unwrap();
        assert_eq!(loaded, db);
    }

    #[test]
    fn fixture_seeds_account_and_articles() {
        let fixture = StoreFixture::new()
            .with_article("Apple", "Fruit", "Crunchy")
            .with_image_article("Banana", "Fruit,Yellow", "Bendy", vec![1, 2]);

        assert_eq!(fixture.session.articles().len(), 2);
        assert!(fixture.session.articles()["Banana"].image.is_some());
    }
}
