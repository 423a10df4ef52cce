use crate::commands::{ArticleView, CmdMessage, CmdResult};
use crate::error::{EncycloError, Result};
use crate::session::AccountSession;
use crate::store::accounts::CredentialStore;
use crate::store::StorageBackend;

use super::helpers::commit_articles;

pub fn run<B: StorageBackend>(
    store: &mut CredentialStore<B>,
    session: &mut AccountSession,
    title: &str,
) -> Result<CmdResult> {
    let mut next = session.articles().clone();
    let article = next
        .remove(title)
        .ok_or_else(|| EncycloError::NotFound(title.to_string()))?;
    commit_articles(store, session, next)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Article deleted: {}", title)));
    result.affected.push(ArticleView {
        title: title.to_string(),
        article,
    });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn deleted_article_is_gone_from_session_and_storage() {
        let mut f = StoreFixture::new()
            .with_article("Apple", "Fruit", "Crunchy")
            .with_article("Banana", "Fruit", "Bendy");

        run(&mut f.store, &mut f.session, "Apple").unwrap();
        assert!(!f.session.articles().contains_key("Apple"));
        assert!(f.session.articles().contains_key("Banana"));

        let fresh = f.store.authenticate("alice", "hunter2").unwrap();
        assert!(!fresh.articles().contains_key("Apple"));
    }

    #[test]
    fn deleting_a_missing_title_fails_and_changes_nothing() {
        let mut f = StoreFixture::new().with_article("Apple", "Fruit", "Crunchy");
        let before = f.session.articles().clone();

        match run(&mut f.store, &mut f.session, "Ghost") {
            Err(EncycloError::NotFound(t)) => assert_eq!(t, "Ghost"),
            other => panic!("Expected NotFound, got {:?}", other.err()),
        }
        assert_eq!(f.session.articles(), &before);
    }
}
