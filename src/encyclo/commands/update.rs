use crate::commands::{ArticleView, CmdMessage, CmdResult, ImageAction};
use crate::error::{EncycloError, Result};
use crate::model::{parse_categories, Article};
use crate::session::AccountSession;
use crate::store::accounts::CredentialStore;
use crate::store::StorageBackend;
use chrono::Utc;

use super::helpers::{commit_articles, require_non_empty_content, require_non_empty_title};

/// Edit an article, optionally renaming it. A rename is remove-old plus
/// insert-new inside a single commit, so the caller never sees a state
/// with both or neither title.
pub fn run<B: StorageBackend>(
    store: &mut CredentialStore<B>,
    session: &mut AccountSession,
    old_title: &str,
    new_title: &str,
    categories_raw: &str,
    content: &str,
    image_action: ImageAction,
) -> Result<CmdResult> {
    let new_title = require_non_empty_title(new_title)?;
    require_non_empty_content(content)?;

    let original = session
        .articles()
        .get(old_title)
        .ok_or_else(|| EncycloError::NotFound(old_title.to_string()))?
        .clone();
    if new_title != old_title && session.articles().contains_key(new_title) {
        return Err(EncycloError::DuplicateTitle(new_title.to_string()));
    }

    let image = match image_action {
        ImageAction::Keep => original.image.clone(),
        ImageAction::Replace(bytes) => Some(bytes),
        ImageAction::Delete => None,
    };
    let article = Article {
        categories: parse_categories(categories_raw),
        content: content.to_string(),
        image,
        created_at: original.created_at,
        updated_at: Some(Utc::now()),
    };

    let mut next = session.articles().clone();
    next.remove(old_title);
    next.insert(new_title.to_string(), article.clone());
    commit_articles(store, session, next)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Article updated: {}", new_title)));
    result.affected.push(ArticleView {
        title: new_title.to_string(),
        article,
    });
    Ok(result)
}
