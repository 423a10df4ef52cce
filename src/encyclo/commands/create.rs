use crate::commands::{ArticleView, CmdMessage, CmdResult};
use crate::error::{EncycloError, Result};
use crate::model::{parse_categories, Article};
use crate::session::AccountSession;
use crate::store::accounts::CredentialStore;
use crate::store::StorageBackend;

use super::helpers::{commit_articles, require_non_empty_content, require_non_empty_title};

pub fn run<B: StorageBackend>(
    store: &mut CredentialStore<B>,
    session: &mut AccountSession,
    title: &str,
    categories_raw: &str,
    content: &str,
    image: Option<Vec<u8>>,
) -> Result<CmdResult> {
    let title = require_non_empty_title(title)?;
    require_non_empty_content(content)?;
    if session.articles().contains_key(title) {
        return Err(EncycloError::DuplicateTitle(title.to_string()));
    }

    let article = Article::new(parse_categories(categories_raw), content.to_string(), image);
    let mut next = session.articles().clone();
    next.insert(title.to_string(), article.clone());
    commit_articles(store, session, next)?;

    let mut result = CmdResult::default();
    result.affected.push(ArticleView {
        title: title.to_string(),
        article,
    });
    result.add_message(CmdMessage::success(format!("Article created: {}", title)));
    Ok(result)
}
