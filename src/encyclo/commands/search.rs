use crate::commands::{ArticleView, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Article;
use crate::session::AccountSession;
use std::collections::{BTreeMap, BTreeSet};

/// Category value meaning "do not filter by category".
pub const ALL_CATEGORIES: &str = "all";

/// Filter the article map by title substring and/or exact category.
///
/// The query matches the title only, case-insensitively. The category
/// must appear verbatim in the article's category list; `"all"` disables
/// that filter. Both filters combine with AND. The result keeps the map's
/// ascending title order.
pub fn filter(
    all: &BTreeMap<String, Article>,
    query: Option<&str>,
    category: Option<&str>,
) -> BTreeMap<String, Article> {
    let query = query.map(str::to_lowercase);
    let category = category.filter(|c| *c != ALL_CATEGORIES);

    all.iter()
        .filter(|(title, article)| {
            if let Some(q) = &query {
                if !title.to_lowercase().contains(q) {
                    return false;
                }
            }
            if let Some(c) = category {
                if !article.categories.iter().any(|cat| cat == c) {
                    return false;
                }
            }
            true
        })
        .map(|(title, article)| (title.clone(), article.clone()))
        .collect()
}

/// Set union of every article's categories, ascending. Recomputed on each
/// call; a stale universe after a mutation would be a correctness bug.
pub fn category_universe(all: &BTreeMap<String, Article>) -> Vec<String> {
    all.values()
        .flat_map(|article| article.categories.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn run(
    session: &AccountSession,
    query: Option<&str>,
    category: Option<&str>,
) -> Result<CmdResult> {
    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let matches = filter(session.articles(), query, category);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} article(s) found",
        matches.len()
    )));
    result.listed = matches
        .into_iter()
        .map(|(title, article)| ArticleView { title, article })
        .collect();
    Ok(result)
}
