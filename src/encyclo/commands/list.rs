use crate::commands::{ArticleView, CmdResult};
use crate::error::Result;
use crate::session::AccountSession;

/// All articles, ascending by title (the map iterates in key order).
pub fn run(session: &AccountSession) -> Result<CmdResult> {
    let listed = session
        .articles()
        .iter()
        .map(|(title, article)| ArticleView {
            title: title.clone(),
            article: article.clone(),
        })
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_all_articles_sorted_by_title() {
        let f = StoreFixture::new()
            .with_article("Banana", "Fruit", "Bendy")
            .with_article("Apple", "Fruit", "Crunchy");

        let result = run(&f.session).unwrap();
        let titles: Vec<_> = result.listed.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Banana"]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let f = StoreFixture::new();
        assert!(run(&f.session).unwrap().listed.is_empty());
    }
}
