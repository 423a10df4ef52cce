use crate::commands::{ArticleView, CmdResult};
use crate::error::{EncycloError, Result};
use crate::session::AccountSession;

/// Fetch articles by exact title.
pub fn run<T: AsRef<str>>(session: &AccountSession, titles: &[T]) -> Result<CmdResult> {
    let mut listed = Vec::with_capacity(titles.len());
    for title in titles {
        let title = title.as_ref();
        let article = session
            .articles()
            .get(title)
            .ok_or_else(|| EncycloError::NotFound(title.to_string()))?;
        listed.push(ArticleView {
            title: title.to_string(),
            article: article.clone(),
        });
    }
    Ok(CmdResult::default().with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_requested_articles_in_request_order() {
        let f = StoreFixture::new()
            .with_article("Apple", "Fruit", "Crunchy")
            .with_article("Banana", "Fruit", "Bendy");

        let result = run(&f.session, &["Banana", "Apple"]).unwrap();
        let titles: Vec<_> = result.listed.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Banana", "Apple"]);
    }

    #[test]
    fn unknown_title_fails_with_not_found() {
        let f = StoreFixture::new();
        assert!(matches!(
            run(&f.session, &["Ghost"]),
            Err(EncycloError::NotFound(_))
        ));
    }
}
