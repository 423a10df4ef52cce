use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Article;
use crate::session::AccountSession;
use std::collections::BTreeMap;

/// Derived metrics over one account's article map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleStats {
    pub total_articles: usize,
    pub distinct_categories: usize,
    /// Sum of content lengths in code points, not bytes.
    pub total_content_chars: usize,
    pub articles_with_images: usize,
    /// category -> article count, descending by count, ties broken by
    /// category name ascending.
    pub category_counts: Vec<(String, usize)>,
}

pub fn collect(all: &BTreeMap<String, Article>) -> ArticleStats {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for article in all.values() {
        for cat in &article.categories {
            *counts.entry(cat.as_str()).or_insert(0) += 1;
        }
    }

    // BTreeMap yields names ascending, so a stable sort by descending
    // count keeps the name order within equal counts
    let mut category_counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(cat, n)| (cat.to_string(), n))
        .collect();
    category_counts.sort_by(|a, b| b.1.cmp(&a.1));

    ArticleStats {
        total_articles: all.len(),
        distinct_categories: category_counts.len(),
        total_content_chars: all.values().map(|a| a.content.chars().count()).sum(),
        articles_with_images: all.values().filter(|a| a.image.is_some()).count(),
        category_counts,
    }
}

pub fn run(session: &AccountSession) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(collect(session.articles())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn counts_articles_categories_chars_and_images() {
        let f = StoreFixture::new()
            .with_image_article("Apple", "A", "1234", vec![1])
            .with_article("Banana", "A,B", "École");

        let stats = collect(f.session.articles());
        assert_eq!(stats.total_articles, 2);
        assert_eq!(stats.distinct_categories, 2);
        // "École" is 5 code points, 6 bytes in UTF-8
        assert_eq!(stats.total_content_chars, 9);
        assert_eq!(stats.articles_with_images, 1);
        assert_eq!(
            stats.category_counts,
            vec![("A".to_string(), 2), ("B".to_string(), 1)]
        );
    }

    #[test]
    fn histogram_ties_break_by_name_ascending() {
        let f = StoreFixture::new()
            .with_article("One", "Zebra,Apple", "x")
            .with_article("Two", "Mango", "x")
            .with_article("Three", "Mango", "x");

        let stats = collect(f.session.articles());
        assert_eq!(
            stats.category_counts,
            vec![
                ("Mango".to_string(), 2),
                ("Apple".to_string(), 1),
                ("Zebra".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_store_yields_zeroed_stats() {
        let f = StoreFixture::new();
        assert_eq!(collect(f.session.articles()), ArticleStats::default());
    }
}
