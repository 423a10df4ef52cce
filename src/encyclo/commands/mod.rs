use crate::model::Article;

pub mod create;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod stats;
pub mod update;
pub mod view;

/// What to do with an article's image on update.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageAction {
    Keep,
    Replace(Vec<u8>),
    Delete,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An article paired with its title (the map key) for display.
#[derive(Debug, Clone)]
pub struct ArticleView {
    pub title: String,
    pub article: Article,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<ArticleView>,
    pub listed: Vec<ArticleView>,
    pub categories: Vec<String>,
    pub stats: Option<stats::ArticleStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, articles: Vec<ArticleView>) -> Self {
        self.listed = articles;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_stats(mut self, stats: stats::ArticleStats) -> Self {
        self.stats = Some(stats);
        self
    }
}
