use std::collections::HashMap;

use serde::Deserialize;

/// Action API extract response: `{query: {pages: {<pageid>: {extract}}}}`.
#[derive(Debug, Deserialize)]
pub struct ExtractResponse {
    pub query: ExtractQuery,
}

#[derive(Debug, Deserialize)]
pub struct ExtractQuery {
    pub pages: HashMap<String, ExtractPage>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractPage {
    pub extract: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleStatus {
    Fetched,
    /// Markup endpoint answered with a non-success status; the body was kept.
    ServerError(u16),
    /// Nothing usable came back; the saved content is empty.
    Failed(String),
}

/// One fetched article, written once to disk.
#[derive(Debug, Clone)]
pub struct Article {
    pub name: String,
    pub content: String,
    pub status: ArticleStatus,
}

impl Article {
    pub fn fetched(name: &str, content: String) -> Self {
        Self {
            name: name.to_string(),
            content,
            status: ArticleStatus::Fetched,
        }
    }

    pub fn failed(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            content: String::new(),
            status: ArticleStatus::Failed(reason.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, ArticleStatus::Failed(_))
    }
}
