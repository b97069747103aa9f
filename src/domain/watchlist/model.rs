use crate::domain::news::ClassifiedArticle;
use crate::domain::sentiment::Sentiment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to save an article to the watchlist.
///
/// Clients usually echo back an article from a search result; its `id`
/// is ignored and a fresh one is assigned on save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveArticleRequest {
    pub title: String,
    pub link: String,
    pub published: String,
    pub summary: String,
    pub source: String,
    pub sentiment: Sentiment,
    pub keyword: String,
}

impl SaveArticleRequest {
    pub fn into_saved_article(self, saved_at: DateTime<Utc>) -> ClassifiedArticle {
        ClassifiedArticle {
            id: Uuid::new_v4(),
            title: self.title,
            link: self.link,
            published: self.published,
            summary: self.summary,
            source: self.source,
            sentiment: self.sentiment,
            keyword: self.keyword,
            saved_at: Some(saved_at),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
