use crate::domain::sentiment::Sentiment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Source label used when a feed item does not name its publisher
pub const DEFAULT_SOURCE: &str = "Google News";

/// A news item as it came out of the feed, with missing fields defaulted
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    pub published: String,
    pub summary: String,
    pub source: String,
}

impl Default for RawEntry {
    fn default() -> Self {
        Self {
            title: String::new(),
            link: String::new(),
            published: String::new(),
            summary: String::new(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ClassifiedArticle {
    pub id: Uuid,
    pub title: String,
    pub link: String,
    pub published: String,
    pub summary: String,
    pub source: String,
    pub sentiment: Sentiment,
    pub keyword: String,
    /// Set only once the article has been saved to the watchlist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl ClassifiedArticle {
    /// Build an unsaved article from a feed entry. Consumes the entry.
    pub fn from_entry(entry: RawEntry, sentiment: Sentiment, keyword: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: entry.title,
            link: entry.link,
            published: entry.published,
            summary: entry.summary,
            source: entry.source,
            sentiment,
            keyword: keyword.to_string(),
            saved_at: None,
        }
    }
}

/// POST /api/news/search body
#[derive(Debug, Serialize, Deserialize)]
pub struct NewsSearchRequest {
    pub keyword: String,
}

/// POST /api/news/search response
#[derive(Debug, Serialize, Deserialize)]
pub struct NewsSearchResponse {
    pub articles: Vec<ClassifiedArticle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Vec<ClassifiedArticle>> for NewsSearchResponse {
    fn from(articles: Vec<ClassifiedArticle>) -> Self {
        let message = articles
            .is_empty()
            .then(|| "No articles found".to_string());
        Self { articles, message }
    }
}

/// POST /api/news/analyze-sentiment body
#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentRequest {
    pub headline: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SentimentResponse {
    pub sentiment: Sentiment,
}
