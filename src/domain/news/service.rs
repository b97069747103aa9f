use super::fetcher::FeedFetcher;
use super::model::ClassifiedArticle;
use crate::domain::sentiment::{Sentiment, SentimentScorer};
use async_trait::async_trait;
use std::sync::Arc;

pub struct NewsService {
    fetcher: FeedFetcher,
    scorer: Arc<SentimentScorer>,
    feed_limit: usize,
}

impl NewsService {
    pub fn new(fetcher: FeedFetcher, scorer: Arc<SentimentScorer>, feed_limit: usize) -> Self {
        Self {
            fetcher,
            scorer,
            feed_limit,
        }
    }
}

#[async_trait]
pub trait NewsServiceApi: Send + Sync {
    /// Fetch recent news for a keyword and classify each headline.
    ///
    /// Never fails: an unreachable or broken feed yields an empty list.
    /// Output order matches the feed order.
    async fn search(&self, keyword: &str) -> Vec<ClassifiedArticle>;

    /// Classify a single headline without touching the feed
    fn score_one(&self, headline: &str) -> Sentiment;
}

#[async_trait]
impl NewsServiceApi for NewsService {
    async fn search(&self, keyword: &str) -> Vec<ClassifiedArticle> {
        if keyword.trim().is_empty() {
            tracing::info!("Search called with empty keyword");
            return Vec::new();
        }

        tracing::info!(keyword = %keyword, limit = self.feed_limit, "News search request");

        let entries = self.fetcher.fetch(keyword, self.feed_limit).await;
        if entries.is_empty() {
            tracing::info!(keyword = %keyword, "No articles found");
            return Vec::new();
        }

        let articles: Vec<ClassifiedArticle> = entries
            .into_iter()
            .map(|entry| {
                let sentiment = self.scorer.classify(&entry.title);
                ClassifiedArticle::from_entry(entry, sentiment, keyword)
            })
            .collect();

        tracing::info!(
            keyword = %keyword,
            article_count = articles.len(),
            positive = articles.iter().filter(|a| a.sentiment == Sentiment::Positive).count(),
            negative = articles.iter().filter(|a| a.sentiment == Sentiment::Negative).count(),
            "News search completed"
        );

        articles
    }

    fn score_one(&self, headline: &str) -> Sentiment {
        self.scorer.classify(headline)
    }
}
