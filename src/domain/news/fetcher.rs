use super::model::RawEntry;
use async_trait::async_trait;
use std::sync::Arc;

/// Default number of entries taken from the feed per search
pub const DEFAULT_FEED_LIMIT: usize = 20;

#[derive(Debug, thiserror::Error)]
pub enum FeedFetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("feed returned status {0}")]
    Status(u16),
    #[error("feed could not be parsed: {0}")]
    Parse(String),
}

/// Upstream news source queried by keyword.
///
/// Implementations preserve the upstream order and return at most `limit`
/// entries. Failures are reported, not swallowed; absorbing them is the
/// job of [`FeedFetcher`].
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_entries(
        &self,
        keyword: &str,
        limit: usize,
    ) -> Result<Vec<RawEntry>, FeedFetchError>;
}

/// Fail-soft wrapper around a [`FeedSource`]: any failure becomes an empty list.
#[derive(Clone)]
pub struct FeedFetcher {
    source: Arc<dyn FeedSource>,
}

impl FeedFetcher {
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        Self { source }
    }

    pub async fn fetch(&self, keyword: &str, limit: usize) -> Vec<RawEntry> {
        match self.source.fetch_entries(keyword, limit).await {
            Ok(mut entries) => {
                entries.truncate(limit);
                tracing::debug!(
                    keyword = %keyword,
                    entry_count = entries.len(),
                    "Feed fetched"
                );
                entries
            }
            Err(e) => {
                tracing::error!(
                    keyword = %keyword,
                    error = %e,
                    "Error fetching news, returning no entries"
                );
                Vec::new()
            }
        }
    }
}
