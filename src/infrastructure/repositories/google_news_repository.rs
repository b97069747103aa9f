use crate::domain::news::{FeedFetchError, FeedSource, RawEntry, DEFAULT_SOURCE};
use async_trait::async_trait;
use rss::{Channel, Item};
use std::time::{Duration, Instant};

/// RSS news search backed by a keyword URL template such as Google News'
/// `https://news.google.com/rss/search?q={keyword}`
pub struct GoogleNewsRepository {
    client: reqwest::Client,
    url_template: String,
}

impl GoogleNewsRepository {
    pub fn new(url_template: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("brandpulse-backend/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url_template,
        })
    }
}

#[async_trait]
impl FeedSource for GoogleNewsRepository {
    async fn fetch_entries(
        &self,
        keyword: &str,
        limit: usize,
    ) -> Result<Vec<RawEntry>, FeedFetchError> {
        let url = build_feed_url(&self.url_template, keyword);
        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedFetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedFetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FeedFetchError::Request(e.to_string()))?;

        let entries = parse_entries(&body, limit)?;

        tracing::info!(
            provider = "rss",
            keyword = %keyword,
            latency_ms = start.elapsed().as_millis(),
            body_size_bytes = body.len(),
            entry_count = entries.len(),
            "Feed request completed"
        );

        Ok(entries)
    }
}

/// Substitute the percent-encoded keyword into the URL template
fn build_feed_url(template: &str, keyword: &str) -> String {
    template.replace("{keyword}", &urlencoding::encode(keyword))
}

/// Parse an RSS document, keeping the first `limit` items in document order
fn parse_entries(body: &[u8], limit: usize) -> Result<Vec<RawEntry>, FeedFetchError> {
    let channel = Channel::read_from(body).map_err(|e| FeedFetchError::Parse(e.to_string()))?;

    Ok(channel.items().iter().take(limit).map(to_raw_entry).collect())
}

fn to_raw_entry(item: &Item) -> RawEntry {
    let text = |value: Option<&str>| value.unwrap_or_default().to_string();

    RawEntry {
        title: text(item.title()),
        link: text(item.link()),
        published: text(item.pub_date()),
        summary: text(item.description()),
        source: item
            .source()
            .and_then(|s| s.title())
            .unwrap_or(DEFAULT_SOURCE)
            .to_string(),
    }
}
