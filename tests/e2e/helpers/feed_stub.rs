use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use parking_lot::RwLock;
use rss::{ChannelBuilder, Item, ItemBuilder, SourceBuilder};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// What the stub serves for a given keyword
#[derive(Clone)]
#[allow(dead_code)]
pub enum StubFeed {
    Items(Vec<StubItem>),
    Status(u16),
    Body(String),
    Slow(Duration),
}

#[derive(Clone, Default)]
pub struct StubItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub pub_date: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
}

impl StubItem {
    /// A fully populated item with the given headline
    pub fn headline(title: &str) -> Self {
        let slug: String = title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        Self {
            title: Some(title.to_string()),
            link: Some(format!("https://news.example.com/{slug}")),
            pub_date: Some("Mon, 06 Jan 2025 10:00:00 GMT".to_string()),
            description: Some(format!("<a href=\"https://news.example.com/{slug}\">{title}</a>")),
            source: Some("Example Wire".to_string()),
        }
    }

    fn to_rss(&self) -> Item {
        let source = self.source.as_ref().map(|name| {
            SourceBuilder::default()
                .url("https://source.example.com")
                .title(name.clone())
                .build()
        });

        ItemBuilder::default()
            .title(self.title.clone())
            .link(self.link.clone())
            .pub_date(self.pub_date.clone())
            .description(self.description.clone())
            .source(source)
            .build()
    }
}

#[derive(Default)]
struct StubState {
    feeds: HashMap<String, StubFeed>,
    queries: Vec<String>,
}

/// Local RSS server standing in for Google News.
///
/// Unknown keywords get an empty, well-formed channel.
#[derive(Clone)]
pub struct FeedStub {
    base_url: String,
    state: Arc<RwLock<StubState>>,
}

impl FeedStub {
    pub async fn start() -> Result<Self> {
        let state = Arc::new(RwLock::new(StubState::default()));

        let app = Router::new()
            .route("/rss/search", get(serve_feed))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { base_url, state })
    }

    pub fn url_template(&self) -> String {
        format!("{}/rss/search?q={{keyword}}&hl=en-US", self.base_url)
    }

    pub fn set(&self, keyword: &str, feed: StubFeed) {
        self.state.write().feeds.insert(keyword.to_string(), feed);
    }

    pub fn set_headlines(&self, keyword: &str, headlines: &[&str]) {
        let items = headlines.iter().map(|h| StubItem::headline(h)).collect();
        self.set(keyword, StubFeed::Items(items));
    }

    /// Raw query strings received so far, in arrival order
    pub fn received_queries(&self) -> Vec<String> {
        self.state.read().queries.clone()
    }
}

async fn serve_feed(
    State(state): State<Arc<RwLock<StubState>>>,
    Query(params): Query<HashMap<String, String>>,
    uri: Uri,
) -> Response {
    let keyword = params.get("q").cloned().unwrap_or_default();

    let feed = {
        let mut state = state.write();
        state
            .queries
            .push(uri.query().unwrap_or_default().to_string());
        state.feeds.get(&keyword).cloned()
    };

    match feed {
        None => rss_response(&keyword, &[]),
        Some(StubFeed::Items(items)) => rss_response(&keyword, &items),
        Some(StubFeed::Status(code)) => {
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
        Some(StubFeed::Body(body)) => (
            [(header::CONTENT_TYPE, "text/html")],
            body,
        )
            .into_response(),
        Some(StubFeed::Slow(delay)) => {
            tokio::time::sleep(delay).await;
            rss_response(&keyword, &[])
        }
    }
}

fn rss_response(keyword: &str, items: &[StubItem]) -> Response {
    let channel = ChannelBuilder::default()
        .title(format!("\"{keyword}\" - Google News"))
        .link("https://news.google.com")
        .description("Google News")
        .items(items.iter().map(StubItem::to_rss).collect::<Vec<Item>>())
        .build();

    (
        [(header::CONTENT_TYPE, "application/rss+xml")],
        channel.to_string(),
    )
        .into_response()
}
