pub mod fetcher;
pub mod model;
pub mod service;

pub use fetcher::{FeedFetchError, FeedFetcher, FeedSource, DEFAULT_FEED_LIMIT};
pub use model::{
    ClassifiedArticle, NewsSearchRequest, NewsSearchResponse, RawEntry, SentimentRequest,
    SentimentResponse, DEFAULT_SOURCE,
};
pub use service::{NewsService, NewsServiceApi};
