use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::news::{
        NewsSearchRequest, NewsSearchResponse, NewsService, NewsServiceApi, SentimentRequest,
        SentimentResponse,
    },
    error::AppResult,
};

pub struct NewsController {
    news_service: Arc<NewsService>,
}

impl NewsController {
    pub fn new(news_service: Arc<NewsService>) -> Self {
        Self { news_service }
    }

    /// POST /api/news/search - Fetch and classify news for a keyword.
    /// Always 200; an empty result carries "No articles found".
    pub async fn search(
        State(controller): State<Arc<NewsController>>,
        Json(request): Json<NewsSearchRequest>,
    ) -> AppResult<Json<NewsSearchResponse>> {
        let articles = controller.news_service.search(&request.keyword).await;
        Ok(Json(NewsSearchResponse::from(articles)))
    }

    /// POST /api/news/analyze-sentiment - Classify a single headline
    pub async fn analyze_sentiment(
        State(controller): State<Arc<NewsController>>,
        Json(request): Json<SentimentRequest>,
    ) -> AppResult<Json<SentimentResponse>> {
        let sentiment = controller.news_service.score_one(&request.headline);
        Ok(Json(SentimentResponse { sentiment }))
    }
}
