use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::news::ClassifiedArticle,
    domain::watchlist::{
        MessageResponse, SaveArticleRequest, WatchlistService, WatchlistServiceApi,
    },
    error::AppResult,
};

pub struct WatchlistController {
    watchlist_service: Arc<WatchlistService>,
}

impl WatchlistController {
    pub fn new(watchlist_service: Arc<WatchlistService>) -> Self {
        Self { watchlist_service }
    }

    /// GET /api/watchlist - List saved articles
    pub async fn list(
        State(controller): State<Arc<WatchlistController>>,
    ) -> AppResult<Json<Vec<ClassifiedArticle>>> {
        let articles = controller.watchlist_service.list().await?;
        Ok(Json(articles))
    }

    /// POST /api/watchlist/save - Save an article
    pub async fn save(
        State(controller): State<Arc<WatchlistController>>,
        Json(request): Json<SaveArticleRequest>,
    ) -> AppResult<Json<ClassifiedArticle>> {
        let article = controller.watchlist_service.save(request).await?;
        Ok(Json(article))
    }

    /// DELETE /api/watchlist/{articleId} - Remove a saved article
    pub async fn remove(
        State(controller): State<Arc<WatchlistController>>,
        Path(article_id): Path<String>,
    ) -> AppResult<Json<MessageResponse>> {
        controller.watchlist_service.remove(&article_id).await?;
        Ok(Json(MessageResponse {
            message: "Article removed from watchlist".to_string(),
        }))
    }
}
