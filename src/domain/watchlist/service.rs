use super::error::WatchlistServiceError;
use super::model::SaveArticleRequest;
use super::WatchlistRepository;
use crate::domain::news::ClassifiedArticle;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

pub struct WatchlistService {
    repository: Arc<dyn WatchlistRepository>,
}

impl WatchlistService {
    pub fn new(repository: Arc<dyn WatchlistRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
pub trait WatchlistServiceApi: Send + Sync {
    /// Persist an article with a fresh id and the current time as `saved_at`
    async fn save(
        &self,
        request: SaveArticleRequest,
    ) -> Result<ClassifiedArticle, WatchlistServiceError>;

    async fn list(&self) -> Result<Vec<ClassifiedArticle>, WatchlistServiceError>;

    /// Remove an article by id. Ids that are not valid UUIDs cannot exist in
    /// the store and are reported as not found.
    async fn remove(&self, id: &str) -> Result<(), WatchlistServiceError>;
}

#[async_trait]
impl WatchlistServiceApi for WatchlistService {
    async fn save(
        &self,
        request: SaveArticleRequest,
    ) -> Result<ClassifiedArticle, WatchlistServiceError> {
        let article = request.into_saved_article(Utc::now());

        let stored = self
            .repository
            .insert(&article)
            .await?;

        tracing::info!(
            article_id = %stored.id,
            keyword = %stored.keyword,
            sentiment = %stored.sentiment,
            "Article saved to watchlist"
        );

        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<ClassifiedArticle>, WatchlistServiceError> {
        Ok(self.repository.list_all().await?)
    }

    async fn remove(&self, id: &str) -> Result<(), WatchlistServiceError> {
        let Ok(article_id) = Uuid::parse_str(id) else {
            tracing::info!(article_id = %id, "Delete requested for malformed id");
            return Err(WatchlistServiceError::NotFound);
        };

        let deleted = self
            .repository
            .delete_by_id(article_id)
            .await?;

        if !deleted {
            return Err(WatchlistServiceError::NotFound);
        }

        tracing::info!(article_id = %article_id, "Article removed from watchlist");
        Ok(())
    }
}
