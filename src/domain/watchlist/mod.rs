pub mod error;
pub mod model;
pub mod service;

use crate::domain::news::ClassifiedArticle;
use crate::error::AppResult;
use async_trait::async_trait;
use uuid::Uuid;

pub use error::WatchlistServiceError;
pub use model::{MessageResponse, SaveArticleRequest};
pub use service::{WatchlistService, WatchlistServiceApi};

/// Durable storage for saved articles, keyed by article id.
#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    /// Store an article that already has `saved_at` set
    async fn insert(&self, article: &ClassifiedArticle) -> AppResult<ClassifiedArticle>;

    /// All saved articles. Callers must not rely on the order.
    async fn list_all(&self) -> AppResult<Vec<ClassifiedArticle>>;

    /// Returns `false` when no article had this id
    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool>;
}
