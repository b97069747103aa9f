use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum WatchlistServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("article not found")]
    NotFound,
}

impl From<AppError> for WatchlistServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(_) => WatchlistServiceError::NotFound,
            _ => WatchlistServiceError::Dependency(err.to_string()),
        }
    }
}

impl From<WatchlistServiceError> for AppError {
    fn from(err: WatchlistServiceError) -> Self {
        match err {
            WatchlistServiceError::NotFound => AppError::NotFound("Article not found".to_string()),
            WatchlistServiceError::Dependency(msg) => AppError::Internal(msg),
        }
    }
}
