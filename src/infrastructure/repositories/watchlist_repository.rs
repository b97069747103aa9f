use crate::domain::news::ClassifiedArticle;
use crate::domain::watchlist::WatchlistRepository;
use crate::error::AppResult;
use crate::infrastructure::db::DbPool;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Upper bound on rows returned by a single listing
const MAX_LISTED_ARTICLES: i64 = 1000;

pub struct PgWatchlistRepository {
    pool: Arc<DbPool>,
}

impl PgWatchlistRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WatchlistRepository for PgWatchlistRepository {
    async fn insert(&self, article: &ClassifiedArticle) -> AppResult<ClassifiedArticle> {
        let pool = self.pool.as_ref();
        let stored = sqlx::query_as::<_, ClassifiedArticle>(
            r#"
            INSERT INTO watchlist (id, title, link, published, summary, source, sentiment, keyword, saved_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, NOW()))
            RETURNING id, title, link, published, summary, source, sentiment, keyword, saved_at
            "#,
        )
        .bind(article.id)
        .bind(&article.title)
        .bind(&article.link)
        .bind(&article.published)
        .bind(&article.summary)
        .bind(&article.source)
        .bind(article.sentiment)
        .bind(&article.keyword)
        .bind(article.saved_at)
        .fetch_one(pool)
        .await?;

        Ok(stored)
    }

    async fn list_all(&self) -> AppResult<Vec<ClassifiedArticle>> {
        let pool = self.pool.as_ref();
        let articles = sqlx::query_as::<_, ClassifiedArticle>(
            r#"
            SELECT id, title, link, published, summary, source, sentiment, keyword, saved_at
            FROM watchlist
            ORDER BY saved_at DESC
            LIMIT $1
            "#,
        )
        .bind(MAX_LISTED_ARTICLES)
        .fetch_all(pool)
        .await?;

        Ok(articles)
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let pool = self.pool.as_ref();
        let result = sqlx::query(
            r#"
            DELETE FROM watchlist
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
