use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::chrono::Utc;
use crate::domain::{ArticleId, NewArticle, SavedArticle};

/// Where articles are persisted.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn insert(&self, article: &NewArticle) -> Result<SavedArticle, anyhow::Error>;
}

pub struct PgArticleStore {
    db_pool: PgPool,
}

impl PgArticleStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    #[tracing::instrument(
        name = "Saving new article in the database",
        skip(self, article),
    )]
    async fn insert(&self, article: &NewArticle) -> Result<SavedArticle, anyhow::Error> {
        let id = ArticleId::generate();
        let created_at = Utc::now();
        sqlx::query(
            "INSERT INTO articles (id, name, description, created_at) VALUES ($1, $2, $3, $4)",
        )
            .bind(id.inner())
            .bind(article.name.as_ref())
            .bind(article.description.as_ref())
            .bind(created_at)
            .execute(&self.db_pool)
            .await
            .context("Failed to insert new article in the database.")?;

        Ok(SavedArticle::from_new(id, article.clone(), created_at))
    }
}
