use sqlx::types::chrono::{DateTime, Utc};
use crate::domain::{ArticleDescription, ArticleId, ArticleName, NewArticle};

/// An article that has been written to the store.
#[derive(Debug, Clone)]
pub struct SavedArticle {
    pub id: ArticleId,
    pub name: ArticleName,
    pub description: ArticleDescription,
    pub created_at: DateTime<Utc>,
}

impl SavedArticle {
    pub fn from_new(id: ArticleId, article: NewArticle, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: article.name,
            description: article.description,
            created_at,
        }
    }
}
