use crate::domain::{ArticleDescription, ArticleName, ValidationErrors};

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub name: ArticleName,
    pub description: ArticleDescription,
}

impl NewArticle {
    /// Validates every field, collecting all failures rather than stopping at
    /// the first one.
    pub fn parse(name: String, description: String) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let name = ArticleName::parse(name).map_err(|e| errors.add("name", e)).ok();
        let description = ArticleDescription::parse(description)
            .map_err(|e| errors.add("description", e))
            .ok();

        match (name, description) {
            (Some(name), Some(description)) => Ok(Self { name, description }),
            _ => Err(errors),
        }
    }
}
