use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDescription(String);

impl ArticleDescription {
    pub const MAX_LENGTH: usize = 10_000;

    pub fn parse(description: String) -> Result<Self, String> {
        if description.trim().is_empty() {
            return Err("Description cannot be blank.".to_string());
        }
        if description.graphemes(true).count() > Self::MAX_LENGTH {
            return Err(format!("Description should contain at most {} characters.", Self::MAX_LENGTH));
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for ArticleDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
