use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleName(String);

impl ArticleName {
    pub const MAX_LENGTH: usize = 255;

    /// Accepts any non-blank name of at most 255 graphemes.
    pub fn parse(name: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Name cannot be blank.".to_string());
        }
        if name.graphemes(true).count() > Self::MAX_LENGTH {
            return Err(format!("Name should contain at most {} characters.", Self::MAX_LENGTH));
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for ArticleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
