//! Keyword value object

use serde::{Deserialize, Serialize};

/// A user-supplied keyword to generate a quote for (Value Object)
///
/// The keyword is trimmed on construction and guaranteed non-empty.
/// Corpus lookups use the lowercase form from [`Keyword::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    content: String,
}

impl Keyword {
    /// Create a new keyword
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        Self::try_new(content).expect("Keyword cannot be empty")
    }

    /// Try to create a new keyword, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the keyword content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lowercase form used for corpus class matching
    pub fn normalized(&self) -> String {
        self.content.to_lowercase()
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Keyword {
    fn from(s: &str) -> Self {
        Keyword::new(s)
    }
}

impl From<String> for Keyword {
    fn from(s: String) -> Self {
        Keyword::new(s)
    }
}
