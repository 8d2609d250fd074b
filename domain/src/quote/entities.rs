//! Quote result entities and the source tag

use crate::core::model::Model;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where a quote came from: a named remote model or the offline corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteSource {
    Provider(Model),
    Fallback,
}

impl QuoteSource {
    /// String form of the tag: the model identifier, or `"fallback"`
    pub fn as_str(&self) -> &str {
        match self {
            QuoteSource::Provider(model) => model.as_str(),
            QuoteSource::Fallback => "fallback",
        }
    }

    /// True when the offline corpus produced the quote
    pub fn is_fallback(&self) -> bool {
        matches!(self, QuoteSource::Fallback)
    }
}

impl std::fmt::Display for QuoteSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for QuoteSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuoteSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(if s == "fallback" {
            QuoteSource::Fallback
        } else {
            QuoteSource::Provider(s.parse().unwrap())
        })
    }
}

/// A quote/author pair extracted from a reply, before a source tag is attached.
///
/// Produced by [`parse_quote_reply`](crate::quote::parsing::parse_quote_reply)
/// and [`FallbackCorpus::pick`](crate::quote::corpus::FallbackCorpus::pick);
/// both guarantee non-empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuote {
    pub quote: String,
    pub author: String,
}

impl ParsedQuote {
    /// Attach a source tag, producing the pipeline's terminal output
    pub fn into_result(self, source: QuoteSource) -> QuoteResult {
        QuoteResult::new(self.quote, self.author, source)
    }
}

/// The pipeline's sole output type (Entity)
///
/// Both `quote` and `author` are non-empty on every construction path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    quote: String,
    author: String,
    source: QuoteSource,
}

impl QuoteResult {
    /// Create a new quote result
    ///
    /// # Panics
    /// Panics if quote or author is empty or only whitespace
    pub fn new(quote: impl Into<String>, author: impl Into<String>, source: QuoteSource) -> Self {
        let quote = quote.into();
        let author = author.into();
        assert!(!quote.trim().is_empty(), "quote cannot be empty");
        assert!(!author.trim().is_empty(), "author cannot be empty");
        Self {
            quote,
            author,
            source,
        }
    }

    pub fn quote(&self) -> &str {
        &self.quote
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn source(&self) -> &QuoteSource {
        &self.source
    }

    /// Clipboard/share rendering: `"<quote>" - <author>`
    pub fn share_text(&self) -> String {
        format!("\"{}\" - {}", self.quote, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_tag_strings() {
        assert_eq!(
            QuoteSource::Provider(Model::Gpt35Turbo).as_str(),
            "openai/gpt-3.5-turbo"
        );
        assert_eq!(QuoteSource::Fallback.as_str(), "fallback");
        assert!(QuoteSource::Fallback.is_fallback());
        assert!(!QuoteSource::Provider(Model::Gpt35Turbo).is_fallback());
    }

    #[test]
    fn test_source_serde_roundtrip() {
        for source in [
            QuoteSource::Provider(Model::Palm2ChatBison),
            QuoteSource::Fallback,
        ] {
            let json = serde_json::to_string(&source).unwrap();
            let back: QuoteSource = serde_json::from_str(&json).unwrap();
            assert_eq!(source, back);
        }
    }

    #[test]
    fn test_share_text() {
        let result = QuoteResult::new("Keep moving forward.", "Anonymous", QuoteSource::Fallback);
        assert_eq!(result.share_text(), "\"Keep moving forward.\" - Anonymous");
    }

    #[test]
    #[should_panic]
    fn test_empty_quote_panics() {
        QuoteResult::new("", "Someone", QuoteSource::Fallback);
    }

    #[test]
    #[should_panic]
    fn test_empty_author_panics() {
        QuoteResult::new("A quote", "  ", QuoteSource::Fallback);
    }

    #[test]
    fn test_into_result_carries_fields() {
        let parsed = ParsedQuote {
            quote: "Q".to_string(),
            author: "A".to_string(),
        };
        let result = parsed.into_result(QuoteSource::Provider(Model::Llama2Chat13b));
        assert_eq!(result.quote(), "Q");
        assert_eq!(result.author(), "A");
        assert_eq!(result.source().as_str(), "meta-llama/llama-2-13b-chat");
    }
}
