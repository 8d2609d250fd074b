//! Prompt templates for quote generation

use crate::core::keyword::Keyword;

/// Templates fixing the provider output contract
pub struct QuotePromptTemplate;

impl QuotePromptTemplate {
    /// System prompt: quote + author as JSON, with a fictional author
    pub fn system() -> &'static str {
        r#"You are a creative quote generator. Generate inspiring, meaningful quotes based on given keywords. Always respond with a JSON object containing "quote" and "author" fields. The author should be a fictional but plausible name."#
    }

    /// User prompt embedding the requested keyword
    pub fn user(keyword: &Keyword) -> String {
        format!(
            r#"Generate an inspiring quote about "{}". Respond with JSON only: {{"quote": "the quote text", "author": "author name"}}"#,
            keyword
        )
    }
}
