//! Reply parsing for quote generation.
//!
//! Extracts a quote/author pair from a raw model reply. Providers are asked
//! for a JSON object but are not guaranteed to honor the instruction, so
//! parsing runs two strategies in order:
//!
//! 1. **Structured**: find the first balanced brace-delimited substring and
//!    decode it as JSON with non-empty `quote` and `author` fields.
//! 2. **Line heuristic**: first non-empty line becomes the quote (surrounding
//!    quotation marks stripped), second line the author (leading dashes
//!    stripped, defaulting to "Unknown").
//!
//! Pure domain logic — no I/O, just text pattern matching.

use crate::quote::entities::ParsedQuote;
use thiserror::Error;

/// Author used when a prose reply carries no attribution line.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Failure to extract a usable quote from a reply.
///
/// Recoverable by construction: the orchestrator treats it exactly like a
/// provider failure and advances to the next model in the chain.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("reply is empty")]
    EmptyReply,

    #[error("no usable quote found in reply")]
    NoQuote,
}

/// Parse a raw reply body into a quote/author pair.
///
/// # Examples
///
/// ```
/// use quotecraft_domain::quote::parsing::parse_quote_reply;
///
/// let parsed = parse_quote_reply(r#"{"quote": "Q", "author": "A"}"#).unwrap();
/// assert_eq!(parsed.quote, "Q");
/// assert_eq!(parsed.author, "A");
///
/// let parsed = parse_quote_reply("Keep moving forward.\n- Anonymous").unwrap();
/// assert_eq!(parsed.quote, "Keep moving forward.");
/// assert_eq!(parsed.author, "Anonymous");
/// ```
pub fn parse_quote_reply(body: &str) -> Result<ParsedQuote, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyReply);
    }

    // Strategy 1: structured substring
    if let Some(json_str) = first_balanced_object(body) {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(json_str) {
            let quote = value
                .get("quote")
                .and_then(|v| v.as_str())
                .map(str::trim)
                .unwrap_or("");
            let author = value
                .get("author")
                .and_then(|v| v.as_str())
                .map(str::trim)
                .unwrap_or("");

            if !quote.is_empty() && !author.is_empty() {
                return Ok(ParsedQuote {
                    quote: quote.to_string(),
                    author: author.to_string(),
                });
            }
            // A decodable object without both fields is an unusable
            // structured reply, not prose — the line heuristic would only
            // echo the JSON back as quote text.
            return Err(ParseError::NoQuote);
        }
    }

    // Strategy 2: line heuristic for prose replies
    let mut lines = body.lines().map(str::trim).filter(|l| !l.is_empty());

    let quote = lines
        .next()
        .map(strip_quotation_marks)
        .unwrap_or_default();
    if quote.is_empty() {
        return Err(ParseError::NoQuote);
    }

    let author = lines
        .next()
        .map(strip_attribution_dashes)
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    Ok(ParsedQuote { quote, author })
}

/// Find the first balanced `{...}` substring, if any.
fn first_balanced_object(body: &str) -> Option<&str> {
    let start = body.find('{')?;
    let mut depth = 0usize;
    for (offset, ch) in body[start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&body[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Strip surrounding straight and curly quotation marks from a quote line.
fn strip_quotation_marks(line: &str) -> String {
    line.trim_matches(|c: char| matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}'))
        .trim()
        .to_string()
}

/// Strip the leading attribution dash(es) from an author line.
fn strip_attribution_dashes(line: &str) -> String {
    line.trim_start_matches(|c: char| matches!(c, '-' | '\u{2014}' | '\u{2013}') || c.is_whitespace())
        .trim()
        .to_string()
}
