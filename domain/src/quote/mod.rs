//! Quote generation domain
//!
//! The types and pure logic of the generation pipeline:
//!
//! - [`entities`] — the [`QuoteResult`](entities::QuoteResult) output type
//!   and its [`QuoteSource`](entities::QuoteSource) tag
//! - [`parsing`] — two-tier extraction of a quote/author pair from a raw
//!   model reply
//! - [`corpus`] — the static offline corpus used when every provider fails

pub mod corpus;
pub mod entities;
pub mod parsing;

// Re-export main types
pub use corpus::FallbackCorpus;
pub use entities::{ParsedQuote, QuoteResult, QuoteSource};
pub use parsing::{ParseError, parse_quote_reply};
