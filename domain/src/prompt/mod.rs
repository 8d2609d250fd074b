//! Prompt construction for the generation request

pub mod template;

pub use template::QuotePromptTemplate;
