//! Application layer for quotecraft
//!
//! This crate contains use cases, port definitions, and generation
//! parameters. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    quote_gateway::{GatewayError, QuoteGateway},
    quote_store::{QuoteRecord, QuoteStore, StoreError},
};
pub use use_cases::generate_quote::GenerateQuoteUseCase;
pub use use_cases::load_history::LoadHistoryUseCase;
pub use use_cases::submit_keyword::{
    DEFAULT_DAILY_LIMIT, SubmitError, SubmitKeywordInput, SubmitKeywordUseCase,
};
