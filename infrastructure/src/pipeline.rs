//! Pipeline assembly.
//!
//! Composes the layers for an embedding caller: resolved configuration in,
//! ready-to-use use cases out. Credential resolution happens here, once,
//! so a missing API key is reported at startup instead of surfacing as an
//! `Unauthorized` on every attempt.

use crate::config::{ConfigError, FileConfig};
use crate::openrouter::OpenRouterGateway;
use quotecraft_application::ports::quote_store::QuoteStore;
use quotecraft_application::use_cases::generate_quote::GenerateQuoteUseCase;
use quotecraft_application::use_cases::load_history::LoadHistoryUseCase;
use quotecraft_application::use_cases::submit_keyword::SubmitKeywordUseCase;
use std::sync::Arc;

/// Build the generation pipeline alone: gateway + model chain.
pub fn build_generator(config: &FileConfig) -> Result<GenerateQuoteUseCase, ConfigError> {
    let api_key = config.provider.resolve_api_key()?;
    let gateway = Arc::new(OpenRouterGateway::new(
        &config.provider,
        api_key,
        config.generation.to_params(),
    ));
    Ok(GenerateQuoteUseCase::with_chain(
        gateway,
        config.chain.to_models(),
    ))
}

/// Build the full submission flow: preconditions, generation, persistence.
pub fn build_submission(
    config: &FileConfig,
    store: Arc<dyn QuoteStore>,
) -> Result<SubmitKeywordUseCase, ConfigError> {
    let generator = build_generator(config)?;
    Ok(SubmitKeywordUseCase::new(generator, store).with_daily_limit(config.limits.daily_limit))
}

/// Build the history view over the same store.
pub fn build_history(store: Arc<dyn QuoteStore>) -> LoadHistoryUseCase {
    LoadHistoryUseCase::new(store)
}
