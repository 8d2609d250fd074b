//! Generate Quote use case — the fallback orchestrator.
//!
//! Walks the provider chain strictly left to right, one fully-awaited
//! attempt at a time. A gateway failure or an unparseable reply advances
//! the chain by one position; there is no same-provider retry, no parallel
//! fan-out, and no latency-based early termination. When the chain is
//! exhausted the offline corpus supplies the result, so `execute` never
//! fails — the caller always receives a [`QuoteResult`].

use crate::ports::quote_gateway::QuoteGateway;
use quotecraft_domain::{
    FallbackCorpus, Keyword, Model, QuotePromptTemplate, QuoteResult, QuoteSource,
    parse_quote_reply,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case driving the provider fallback chain.
///
/// Holds the ordered model chain as immutable configuration; independent
/// `execute` calls share no mutable state.
pub struct GenerateQuoteUseCase {
    gateway: Arc<dyn QuoteGateway>,
    chain: Vec<Model>,
}

impl GenerateQuoteUseCase {
    /// Create with the default model chain.
    pub fn new(gateway: Arc<dyn QuoteGateway>) -> Self {
        Self::with_chain(gateway, Model::default_chain())
    }

    /// Create with an explicit ordered chain.
    pub fn with_chain(gateway: Arc<dyn QuoteGateway>, chain: Vec<Model>) -> Self {
        Self { gateway, chain }
    }

    /// The configured chain, in attempt order.
    pub fn chain(&self) -> &[Model] {
        &self.chain
    }

    /// Produce a quote for the keyword. Infallible: degraded outcomes are
    /// communicated through [`QuoteSource::Fallback`], never an error.
    pub async fn execute(&self, keyword: &Keyword) -> QuoteResult {
        let system_prompt = QuotePromptTemplate::system();
        let user_prompt = QuotePromptTemplate::user(keyword);

        for model in &self.chain {
            debug!("attempting provider {}", model);

            let body = match self
                .gateway
                .complete(model, system_prompt, &user_prompt)
                .await
            {
                Ok(body) => body,
                Err(e) => {
                    warn!("provider {} failed: {}", model, e);
                    continue;
                }
            };

            match parse_quote_reply(&body) {
                Ok(parsed) => {
                    info!("provider {} produced a quote", model);
                    return parsed.into_result(QuoteSource::Provider(model.clone()));
                }
                Err(e) => {
                    warn!("provider {} reply unparseable: {}", model, e);
                }
            }
        }

        info!("provider chain exhausted, serving offline corpus entry");
        FallbackCorpus::pick(keyword).into_result(QuoteSource::Fallback)
    }
}
