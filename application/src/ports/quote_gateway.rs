//! Quote gateway port
//!
//! Defines the interface for one-shot completion requests against a remote
//! generation model. Implementations (adapters) live in the infrastructure
//! layer and perform exactly one outbound network call per invocation.

use async_trait::async_trait;
use quotecraft_domain::Model;
use thiserror::Error;

/// Classified failure of a single provider attempt.
///
/// Every variant is non-fatal to the orchestrator — each simply advances
/// the chain to the next model. None triggers a same-provider retry.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("credential rejected by provider")]
    Unauthorized,

    #[error("provider rate limit hit")]
    RateLimited,

    #[error("provider unreachable: {0}")]
    Unreachable(String),

    #[error("provider returned status {0}")]
    BadStatus(u16),

    #[error("malformed reply envelope: {0}")]
    MalformedEnvelope(String),
}

/// Gateway for chat-completion requests.
///
/// `complete` returns the assistant message content from the reply
/// envelope; a success status whose envelope carries no content is
/// [`GatewayError::MalformedEnvelope`], not an empty string.
#[async_trait]
pub trait QuoteGateway: Send + Sync {
    /// Issue one completion request to the given model.
    async fn complete(
        &self,
        model: &Model,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError>;
}
