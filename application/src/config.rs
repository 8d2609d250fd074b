//! Generation parameters — outbound request bounds.
//!
//! [`GenerationParams`] groups the static parameters the gateway adapter
//! attaches to every completion request. These are application-layer
//! concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Bounds applied to every provider attempt.
///
/// The temperature default sits in the 0.7–0.8 band the output contract
/// expects; the timeout bounds a single attempt so the pipeline always
/// terminates, expiring into an `Unreachable` classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Token-length ceiling per reply.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Per-attempt request timeout.
    pub request_timeout: Duration,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 150,
            temperature: 0.8,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
