//! Pluggable nudge backend abstraction
//!
//! - `NudgeBackend` trait: defines the text-generation interface
//! - `NudgeClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `GeminiBackend`, `MockBackend`
//!
//! # Configuration
//!
//! Environment variables:
//! - `GEMINI_API_KEY`: API key, read again on every generation call
//! - `GEMINI_MODEL`: Model identifier (default: gemini-2.5-flash)
//! - `GEMINI_HOST`: Base URL override, mainly for tests

mod gemini;
mod mock;

pub use gemini::GeminiBackend;
pub use mock::MockBackend;

use async_trait::async_trait;

use crate::error::Result;

/// Trait defining the interface for nudge text generation
#[async_trait]
pub trait NudgeBackend: Send + Sync {
    /// Generate text for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Concrete nudge client with compile-time dispatch
#[derive(Clone)]
pub enum NudgeClient {
    /// Google generative-language API
    Gemini(GeminiBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl NudgeClient {
    /// Create a client from environment variables
    ///
    /// The Gemini backend is always constructible; the API key is resolved
    /// per call, so a missing key surfaces as a generation error rather than
    /// a missing client.
    pub fn from_env() -> Self {
        NudgeClient::Gemini(GeminiBackend::from_env())
    }

    /// Create a mock backend for testing
    pub fn mock(reply: &str) -> Self {
        NudgeClient::Mock(MockBackend::new(reply))
    }

    /// Create a mock backend that fails every call
    pub fn failing_mock(reason: &str) -> Self {
        NudgeClient::Mock(MockBackend::failing(reason))
    }

    /// Model identifier this client sends to the service
    pub fn model(&self) -> &str {
        match self {
            NudgeClient::Gemini(b) => b.model(),
            NudgeClient::Mock(_) => "mock",
        }
    }
}

// Implement NudgeBackend for NudgeClient by delegating to the inner backend
#[async_trait]
impl NudgeBackend for NudgeClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        match self {
            NudgeClient::Gemini(b) => b.generate(prompt).await,
            NudgeClient::Mock(b) => b.generate(prompt).await,
        }
    }
}
