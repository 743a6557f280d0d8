//! Mock backend for testing
//!
//! Returns a canned reply or a forced failure. Useful for server tests and
//! development without an API key.

use async_trait::async_trait;

use crate::error::{Error, Result};

use super::NudgeBackend;

/// Mock nudge backend
#[derive(Debug, Clone)]
pub struct MockBackend {
    reply: String,
    fail_with: Option<String>,
}

impl MockBackend {
    /// Create a mock that returns `reply` for every prompt
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fail_with: None,
        }
    }

    /// Create a mock that fails every call with the given reason
    pub fn failing(reason: &str) -> Self {
        Self {
            reply: String::new(),
            fail_with: Some(reason.to_string()),
        }
    }
}

#[async_trait]
impl NudgeBackend for MockBackend {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        match &self.fail_with {
            Some(reason) => Err(Error::Api(reason.clone())),
            None => Ok(self.reply.clone()),
        }
    }
}
