//! Text generation
//!
//! [`TextGenerator`] is the seam to a remote model: one instruction in, one
//! reply out. [`GenerationClient`] builds the instruction for a [`Prompt`]
//! and guarantees that every failure (transport, timeout, upstream error,
//! empty reply) comes back as a [`GenerationError`].

mod gemini;
mod prompt;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::{GeminiClient, DEFAULT_ENDPOINT};
pub use prompt::{Prompt, PromptKind};

/// Generation failures ("GenerationFailure")
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Generation request failed: {0}")]
    Transport(String),

    #[error("Generation request timed out: {0}")]
    Timeout(String),

    #[error("Generation API error ({status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("Generation returned no content")]
    EmptyReply,

    #[error("Generation API key not configured. Set GEMINI_API_KEY or generation.api_key in config.")]
    MissingApiKey,

    #[error("Invalid generation endpoint: {0}")]
    InvalidEndpoint(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GenerationError::Timeout(e.to_string())
        } else {
            GenerationError::Transport(e.to_string())
        }
    }
}

/// Remote text-generation backend
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send a complete instruction, return the reply text
    async fn complete(&self, instruction: &str) -> Result<String, GenerationError>;

    /// Human-readable backend name
    fn name(&self) -> &str;
}

/// Prompt-level client over an injected backend
#[derive(Clone)]
pub struct GenerationClient {
    backend: Arc<dyn TextGenerator>,
}

impl GenerationClient {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self { backend }
    }

    /// Render `prompt`, send it, and return the raw reply unparsed
    pub async fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        let instruction = prompt.render();
        tracing::debug!(
            kind = %prompt.kind(),
            backend = self.backend.name(),
            chars = instruction.chars().count(),
            "Sending generation request"
        );

        let reply = self.backend.complete(&instruction).await.map_err(|e| {
            tracing::error!(kind = %prompt.kind(), "Generation failed: {}", e);
            e
        })?;

        if reply.trim().is_empty() {
            tracing::error!(kind = %prompt.kind(), "Generation returned an empty reply");
            return Err(GenerationError::EmptyReply);
        }

        Ok(reply)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedGenerator;
    use super::*;

    #[tokio::test]
    async fn test_generate_returns_reply_verbatim() {
        let backend = Arc::new(ScriptedGenerator::new().reply("  {\"title\": \"x\"}  "));
        let client = GenerationClient::new(backend.clone());

        let reply = client.generate(&Prompt::article("notes")).await.unwrap();

        assert_eq!(reply, "  {\"title\": \"x\"}  ");
        assert!(backend.seen.lock().unwrap()[0].contains("notes"));
    }

    #[tokio::test]
    async fn test_empty_reply_is_failure() {
        let client = GenerationClient::new(Arc::new(ScriptedGenerator::new().reply(" \n ")));
        let err = client.generate(&Prompt::article("notes")).await.unwrap_err();
        assert!(matches!(err, GenerationError::EmptyReply));
    }

    #[tokio::test]
    async fn test_backend_error_propagates() {
        let backend = ScriptedGenerator::new().fail(GenerationError::Timeout("60s".to_string()));
        let client = GenerationClient::new(Arc::new(backend));
        let err = client.generate(&Prompt::article("notes")).await.unwrap_err();
        assert!(matches!(err, GenerationError::Timeout(_)));
    }
}
