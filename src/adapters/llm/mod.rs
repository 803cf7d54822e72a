//! Text-generation adapter
//!
//! [`TextGenerator`] is treated as an opaque prompt-in, text-out function by
//! the summary pipeline. [`ChatCompletionClient`] implements it against an
//! OpenAI-compatible `/chat/completions` endpoint.

pub mod client;
pub mod models;

pub use client::ChatCompletionClient;

use crate::domain::LlmError;
use async_trait::async_trait;

/// One text-generation call
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Prompt-in, text-out language model
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> Result<String, LlmError>;

    /// Model identifier reported in summaries
    fn model(&self) -> &str;
}
