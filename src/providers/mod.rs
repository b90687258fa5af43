mod factory;
mod fallback;
mod google;
mod ollama;
mod open_ai;

pub use factory::GeneratorFactory;
pub use fallback::FallbackGenerator;
pub use google::GoogleGenerator;
pub use ollama::OllamaGenerator;
pub use open_ai::OpenAiGenerator;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::GenerateError;

/// Unified trait for all generation backends.
///
/// One logical operation: a prompt in, the full text of the first candidate
/// response out, or an error. Implementations must verify their credential
/// at construction so generation is never attempted without one.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Send one prompt and return the full response text
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// HTTP client honoring an optional per-provider timeout. No timeout means
/// whatever default the network stack applies.
pub(crate) fn http_client(timeout_secs: Option<u64>) -> Client {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().unwrap_or_else(|_| Client::new())
}
