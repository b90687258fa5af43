use crate::config::GenConfig;
use crate::error::GenerateError;
use crate::providers::{GeneratorFactory, TextGenerator};
use async_trait::async_trait;
use log::{debug, info, warn};
use std::time::Duration;
use tokio::time::sleep;

pub struct FallbackGenerator {
    providers: Vec<Box<dyn TextGenerator>>,
    retry_attempts: u32,
    retry_delay_ms: u64,
}

impl FallbackGenerator {
    /// Create a new fallback generator from configuration
    pub fn new(config: &GenConfig) -> Result<Self, GenerateError> {
        if !config.fallback.enabled {
            // Fallback disabled: the default provider, one attempt per
            // user-triggered action
            let default_provider = GeneratorFactory::get_default(config)?;
            return Ok(FallbackGenerator {
                providers: vec![default_provider],
                retry_attempts: 1,
                retry_delay_ms: 0,
            });
        }

        let mut providers = Vec::new();

        // Create providers in fallback order
        for provider_name in &config.fallback.order {
            if let Some(provider_config) = config.providers.get(provider_name) {
                if provider_config.enabled {
                    match GeneratorFactory::create(provider_name, provider_config) {
                        Ok(provider) => {
                            info!("Added '{}' to fallback chain", provider_name);
                            providers.push(provider);
                        }
                        Err(e) => {
                            warn!("Failed to initialize provider '{}': {}", provider_name, e);
                        }
                    }
                }
            } else {
                warn!(
                    "Provider '{}' in fallback order not found in configuration",
                    provider_name
                );
            }
        }

        if providers.is_empty() {
            return Err(GenerateError::Generation(
                "No providers available in fallback configuration".to_string(),
            ));
        }

        Ok(FallbackGenerator {
            providers,
            retry_attempts: config.fallback.retry_attempts,
            retry_delay_ms: config.fallback.retry_delay_ms,
        })
    }

    /// Try a provider with exponential backoff retry logic
    async fn try_provider_with_retry(
        &self,
        provider: &dyn TextGenerator,
        prompt: &str,
    ) -> Result<String, String> {
        let mut last_error = None;

        for attempt in 1..=self.retry_attempts {
            debug!(
                "Attempting generation with {} (attempt {}/{})",
                provider.provider_name(),
                attempt,
                self.retry_attempts
            );

            match provider.generate(prompt).await {
                Ok(result) => {
                    info!(
                        "Successfully generated recipes using {}",
                        provider.provider_name()
                    );
                    return Ok(result);
                }
                Err(e) => {
                    let error_msg = e.to_string();
                    warn!(
                        "Provider {} failed (attempt {}/{}): {}",
                        provider.provider_name(),
                        attempt,
                        self.retry_attempts,
                        error_msg
                    );
                    last_error = Some(error_msg);
                }
            }

            // Sleep only if another attempt follows
            if attempt < self.retry_attempts {
                // Exponential backoff: delay increases with each attempt
                let delay = Duration::from_millis(self.retry_delay_ms * attempt as u64);
                debug!("Waiting {:?} before retry", delay);
                sleep(delay).await;
            }
        }

        Err(last_error.unwrap_or_else(|| "no attempts made".to_string()))
    }
}

#[async_trait]
impl TextGenerator for FallbackGenerator {
    fn provider_name(&self) -> &str {
        "fallback"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let mut all_errors: Vec<String> = Vec::new();

        for provider in &self.providers {
            match self
                .try_provider_with_retry(provider.as_ref(), prompt)
                .await
            {
                Ok(result) => return Ok(result),
                Err(e) => {
                    all_errors.push(format!("{}: {}", provider.provider_name(), e));
                }
            }
        }

        Err(GenerateError::Generation(format!(
            "All providers failed:\n{}",
            all_errors.join("\n")
        )))
    }
}
