use crate::config::{GenConfig, ProviderConfig};
use crate::error::GenerateError;
use crate::providers::{GoogleGenerator, OllamaGenerator, OpenAiGenerator, TextGenerator};

pub struct GeneratorFactory;

impl GeneratorFactory {
    /// Create a generator instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
    ) -> Result<Box<dyn TextGenerator>, GenerateError> {
        if !config.enabled {
            return Err(GenerateError::ProviderDisabled(provider_name.to_string()));
        }

        match provider_name {
            "google" => Ok(Box::new(GoogleGenerator::new(config)?)),
            "openai" => Ok(Box::new(OpenAiGenerator::new(config)?)),
            "ollama" => Ok(Box::new(OllamaGenerator::new(config)?)),
            _ => Err(GenerateError::UnknownProvider(provider_name.to_string())),
        }
    }

    /// Create the named provider, falling back to the configured default
    pub fn create_named(
        config: &GenConfig,
        provider_name: Option<&str>,
    ) -> Result<Box<dyn TextGenerator>, GenerateError> {
        let name = provider_name.unwrap_or(&config.default_provider);
        let provider_config = config
            .providers
            .get(name)
            .ok_or_else(|| GenerateError::UnknownProvider(name.to_string()))?;

        Self::create(name, provider_config)
    }

    /// Get the default provider from configuration
    pub fn get_default(config: &GenConfig) -> Result<Box<dyn TextGenerator>, GenerateError> {
        Self::create_named(config, None)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "openai", "ollama"]
    }
}
