use thiserror::Error;

/// Errors that can occur while generating recipes
#[derive(Error, Debug)]
pub enum GenerateError {
    /// No API key available for the selected provider; generation is never attempted
    #[error("API key for provider '{0}' not found in config or environment")]
    MissingApiKey(String),

    /// HTTP request to the generation service failed
    #[error("Request to generation service failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The generation service returned an error or an unusable response
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Requested provider is not known to the factory
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Requested provider is disabled in configuration
    #[error("Provider '{0}' is not enabled in configuration")]
    ProviderDisabled(String),

    /// Failed to read an image file for embedding
    #[error("Failed to read image file: {0}")]
    ImageRead(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
