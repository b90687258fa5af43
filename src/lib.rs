pub mod builder;
pub mod config;
pub mod error;
pub mod exclusions;
pub mod images;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod providers;
pub mod state;

use log::{debug, warn};

pub use builder::{ProviderKind, RecipeGenerator, RecipeGeneratorBuilder};
pub use error::GenerateError;
pub use exclusions::ExclusionSet;
pub use model::{DietaryRestriction, GenerationRequest, InputMode, Recipe};
pub use parser::{parse_recipes, ParsedRecipes};

use crate::config::GenConfig;
use crate::providers::{FallbackGenerator, GeneratorFactory, TextGenerator};

/// Run one generation with the configured default provider (and fallback
/// chain, when enabled).
pub async fn generate_recipes(request: &GenerationRequest) -> Result<ParsedRecipes, GenerateError> {
    generate_recipes_with_provider(request, None).await
}

/// Run one generation with a named provider, or the configured default
/// when `provider_name` is None.
pub async fn generate_recipes_with_provider(
    request: &GenerationRequest,
    provider_name: Option<&str>,
) -> Result<ParsedRecipes, GenerateError> {
    let config = GenConfig::load()?;

    let generator: Box<dyn TextGenerator> = match provider_name {
        // An explicit provider bypasses the fallback chain
        Some(name) => GeneratorFactory::create_named(&config, Some(name))?,
        None => Box::new(FallbackGenerator::new(&config)?),
    };

    generate_recipes_with(generator.as_ref(), request).await
}

/// Run one generation with per-call api_key/model overrides on top of the
/// loaded configuration.
pub async fn generate_recipes_with_config(
    request: &GenerationRequest,
    provider_name: Option<&str>,
    api_key: Option<String>,
    model: Option<String>,
) -> Result<ParsedRecipes, GenerateError> {
    let mut config = GenConfig::load()?;
    let name = provider_name
        .unwrap_or(&config.default_provider)
        .to_string();

    if let Some(provider_config) = config.providers.get_mut(&name) {
        if let Some(key) = api_key {
            provider_config.api_key = Some(key);
        }
        if let Some(model) = model {
            provider_config.model = model;
        }
    }

    let generator = GeneratorFactory::create_named(&config, Some(&name))?;
    generate_recipes_with(generator.as_ref(), request).await
}

/// The generation pipeline: build the prompt, ask the generator for one
/// response, parse it into recipes.
///
/// Zero parsed recipes is not an error; a response the parser cannot use
/// at all simply yields an empty result set.
pub async fn generate_recipes_with(
    generator: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<ParsedRecipes, GenerateError> {
    let prompt = prompt::build_prompt(request);
    debug!(
        "Requesting recipes from '{}' ({} prompt bytes)",
        generator.provider_name(),
        prompt.len()
    );

    let response = generator.generate(&prompt).await?;
    let parsed = parse_recipes(&response, &request.exclusions);

    if parsed.discarded > 0 {
        warn!(
            "{} recipe block(s) in the response could not be parsed and were dropped",
            parsed.discarded
        );
    }

    Ok(parsed)
}
