use crate::error::GenerateError;
use crate::exclusions::ExclusionSet;
use crate::images::ImageInput;
use crate::model::{DietaryRestriction, GenerationRequest, InputMode};
use crate::parser::ParsedRecipes;
use crate::{generate_recipes_with_config, generate_recipes_with_provider};

/// Generation backend selectable on the builder
#[derive(Debug, Clone, Copy)]
pub enum ProviderKind {
    Google,
    OpenAi,
    Ollama,
}

impl ProviderKind {
    /// Convert to the provider name string used by the factory
    fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::OpenAi => "openai",
            ProviderKind::Ollama => "ollama",
        }
    }
}

/// Builder for configuring and executing recipe generation
#[derive(Debug, Default)]
pub struct RecipeGeneratorBuilder {
    mode: Option<InputMode>,
    ingredients_text: Option<String>,
    images: Vec<ImageInput>,
    exclusions: ExclusionSet,
    dietary: Vec<DietaryRestriction>,
    provider: Option<ProviderKind>,
    api_key: Option<String>,
    model: Option<String>,
}

impl RecipeGeneratorBuilder {
    /// Set the free-text ingredient list (manual mode)
    ///
    /// # Example
    /// ```
    /// use recipe_generator::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .ingredients("2 eggs, 1 cup flour, some milk");
    /// ```
    pub fn ingredients(mut self, text: impl Into<String>) -> Self {
        self.ingredients_text = Some(text.into());
        self
    }

    /// Add an image file to the image list
    ///
    /// The file is embedded as a data URL when `generate` runs. Image
    /// content is never analyzed; recipes in image mode are built from
    /// common kitchen ingredients.
    pub fn image(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.images.push(ImageInput::File(path.into()));
        self
    }

    /// Add an image URL to the image list
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.images.push(ImageInput::Url(url.into()));
        self
    }

    /// Exclude an ingredient from generated recipes
    ///
    /// # Example
    /// ```
    /// use recipe_generator::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .ingredients("pasta, cream")
    ///     .exclude("mushrooms");
    /// ```
    pub fn exclude(mut self, ingredient: impl AsRef<str>) -> Self {
        self.exclusions.add(ingredient.as_ref());
        self
    }

    /// Add a dietary restriction
    pub fn dietary(mut self, restriction: DietaryRestriction) -> Self {
        if !self.dietary.contains(&restriction) {
            self.dietary.push(restriction);
        }
        self
    }

    /// Force the input mode instead of inferring it
    pub fn mode(mut self, mode: InputMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Select a generation provider explicitly
    ///
    /// # Example
    /// ```
    /// use recipe_generator::{ProviderKind, RecipeGenerator};
    ///
    /// let builder = RecipeGenerator::builder()
    ///     .ingredients("rice, beans")
    ///     .provider(ProviderKind::Ollama);
    /// ```
    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key directly instead of relying on environment
    /// variables or config files
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the selected provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Snapshot the configured inputs as a [`GenerationRequest`].
    ///
    /// Mode defaults to Manual when ingredient text was supplied and Image
    /// otherwise. Manual mode with empty text is a builder error.
    ///
    /// # Errors
    /// Returns `GenerateError::Builder` for an invalid input combination,
    /// or `GenerateError::ImageRead` when an image file cannot be read.
    pub async fn build_request(&self) -> Result<GenerationRequest, GenerateError> {
        let mode = self.mode.unwrap_or(if self.ingredients_text.is_some() {
            InputMode::Manual
        } else {
            InputMode::Image
        });

        let ingredients_text = self.ingredients_text.clone().unwrap_or_default();
        if mode == InputMode::Manual && ingredients_text.trim().is_empty() {
            return Err(GenerateError::Builder(
                "Ingredient text cannot be empty in manual mode. Use .ingredients()".to_string(),
            ));
        }

        let mut images = Vec::with_capacity(self.images.len());
        for input in &self.images {
            images.push(input.embed().await?);
        }

        Ok(GenerationRequest {
            mode,
            ingredients_text,
            images,
            exclusions: self.exclusions.clone(),
            dietary: self.dietary.clone(),
        })
    }

    /// Build the request and run one generation
    ///
    /// # Errors
    /// Returns `GenerateError` if:
    /// - The input combination is invalid
    /// - The provider credential is missing (checked before any request)
    /// - The generation request fails
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_generator::RecipeGenerator;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let parsed = RecipeGenerator::builder()
    ///     .ingredients("2 eggs, 1 cup flour")
    ///     .exclude("nuts")
    ///     .generate()
    ///     .await?;
    /// for recipe in &parsed.recipes {
    ///     println!("{}", recipe.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn generate(self) -> Result<ParsedRecipes, GenerateError> {
        let request = self.build_request().await?;
        let provider_name = self.provider.as_ref().map(|p| p.as_str());

        if self.api_key.is_some() || self.model.is_some() {
            generate_recipes_with_config(&request, provider_name, self.api_key, self.model).await
        } else {
            generate_recipes_with_provider(&request, provider_name).await
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeGenerator;

impl RecipeGenerator {
    /// Creates a new builder for generating recipes
    ///
    /// # Example
    /// ```
    /// use recipe_generator::RecipeGenerator;
    ///
    /// let builder = RecipeGenerator::builder();
    /// ```
    pub fn builder() -> RecipeGeneratorBuilder {
        RecipeGeneratorBuilder::default()
    }
}
