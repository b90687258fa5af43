use crate::config::ProviderConfig;
use crate::error::GenerateError;
use crate::providers::{http_client, TextGenerator};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub struct GoogleGenerator {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GoogleGenerator {
    /// Create a new Google Gemini generator from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, GenerateError> {
        // Try config first, then fall back to environment variables
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .ok_or_else(|| GenerateError::MissingApiKey("google".to_string()))?;

        Ok(GoogleGenerator {
            client: http_client(config.timeout),
            api_key,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        GoogleGenerator {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
impl TextGenerator for GoogleGenerator {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "contents": [{
                    "parts": [{
                        "text": prompt
                    }]
                }],
                "generationConfig": {
                    "temperature": self.temperature,
                    "maxOutputTokens": self.max_tokens
                }
            }))
            .send()
            .await?;

        let response_body: Value = response.json().await?;
        debug!("Google Gemini response: {:?}", response_body);

        // Check for API error response
        if let Some(error) = response_body.get("error") {
            let error_code = error["code"].as_i64().unwrap_or(0);
            let error_message = error["message"].as_str().unwrap_or("Unknown error");
            return Err(GenerateError::Generation(format!(
                "Google Gemini API error ({}): {}",
                error_code, error_message
            )));
        }

        let text = response_body["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                GenerateError::Generation(format!(
                    "Failed to extract content from Google Gemini response. Response: {}",
                    serde_json::to_string_pretty(&response_body)
                        .unwrap_or_else(|_| response_body.to_string())
                ))
            })?
            .to_string();

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn test_config(api_key: Option<&str>) -> ProviderConfig {
        ProviderConfig {
            enabled: true,
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            api_key: api_key.map(String::from),
            base_url: None,
            timeout: None,
        }
    }

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "candidates": [{
                        "content": {
                            "parts": [{
                                "text": "Recipe 1:\nTitle: Omelette\nIngredients:\neggs\nInstructions:\nWhisk and fry"
                            }]
                        }
                    }]
                }"#,
            )
            .create_async()
            .await;

        let generator = GoogleGenerator::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gemini-2.5-flash".to_string(),
        );

        let result = generator.generate("Generate 3 unique recipe ideas").await.unwrap();
        assert!(result.contains("Recipe 1:"));
        assert!(result.contains("Omelette"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"code": 400, "message": "API key not valid"}}"#)
            .create_async()
            .await;

        let generator = GoogleGenerator::with_base_url(
            "bad_key".to_string(),
            server.url(),
            "gemini-2.5-flash".to_string(),
        );

        let err = generator.generate("prompt").await.unwrap_err();
        assert!(err.to_string().contains("API key not valid"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_missing_content() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": []}"#)
            .create_async()
            .await;

        let generator = GoogleGenerator::with_base_url(
            "fake_api_key".to_string(),
            server.url(),
            "gemini-2.5-flash".to_string(),
        );

        let err = generator.generate("prompt").await.unwrap_err();
        assert!(err.to_string().contains("Failed to extract content"));
    }

    #[tokio::test]
    async fn test_provider_name() {
        let generator = GoogleGenerator::new(&test_config(Some("test-key"))).unwrap();
        assert_eq!(generator.provider_name(), "google");
    }

    #[tokio::test]
    async fn test_config_key_wins_over_environment() {
        let generator = GoogleGenerator::new(&test_config(Some("from-config"))).unwrap();
        assert_eq!(generator.api_key, "from-config");
        assert_eq!(generator.base_url, DEFAULT_BASE_URL);
    }
}
