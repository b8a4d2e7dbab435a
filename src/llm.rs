use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Result, SummarizeError};

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .unwrap_or_else(|_| Client::new())
});

/// Anything that turns a prompt into generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;

    fn model(&self) -> &str;
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.clone(),
            timeout: config.request_timeout,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let mut request = CLIENT
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let res = request.send().await?;

        let status = res.status();
        let raw = res.text().await?;
        // A non-JSON body is treated like one with no candidates.
        let json: Value = serde_json::from_str(&raw).unwrap_or(Value::Null);

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &json));
        }

        extract_text(&json)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

fn api_error(status: u16, json: &Value) -> SummarizeError {
    let message = json["error"]["message"]
        .as_str()
        .unwrap_or("request rejected")
        .to_string();
    SummarizeError::Api { status, message }
}

/// Joins the text parts of the first candidate.
fn extract_text(json: &Value) -> Result<String> {
    let parts = json["candidates"][0]["content"]["parts"]
        .as_array()
        .ok_or(SummarizeError::EmptyResponse)?;

    let text: String = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .collect();

    if text.is_empty() {
        return Err(SummarizeError::EmptyResponse);
    }
    Ok(text)
}
