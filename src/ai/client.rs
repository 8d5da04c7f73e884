//! Chat-completion API client
//!
//! Sends one prompt per call to a DeepSeek-compatible `/chat/completions`
//! endpoint and returns the text of the first choice.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::core::models::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::errors::StyleError;

/// LLM API client shared by the style operations
#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    api_key: String,
    api_url: String,
    model_name: String,
}

impl LlmClient {
    #[must_use]
    pub fn new(api_key: String, api_url: String, model_name: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            api_url,
            model_name,
        }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.api_url().to_string(),
            config.model().to_string(),
        )
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Builds the message list: the system message when given, then the prompt.
    #[must_use]
    pub fn build_messages(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Vec<ChatCompletionMessage> {
        let mut chat = Vec::with_capacity(2);

        if let Some(system) = system_prompt.filter(|s| !s.trim().is_empty()) {
            chat.push(ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(system.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            });
        }

        chat.push(ChatCompletionMessage {
            role: MessageRole::user,
            content: Content::Text(prompt.to_string()),
            name: None,
            tool_calls: None,
            tool_call_id: None,
        });

        chat
    }

    /// Builds the JSON body for a completion request.
    #[must_use]
    pub fn build_request_body(&self, messages: &[ChatCompletionMessage]) -> Value {
        let messages: Vec<Value> = messages
            .iter()
            .map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function => "function",
                    MessageRole::tool => "tool",
                };

                let content = match &msg.content {
                    Content::Text(text) => text.clone(),
                    Content::ImageUrl(_) => String::new(),
                };

                json!({
                    "role": role_str,
                    "content": content
                })
            })
            .collect();

        json!({
            "model": self.model_name,
            "messages": messages,
            "temperature": DEFAULT_TEMPERATURE,
            "max_tokens": DEFAULT_MAX_TOKENS
        })
    }

    /// Sends `prompt` (optionally preceded by `system_prompt`) and returns the
    /// content of the first completion choice.
    ///
    /// Performs exactly one HTTP request. Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::EmptyPrompt`] for a blank prompt,
    /// [`StyleError::RemoteCall`] for transport failures and non-success
    /// statuses, and [`StyleError::MalformedResponse`] when the body lacks
    /// `choices[0].message.content`.
    pub async fn complete(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
    ) -> Result<String, StyleError> {
        if prompt.trim().is_empty() {
            return Err(StyleError::EmptyPrompt);
        }

        let messages = self.build_messages(prompt, system_prompt);

        #[cfg(feature = "debug-logs")]
        info!("Using completion prompt:\n{:?}", messages);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            "Requesting completion from {} with {} messages ({} prompt chars)",
            self.model_name,
            messages.len(),
            prompt.chars().count()
        );

        let request_body = self.build_request_body(&messages);

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!("Completion request failed: {}", e);
                StyleError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            match serde_json::from_str::<Value>(&error_text) {
                Ok(body) => error!(status = status.as_u16(), body = %body, "Completion API returned an error"),
                Err(_) => error!(status = status.as_u16(), body = %error_text, "Completion API returned an error"),
            }
            return Err(StyleError::RemoteCall {
                status: Some(status.as_u16()),
                message: format!("Completion API error (status {status})"),
            });
        }

        let response_json: Value = response.json().await.map_err(|e| {
            StyleError::MalformedResponse(format!("Failed to parse completion response: {e}"))
        })?;

        first_choice_content(&response_json)
    }
}

/// Reads `choices[0].message.content` from a completion response.
///
/// # Errors
///
/// Returns [`StyleError::MalformedResponse`] when the field is missing or not a string.
pub fn first_choice_content(response_json: &Value) -> Result<String, StyleError> {
    response_json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|choices| choices.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(std::string::ToString::to_string)
        .ok_or_else(|| {
            StyleError::MalformedResponse("No choices[0].message.content in response".to_string())
        })
}
