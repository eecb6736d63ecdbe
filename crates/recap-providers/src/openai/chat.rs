use recap_core::config::ProviderConfig;
use recap_core::errors::{CompletionError, RecapResult};
use recap_core::traits::ICompletionProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::http::{build_client, is_retryable_status, with_retries, DEFAULT_MAX_RETRIES};

/// Chat-completion client for any OpenAI-compatible `/chat/completions` API.
pub struct OpenAiCompletion {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
    max_retries: u32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiCompletion {
    pub fn new(config: &ProviderConfig, api_key: String) -> RecapResult<Self> {
        let client = build_client(config).map_err(|e| CompletionError::RequestFailed {
            reason: format!("client setup: {e}"),
        })?;
        Ok(Self {
            client,
            endpoint: super::endpoint(&config.openai_base_url, "chat/completions"),
            model: config.chat_model.clone(),
            api_key,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Build from config, reading the API key from the configured env var.
    pub fn from_config(config: &ProviderConfig) -> RecapResult<Self> {
        Self::new(config, config.openai_api_key()?)
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn send(&self, body: &ChatRequest<'_>) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .map_err(|e| CompletionError::RequestFailed {
                reason: format!("HTTP error: {e}"),
            })?;

        let status = response.status();
        let text = response.text().map_err(|e| CompletionError::RequestFailed {
            reason: format!("reading body: {e}"),
        })?;
        if !status.is_success() {
            return Err(CompletionError::BadStatus {
                status: status.as_u16(),
                body: text,
            });
        }
        parse_chat_response(&text)
    }
}

/// Extract `choices[0].message.content` from a chat-completion body.
pub fn parse_chat_response(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| CompletionError::RequestFailed {
            reason: format!("JSON parse error: {e}"),
        })?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(CompletionError::EmptyResponse)
}

fn retryable(e: &CompletionError) -> bool {
    match e {
        CompletionError::RequestFailed { .. } => true,
        CompletionError::BadStatus { status, .. } => is_retryable_status(*status),
        _ => false,
    }
}

impl ICompletionProvider for OpenAiCompletion {
    fn complete(
        &self,
        prompt: &str,
        system_instruction: &str,
        temperature: f32,
    ) -> RecapResult<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature,
        };
        debug!(model = %self.model, prompt_len = prompt.len(), "chat completion request");
        with_retries(self.max_retries, retryable, || self.send(&body)).map_err(|e| {
            warn!(model = %self.model, error = %e, "chat completion failed");
            e.into()
        })
    }

    fn name(&self) -> &str {
        "openai-chat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Hello."}},{"message":{"content":"other"}}]}"#;
        assert_eq!(parse_chat_response(body).unwrap(), "Hello.");
    }

    #[test]
    fn no_choices_is_empty_response() {
        assert!(matches!(
            parse_chat_response(r#"{"choices":[]}"#),
            Err(CompletionError::EmptyResponse)
        ));
        assert!(matches!(
            parse_chat_response(r#"{"choices":[{"message":{"content":null}}]}"#),
            Err(CompletionError::EmptyResponse)
        ));
    }

    #[test]
    fn garbage_is_request_failure() {
        assert!(matches!(
            parse_chat_response("<html>"),
            Err(CompletionError::RequestFailed { .. })
        ));
    }

    #[test]
    fn request_shape() {
        let body = ChatRequest {
            model: "m",
            messages: [
                ChatMessage { role: "system", content: "sys" },
                ChatMessage { role: "user", content: "hi" },
            ],
            temperature: 0.5,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["temperature"], 0.5);
    }

    #[test]
    fn only_transient_failures_retry() {
        assert!(retryable(&CompletionError::BadStatus { status: 502, body: String::new() }));
        assert!(!retryable(&CompletionError::BadStatus { status: 401, body: String::new() }));
        assert!(!retryable(&CompletionError::EmptyResponse));
    }
}
