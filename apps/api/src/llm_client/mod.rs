//! LLM Client — the single point of entry for all Groq API calls.
//!
//! No other module may talk to the generation endpoint directly: the
//! pipeline depends on the [`TextGenerator`] trait so tests can script
//! replies without network access.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Fixed decoding parameters. These are per-deployment settings, not
/// per-call knobs: every invocation generates the same kind of post.
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 6000;

/// Errors from the generation client.
///
/// `MissingApiKey` is a configuration error: it is raised at construction
/// time, before any network I/O, and callers surface it to the operator with
/// remediation guidance. Every other variant is a service error: logged and
/// re-raised, never retried.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("GROQ_API_KEY not found in the environment")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("generation endpoint returned an empty reply")]
    EmptyReply,
}

impl GenerationError {
    /// True for setup problems the operator must fix before retrying at all.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GenerationError::MissingApiKey)
    }
}

/// Text-in/text-out boundary to the external generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one system/user prompt pair and returns the first reply's raw
    /// text verbatim.
    async fn complete(&self, system: &str, user: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for Groq's OpenAI-compatible chat-completions endpoint.
///
/// One synchronous best-effort call per invocation: no retry, no backoff,
/// no circuit breaker. A scheduled run that fails simply surfaces the error
/// and the next day's trigger tries again.
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GroqClient {
    /// Fails fast with [`GenerationError::MissingApiKey`] before any network
    /// call when no credential is available.
    pub fn new(api_key: Option<String>, model: String) -> Result<Self, GenerationError> {
        let api_key = api_key.ok_or(GenerationError::MissingApiKey)?;
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl TextGenerator for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, GenerationError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the structured error message when the body parses
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: ChatResponse = response.json().await?;
        let text = first_choice_text(reply)?;

        debug!("generation call succeeded: {} chars", text.len());
        Ok(text)
    }
}

/// Pulls the first choice's message text out of a chat-completions reply.
fn first_choice_text(reply: ChatResponse) -> Result<String, GenerationError> {
    reply
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.is_empty())
        .ok_or(GenerationError::EmptyReply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_a_configuration_error() {
        let err = match GroqClient::new(None, "llama-3.3-70b-versatile".to_string()) {
            Ok(_) => panic!("expected a configuration error"),
            Err(e) => e,
        };
        assert!(matches!(err, GenerationError::MissingApiKey));
        assert!(err.is_configuration());
    }

    #[test]
    fn service_errors_are_not_configuration_errors() {
        let err = GenerationError::Api {
            status: 500,
            message: "upstream unavailable".to_string(),
        };
        assert!(!err.is_configuration());
    }

    #[test]
    fn request_body_carries_fixed_decoding_parameters() {
        let request = ChatRequest {
            model: "llama-3.3-70b-versatile",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama-3.3-70b-versatile");
        assert_eq!(value["temperature"], 0.7);
        assert_eq!(value["max_tokens"], 6000);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
    }

    #[test]
    fn first_choice_text_returns_the_first_reply_verbatim() {
        let reply: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"TITLE: Foo"}},{"message":{"content":"ignored"}}]}"#,
        )
        .unwrap();
        assert_eq!(first_choice_text(reply).unwrap(), "TITLE: Foo");
    }

    #[test]
    fn empty_choices_yield_empty_reply_error() {
        let reply: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            first_choice_text(reply),
            Err(GenerationError::EmptyReply)
        ));
    }
}
