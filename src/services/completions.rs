// src/services/completions.rs
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::{
    config::{CompletionsConfig, SearchConfig},
    error::AppError,
};

pub const API_VERSION: &str = "2024-06-01";
pub const SYSTEM_PROMPT: &str = "You are a compassionate assistant providing guidance and support \
for someone struggling with feelings of worthlessness and mental health challenges.";
pub const NO_RESPONSE: &str = "No response received.";

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: Vec<CompletionMessage<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    data_sources: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Replies through an Azure OpenAI chat-completions deployment.
#[derive(Debug, Clone)]
pub struct CompletionsResponder {
    http: reqwest::Client,
    config: CompletionsConfig,
}

impl CompletionsResponder {
    pub fn new(config: CompletionsConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.deployment,
            API_VERSION
        )
    }

    pub async fn reply(&self, message: &str) -> Result<String, AppError> {
        let body = build_request(message, self.config.search.as_ref());
        debug!(deployment = %self.config.deployment, "requesting completion");

        let response = self
            .http
            .post(self.url())
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "completions request failed with {status}: {detail}"
            )));
        }

        let parsed: CompletionResponse = response.json().await?;
        let reply = first_choice(parsed);
        info!(chars = reply.len(), "completion received");
        Ok(reply)
    }
}

fn build_request<'a>(message: &'a str, search: Option<&SearchConfig>) -> CompletionRequest<'a> {
    let data_sources = search
        .map(|s| {
            vec![json!({
                "type": "azure_search",
                "parameters": {
                    "endpoint": s.endpoint,
                    "index_name": s.index_name,
                    "authentication": {
                        "type": "api_key",
                        "key": s.admin_key,
                    }
                }
            })]
        })
        .unwrap_or_default();

    CompletionRequest {
        messages: vec![
            CompletionMessage {
                role: "system",
                content: SYSTEM_PROMPT,
            },
            CompletionMessage {
                role: "user",
                content: message,
            },
        ],
        data_sources,
    }
}

fn first_choice(response: CompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .unwrap_or_else(|| NO_RESPONSE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(search: Option<SearchConfig>) -> CompletionsConfig {
        CompletionsConfig {
            endpoint: "https://example.openai.azure.com/".to_string(),
            api_key: "key".to_string(),
            deployment: "gpt".to_string(),
            search,
            timeout: Duration::from_secs(30),
        }
    }

    #[test]
    fn url_targets_deployment() {
        let responder = CompletionsResponder::new(config(None)).unwrap();
        assert_eq!(
            responder.url(),
            "https://example.openai.azure.com/openai/deployments/gpt/chat/completions?api-version=2024-06-01"
        );
    }

    #[test]
    fn request_carries_system_prompt_and_optional_search() {
        let plain = serde_json::to_value(build_request("hello", None)).unwrap();
        assert_eq!(plain["messages"][0]["role"], "system");
        assert_eq!(plain["messages"][1]["content"], "hello");
        assert!(plain.get("data_sources").is_none());

        let search = SearchConfig {
            endpoint: "https://search".to_string(),
            admin_key: "admin".to_string(),
            index_name: "affirmations".to_string(),
        };
        let grounded = serde_json::to_value(build_request("hello", Some(&search))).unwrap();
        assert_eq!(grounded["data_sources"][0]["type"], "azure_search");
        assert_eq!(grounded["data_sources"][0]["parameters"]["index_name"], "affirmations");
    }

    #[test]
    fn missing_choices_fall_back() {
        assert_eq!(first_choice(CompletionResponse::default()), NO_RESPONSE);

        let parsed: CompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"Be gentle with yourself."}}]}"#)
                .unwrap();
        assert_eq!(first_choice(parsed), "Be gentle with yourself.");
    }
}
