// src/client.rs
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    error::ChatError,
    message::{AffirmationsResponse, ChatRequest},
};

const AFFIRM_PATH: &str = "/affirm";

/// One-shot request/reply client for the chat service.
///
/// Holds no per-call state; clones share the underlying connection pool and
/// every call is independent of the others.
#[derive(Debug, Clone)]
pub struct ChatRequestClient {
    http: reqwest::Client,
    base_url: Url,
    chat_url: Url,
}

impl ChatRequestClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ChatError> {
        let base_url = parse_endpoint(&config.base_url)?;
        let chat_url = join_endpoint(&base_url, &config.chat_path)?;

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url,
            chat_url,
        })
    }

    pub fn chat_url(&self) -> &Url {
        &self.chat_url
    }

    /// POST `{"message": message}` and parse whatever comes back as JSON.
    ///
    /// The returned value is not checked against any schema. A non-2xx status
    /// is logged but its body is still parsed and returned.
    pub async fn send_message(&self, message: &str) -> Result<Value, ChatError> {
        debug!(url = %self.chat_url, "sending chat message");

        let response = self
            .http
            .post(self.chat_url.clone())
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url = %self.chat_url, "chat endpoint returned non-success status");
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Text of the first affirmation served at `/affirm`, if any.
    pub async fn fetch_affirmation(&self) -> Result<Option<String>, ChatError> {
        let url = join_endpoint(&self.base_url, AFFIRM_PATH)?;
        debug!(%url, "fetching affirmation");

        let text = self.http.get(url).send().await?.text().await?;
        let body: AffirmationsResponse = serde_json::from_str(&text)?;

        Ok(body.affirmations.into_iter().next().map(|a| a.text))
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ChatError> {
    Url::parse(raw).map_err(|e| ChatError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

// Appends `path` to the base path; `Url::join` would replace it instead.
fn join_endpoint(base: &Url, path: &str) -> Result<Url, ChatError> {
    let joined = format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    parse_endpoint(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_url_joins_base_and_path() {
        let client = ChatRequestClient::new(&ClientConfig::default()).unwrap();
        assert_eq!(client.chat_url().as_str(), "http://127.0.0.1:5000/chat");
    }

    #[test]
    fn chat_url_keeps_base_path_prefix() {
        let client = ChatRequestClient::new(&ClientConfig::new("http://host:5000/api")).unwrap();
        assert_eq!(client.chat_url().as_str(), "http://host:5000/api/chat");

        let client = ChatRequestClient::new(&ClientConfig::new("http://host:5000/api/")).unwrap();
        assert_eq!(client.chat_url().as_str(), "http://host:5000/api/chat");
    }

    #[test]
    fn rejects_malformed_base_url() {
        let err = ChatRequestClient::new(&ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ChatError::InvalidEndpoint { .. }));
    }
}
