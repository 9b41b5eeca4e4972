// src/services/mod.rs
pub mod affirmations;
pub mod chatbot;
pub mod completions;

use crate::{config::CompletionsConfig, error::AppError};
use completions::CompletionsResponder;

/// Turns a chat message into reply text.
#[derive(Debug, Clone)]
pub enum Responder {
    /// Offline keyword replies.
    Keyword,
    Completions(CompletionsResponder),
}

impl Responder {
    /// Completions when a deployment is configured, keyword replies otherwise.
    pub fn from_config(completions: Option<CompletionsConfig>) -> Result<Self, reqwest::Error> {
        Ok(match completions {
            Some(cfg) => Responder::Completions(CompletionsResponder::new(cfg)?),
            None => Responder::Keyword,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Responder::Keyword => "keyword",
            Responder::Completions(_) => "azure-openai",
        }
    }

    pub async fn reply(&self, message: &str) -> Result<String, AppError> {
        match self {
            Responder::Keyword => Ok(chatbot::generate_reply(message)),
            Responder::Completions(inner) => inner.reply(message).await,
        }
    }
}
