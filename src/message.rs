// src/message.rs
use serde::{Deserialize, Serialize};

use crate::services::affirmations::Affirmation;

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AffirmationsResponse {
    #[serde(default)]
    pub affirmations: Vec<Affirmation>,
}
