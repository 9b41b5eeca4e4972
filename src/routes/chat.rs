use axum::{Json, body::Bytes, extract::State};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    error::AppError,
    message::{AffirmationsResponse, ChatResponse},
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let message = extract_message(&body).ok_or_else(|| {
        warn!("chat request without a message");
        AppError::BadRequest("No message provided".to_string())
    })?;

    info!(responder = state.responder.name(), chars = message.len(), "chat message received");
    let response = state.responder.reply(&message).await?;

    Ok(Json(ChatResponse { response }))
}

// Only an absent `message` key (or a body that is not a JSON object) counts as missing.
// Non-string values are passed on as their JSON text.
fn extract_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("message")? {
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

pub async fn affirm_handler(
    State(state): State<SharedState>,
) -> Result<Json<AffirmationsResponse>, AppError> {
    let picked = state
        .affirmations
        .random()
        .cloned()
        .ok_or_else(|| AppError::Internal("No affirmations available".to_string()))?;

    Ok(Json(AffirmationsResponse {
        affirmations: vec![picked],
    }))
}

#[cfg(test)]
mod tests {
    use super::extract_message;

    #[test]
    fn message_extraction() {
        assert_eq!(extract_message(br#"{"message":"hi"}"#).as_deref(), Some("hi"));
        assert_eq!(extract_message(br#"{"message":""}"#).as_deref(), Some(""));
        assert!(extract_message(br#"{"text":"hi"}"#).is_none());
        assert_eq!(extract_message(br#"{"message":42}"#).as_deref(), Some("42"));
        assert_eq!(extract_message(br#"{"message":null}"#).as_deref(), Some("null"));
        assert!(extract_message(br#"["message"]"#).is_none());
        assert!(extract_message(b"not json").is_none());
        assert!(extract_message(b"").is_none());
    }
}
