use serenity_chat::services::Responder;
use serenity_chat::services::chatbot::{Intent, detect_intent, generate_reply};

#[test]
fn test_detect_intent() {
    assert_eq!(detect_intent("Hello there"), Intent::Greeting);
    assert_eq!(detect_intent("I want to sleep"), Intent::Sleep);
    assert_eq!(detect_intent("I can't stop feeling anxious"), Intent::Anxiety);
    assert_eq!(detect_intent("I feel worthless"), Intent::LowMood);
    assert_eq!(detect_intent("random text"), Intent::Unknown);
}

#[test]
fn test_detect_intent_ignores_case_and_punctuation() {
    assert_eq!(detect_intent("SLEEP!!!"), Intent::Sleep);
    assert_eq!(detect_intent("so... stressed."), Intent::Anxiety);
}

#[test]
fn test_replies_differ_by_intent() {
    let sleep = generate_reply("I want to sleep");
    let low = generate_reply("I feel hopeless");
    assert_ne!(sleep, low);
    assert!(low.contains("crisis line"));
}

#[tokio::test]
async fn test_keyword_responder_never_fails() {
    let responder = Responder::from_config(None).unwrap();
    assert_eq!(responder.name(), "keyword");

    let reply = responder.reply("").await.unwrap();
    assert!(reply.contains("Tell me a little more"));
}
