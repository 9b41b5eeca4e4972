// src/services/chatbot.rs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Sleep,
    Anxiety,
    LowMood,
    Unknown,
}

const LOW_MOOD_WORDS: &[&str] = &[
    "worthless", "sad", "depressed", "hopeless", "lonely", "empty", "useless",
];
const ANXIETY_WORDS: &[&str] = &[
    "anxious", "anxiety", "stress", "stressed", "panic", "worried", "overwhelmed",
];
const SLEEP_WORDS: &[&str] = &["sleep", "insomnia", "tired", "awake", "exhausted", "nightmare"];
const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "morning", "evening"];

pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();
    let words: Vec<&str> = msg_lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let mentions = |list: &[&str]| words.iter().any(|w| list.contains(w));

    // Distress outranks small talk: "hi, I feel worthless" is LowMood.
    if mentions(LOW_MOOD_WORDS) {
        Intent::LowMood
    } else if mentions(ANXIETY_WORDS) {
        Intent::Anxiety
    } else if mentions(SLEEP_WORDS) {
        Intent::Sleep
    } else if mentions(GREETING_WORDS) {
        Intent::Greeting
    } else {
        Intent::Unknown
    }
}

pub fn generate_reply(user_msg: &str) -> String {
    use Intent::*;

    match detect_intent(user_msg) {
        Greeting => "Hi, I'm here for you. How are you feeling today?".to_string(),

        Sleep => "Rest matters. Try a slow breathing exercise: breathe in for four counts, \
                  hold for seven, and breathe out for eight. Putting screens away and keeping \
                  the room dark can help too."
            .to_string(),

        Anxiety => "That sounds like a lot to carry. Try grounding yourself: name five things \
                    you can see, four you can touch, and three you can hear. You don't have to \
                    solve everything right now."
            .to_string(),

        LowMood => "I'm sorry you're feeling this way. Your worth isn't measured by how you \
                    feel today. Would you like to talk about what's been weighing on you? If \
                    you're in danger, please reach out to a local crisis line."
            .to_string(),

        Unknown => format!(
            "Thank you for sharing: \"{}\". Tell me a little more about how you're feeling.",
            user_msg.trim()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_is_matched_on_whole_words() {
        assert_eq!(detect_intent("Hi there"), Intent::Greeting);
        // "this" contains "hi" but is not a greeting
        assert_eq!(detect_intent("this is odd"), Intent::Unknown);
    }

    #[test]
    fn distress_outranks_greeting() {
        assert_eq!(detect_intent("hey, I feel worthless"), Intent::LowMood);
    }

    #[test]
    fn unknown_reply_echoes_message() {
        let reply = generate_reply("  the weather  ");
        assert!(reply.contains("\"the weather\""));
    }
}
