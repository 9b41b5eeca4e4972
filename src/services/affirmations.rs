// src/services/affirmations.rs
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Affirmation {
    #[serde(default)]
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub category: String,
}

const SEED: &[(&str, &str)] = &[
    ("You are capable of amazing things. Believe in yourself!", "confidence"),
    ("Your feelings are valid, and it is okay to rest.", "self-care"),
    ("You are worthy of love and kindness, especially your own.", "self-worth"),
    ("One small step today is still progress.", "motivation"),
    ("You have survived every hard day so far. You can get through this one too.", "resilience"),
    ("Breathe in calm, breathe out tension.", "calm"),
    ("You do not have to be perfect to be enough.", "self-worth"),
    ("Asking for help is a sign of strength.", "support"),
];

#[derive(Debug, Clone)]
pub struct AffirmationStore {
    items: Vec<Affirmation>,
}

impl Default for AffirmationStore {
    fn default() -> Self {
        let items = SEED
            .iter()
            .zip(1..)
            .map(|(&(text, category), id)| Affirmation {
                id,
                text: text.to_string(),
                category: category.to_string(),
            })
            .collect();
        Self { items }
    }
}

impl AffirmationStore {
    pub fn new(items: Vec<Affirmation>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pick one affirmation uniformly at random.
    pub fn random(&self) -> Option<&Affirmation> {
        self.items.choose(&mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn default_store_is_seeded_with_unique_ids() {
        let store = AffirmationStore::default();
        assert_eq!(store.len(), SEED.len());
        let ids: HashSet<u32> = store.items.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), SEED.len());
    }

    #[test]
    fn random_pick_comes_from_store() {
        let store = AffirmationStore::default();
        let picked = store.random().unwrap();
        assert!(store.items.contains(picked));
    }

    #[test]
    fn empty_store_yields_nothing() {
        let store = AffirmationStore::new(Vec::new());
        assert!(store.is_empty());
        assert!(store.random().is_none());
    }
}
