// src/state.rs
use std::sync::Arc;

use crate::services::{Responder, affirmations::AffirmationStore};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub responder: Responder,
    pub affirmations: AffirmationStore,
}

impl AppState {
    pub fn new(responder: Responder) -> Self {
        Self {
            responder,
            affirmations: AffirmationStore::default(),
        }
    }

    pub fn with_affirmations(mut self, affirmations: AffirmationStore) -> Self {
        self.affirmations = affirmations;
        self
    }
}
