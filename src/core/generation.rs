use async_trait::async_trait;

use crate::core::{
    Flashcard,
    FlashcardError,
};

pub const EMPTY_RESULT_MESSAGE: &str =
    "The AI did not generate any flashcards. Please try a different topic.";

const WELCOME_FRONT: &str = "Welcome to the AI Flashcard Generator!";
const WELCOME_BACK: &str = "Enter a topic in the box above (e.g., 'The Roman Empire' or 'Quantum Computing') and click 'Generate' to create 5 flashcards instantly.";

/// Anything that can turn a topic into flashcards.
#[async_trait]
pub trait FlashcardSource: Send + Sync {
    async fn generate(&self, topic: &str) -> Result<Vec<Flashcard>, FlashcardError>;
}

pub type GenerationResult = Result<Vec<Flashcard>, FlashcardError>;

/// UI-facing state of the generator.
///
/// A cycle is `begin` followed by exactly one `complete`. While a cycle is
/// open `is_busy` is true and `begin` refuses to start another one.
#[derive(Debug)]
pub struct GenerationState {
    topic: String,
    busy: bool,
    error: String,
    cards: Vec<Flashcard>,
}

impl GenerationState {
    pub fn new() -> Self {
        Self {
            topic: String::new(),
            busy: false,
            error: String::new(),
            cards: vec![Flashcard::new(WELCOME_FRONT, WELCOME_BACK)],
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn topic_mut(&mut self) -> &mut String {
        &mut self.topic
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn has_error(&self) -> bool {
        !self.error.trim().is_empty()
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn can_generate(&self) -> bool {
        !self.busy && !self.topic.trim().is_empty()
    }

    pub fn generate_button_label(&self) -> &'static str {
        if self.busy {
            "Generating..."
        } else {
            "Generate"
        }
    }

    /// Opens a cycle and returns the topic to generate for, or `None` when
    /// the trigger is not currently allowed.
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_generate() {
            return None;
        }

        self.busy = true;
        self.error.clear();
        self.cards.clear();
        Some(self.topic.clone())
    }

    pub fn complete(&mut self, result: GenerationResult) {
        match result {
            Ok(cards) if cards.is_empty() => {
                tracing::warn!("generation returned no flashcards");
                self.error = EMPTY_RESULT_MESSAGE.to_string();
            }
            Ok(cards) => {
                tracing::info!(count = cards.len(), "flashcards generated");
                self.cards = cards;
            }
            Err(e) => {
                tracing::error!(error = %e, "flashcard generation failed");
                self.error = format!("An error occurred during generation: {}", e);
            }
        }

        self.busy = false;
    }

    /// Runs a whole cycle inline against `source`.
    pub async fn generate<S: FlashcardSource + ?Sized>(&mut self, source: &S) {
        let Some(topic) = self.begin() else {
            return;
        };

        let result = source.generate(&topic).await;
        self.complete(result);
    }
}

impl Default for GenerationState {
    fn default() -> Self {
        Self::new()
    }
}
