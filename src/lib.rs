pub mod config;
pub mod core;
pub mod gemini;
pub mod gui;
pub mod persistence;

pub use crate::core::{
    Flashcard,
    FlashcardError,
    GenerationState,
};
