pub mod errors;
pub mod generation;
pub mod http;
pub mod models;
pub mod tasks;

pub use errors::FlashcardError;
pub use generation::GenerationState;
pub use models::{
    CardList,
    Flashcard,
};
