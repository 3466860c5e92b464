pub mod app;
pub mod card_table;
pub mod error_modal;
pub mod settings_modal;
pub mod setup_banner;
pub mod theme;
pub mod title_bar;

pub use app::FlashcardApp;
