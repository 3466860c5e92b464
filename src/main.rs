use ai_flashcards::{
    config::AppSettings,
    core::tasks::TaskManager,
    gui::FlashcardApp,
};
use eframe::egui;
use tracing_subscriber::EnvFilter;

const APP_TITLE: &str = "AI Flashcard Generator";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = AppSettings::load();
    tracing::info!(model = %settings.model, "starting {}", APP_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([560.0, 420.0])
            .with_decorations(false),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            let task_manager = TaskManager::new()?;
            Ok(Box::new(FlashcardApp::new(cc, settings, task_manager)))
        }),
    )
}
