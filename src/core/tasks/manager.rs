use std::sync::{
    mpsc,
    Arc,
};

use eframe::egui;
use tokio::runtime::Runtime;

use super::TaskResult;
use crate::core::{
    generation::FlashcardSource,
    FlashcardError,
};

/// Runs network work off the UI thread and hands results back through a
/// channel drained once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    repaint: Option<egui::Context>,
}

impl TaskManager {
    pub fn new() -> Result<Self, FlashcardError> {
        let runtime = Arc::new(Runtime::new().map_err(|e| {
            FlashcardError::Config(format!("Failed to create TaskManager runtime: {e}"))
        })?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender, repaint: None })
    }

    /// Completed tasks wake the UI through this context.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    pub fn generate_flashcards(&self, topic: String, source: Arc<dyn FlashcardSource>) {
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();

        tracing::info!(%topic, "starting flashcard generation");
        self.runtime.spawn(async move {
            let result = source.generate(&topic).await;

            let _ = sender.send(TaskResult::Generation { topic, result });
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}
