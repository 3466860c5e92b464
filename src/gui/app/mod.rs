mod modals;

use std::sync::Arc;

use eframe::egui;
use modals::Modals;

use super::{
    card_table::card_table,
    setup_banner::SetupBanner,
    theme::{
        set_theme,
        Theme,
    },
    title_bar::{
        TitleBar,
        TitleBarAction,
    },
};
use crate::{
    config::AppSettings,
    core::{
        generation::FlashcardSource,
        tasks::{
            TaskManager,
            TaskResult,
        },
        FlashcardError,
        GenerationState,
    },
    gemini::{
        GeminiClient,
        GeminiConfig,
    },
};

pub struct FlashcardApp {
    pub generation: GenerationState,

    // Configuration
    pub settings: AppSettings,
    effective_settings: AppSettings,

    // UI State
    pub theme: Theme,
    pub modals: Modals,

    // External Services
    source: Option<Arc<dyn FlashcardSource>>,
    task_manager: TaskManager,
}

impl FlashcardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: AppSettings,
        mut task_manager: TaskManager,
    ) -> Self {
        task_manager.set_repaint_context(cc.egui_ctx.clone());

        let mut app = Self {
            generation: GenerationState::new(),
            effective_settings: settings.effective(),
            settings,
            theme: Theme::dracula(),
            modals: Modals::default(),
            source: None,
            task_manager,
        };

        set_theme(&cc.egui_ctx, &app.theme);
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.2);
        app.apply_dark_mode(&cc.egui_ctx);
        app.rebuild_source();

        app
    }

    fn apply_dark_mode(&self, ctx: &egui::Context) {
        let (theme, preference) = if self.settings.dark_mode {
            (egui::Theme::Dark, egui::ThemePreference::Dark)
        } else {
            (egui::Theme::Light, egui::ThemePreference::Light)
        };
        ctx.set_theme(theme);
        ctx.options_mut(|o| o.theme_preference = preference);
    }

    fn rebuild_source(&mut self) {
        self.effective_settings = self.settings.effective();
        let config = GeminiConfig::from(&self.effective_settings);

        match GeminiClient::from_config(config) {
            Ok(client) => {
                let source: Arc<dyn FlashcardSource> = Arc::new(client);
                self.source = Some(source);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to build Gemini client");
                self.source = None;
                self.modals.error.show_error(
                    "Client Error",
                    "The HTTP client could not be created. Generation is unavailable.",
                    Some(e.to_string()),
                );
            }
        }
    }

    fn trigger_generation(&mut self) {
        let Some(topic) = self.generation.begin() else {
            return;
        };

        match &self.source {
            Some(source) => self.task_manager.generate_flashcards(topic, Arc::clone(source)),
            None => self.generation.complete(Err(FlashcardError::Config(
                "HTTP client is not available".to_string(),
            ))),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Generation { topic, result } => {
                tracing::debug!(%topic, "generation finished");
                self.generation.complete(result);
            }
        }
    }

    fn apply_settings(&mut self, settings: AppSettings, ctx: &egui::Context) {
        self.settings = settings;
        self.apply_dark_mode(ctx);
        self.rebuild_source();

        if let Err(e) = self.settings.save() {
            tracing::error!(error = %e, "failed to save settings");
            self.modals.error.show_error(
                "Settings Not Saved",
                "The new settings apply to this session but could not be written to disk.",
                Some(e.to_string()),
            );
        }
    }

    fn show_generator(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(self.theme.heading(ui.ctx(), "Topic"));

        let mut submitted = false;
        ui.horizontal(|ui| {
            let busy = self.generation.is_busy();
            let input_width = (ui.available_width() - 150.0).max(120.0);

            let response = ui.add_enabled(
                !busy,
                egui::TextEdit::singleline(self.generation.topic_mut())
                    .hint_text("e.g. The Roman Empire")
                    .desired_width(input_width),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }

            let label = self.generation.generate_button_label();
            if ui
                .add_enabled(self.generation.can_generate(), egui::Button::new(label))
                .clicked()
            {
                submitted = true;
            }

            if busy {
                ui.add(egui::Spinner::new());
            }
        });

        if submitted {
            self.trigger_generation();
        }

        if self.generation.has_error() {
            ui.add_space(6.0);
            ui.colored_label(self.theme.red(ui.ctx()), self.generation.error());
        }

        ui.add_space(8.0);
        ui.separator();

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            card_table(ui, self.generation.cards(), &self.theme);
        });
    }
}

impl eframe::App for FlashcardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if let Some(action) = TitleBar::show(ctx, &self.theme) {
            match action {
                TitleBarAction::OpenSettings => self.modals.settings.open_settings(&self.settings),
            }
        }

        if SetupBanner::show(ctx, &self.effective_settings) {
            self.modals.settings.open_settings(&self.settings);
        }

        egui::CentralPanel::default().show(ctx, |ui| self.show_generator(ui));

        if let Some(settings) = self.modals.settings.show(ctx) {
            self.apply_settings(settings, ctx);
        }

        self.modals.error.show(ctx);
    }
}
