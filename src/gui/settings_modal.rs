use eframe::egui;

use crate::config::AppSettings;

const DEFAULT_TIMEOUT_SECS: u64 = 60;

pub struct SettingsModal {
    open: bool,
    draft: AppSettings,
    original: AppSettings,
    reveal_key: bool,
    env_key_active: bool,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            open: false,
            draft: AppSettings::default(),
            original: AppSettings::default(),
            reveal_key: false,
            env_key_active: false,
        }
    }

    pub fn open_settings(&mut self, current: &AppSettings) {
        self.draft = current.clone();
        self.original = current.clone();
        self.reveal_key = false;
        self.env_key_active = env_key_present();
        self.open = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Returns the new settings on the frame "Save" is pressed.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<AppSettings> {
        if !self.open {
            return None;
        }

        let mut result = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(460.0);
            ui.heading("Settings");
            ui.add_space(10.0);

            self.ui_endpoint(ui);
            ui.add_space(10.0);
            ui.checkbox(&mut self.draft.dark_mode, "Dark mode");
            ui.add_space(10.0);

            ui.separator();

            let is_dirty = self.is_dirty();
            ui.horizontal(|ui| {
                if is_dirty {
                    ui.colored_label(egui::Color32::YELLOW, "⚠");
                    ui.label("Settings have been modified");
                } else {
                    ui.label("");
                }
            });

            ui.add_space(5.0);

            ui.horizontal(|ui| {
                let save_clicked =
                    ui.add_enabled(is_dirty, egui::Button::new("Save Settings")).clicked();
                let cancel_clicked = ui.button("Cancel").clicked();

                let mut reset_clicked = false;
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    reset_clicked = ui.button("Restore Default").clicked();
                });

                if save_clicked {
                    self.original = self.draft.clone();
                    result = Some(self.draft.clone());
                    ui.close();
                } else if cancel_clicked {
                    self.draft = self.original.clone();
                    ui.close();
                } else if reset_clicked {
                    // The key is a credential, not a preference.
                    self.draft = AppSettings {
                        api_key: self.draft.api_key.clone(),
                        ..AppSettings::default()
                    };
                }
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        result
    }

    fn ui_endpoint(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("settings_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
            ui.label("API Key:");
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.api_key)
                        .password(!self.reveal_key)
                        .desired_width(260.0),
                );
                ui.toggle_value(&mut self.reveal_key, "👁");
            });
            ui.end_row();

            ui.label("Model:");
            ui.add(egui::TextEdit::singleline(&mut self.draft.model).desired_width(300.0));
            ui.end_row();

            ui.label("API Base URL:");
            ui.add(egui::TextEdit::singleline(&mut self.draft.api_base_url).desired_width(300.0));
            ui.end_row();

            ui.label("Request Timeout:");
            ui.horizontal(|ui| {
                let mut enabled = self.draft.request_timeout_secs.is_some();
                if ui.checkbox(&mut enabled, "").changed() {
                    self.draft.request_timeout_secs = enabled.then_some(DEFAULT_TIMEOUT_SECS);
                }
                match &mut self.draft.request_timeout_secs {
                    Some(secs) => {
                        ui.add(egui::DragValue::new(secs).range(5..=600).suffix(" s"));
                    }
                    None => {
                        ui.weak("transport default");
                    }
                }
            });
            ui.end_row();
        });

        if self.env_key_active {
            ui.add_space(4.0);
            ui.weak(format!(
                "ℹ {} is set and takes precedence over the key above.",
                crate::config::API_KEY_ENV
            ));
        }
    }
}

fn env_key_present() -> bool {
    std::env::var(crate::config::API_KEY_ENV).is_ok_and(|key| !key.trim().is_empty())
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
