use eframe::egui;

use crate::config::AppSettings;

pub struct SetupBanner;

impl SetupBanner {
    /// Shows a strip under the title bar while no API key is available.
    /// Returns true when clicked.
    pub fn show(ctx: &egui::Context, effective_settings: &AppSettings) -> bool {
        if effective_settings.has_api_key() {
            return false;
        }

        let mut clicked = false;

        egui::TopBottomPanel::top("setup_banner").exact_height(30.0).show(ctx, |ui| {
            let frame = egui::Frame::NONE.fill(egui::Color32::from_rgb(180, 140, 0));

            frame.show(ui, |ui| {
                ui.vertical_centered_justified(|ui| {
                    let text = format!(
                        "⚠ No Gemini API key configured - click to open settings or set {}",
                        crate::config::API_KEY_ENV
                    );
                    let response = ui.add(
                        egui::Label::new(
                            egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE),
                        )
                        .sense(egui::Sense::click()),
                    );

                    if response.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    }

                    clicked = response.clicked();
                });
            });
        });

        clicked
    }
}
