use eframe::egui;

use super::theme::Theme;

pub enum TitleBarAction {
    OpenSettings,
}

/// Header for the undecorated window. Dragging anywhere on it that is not a
/// button moves the window.
pub struct TitleBar;

impl TitleBar {
    pub fn show(ctx: &egui::Context, theme: &Theme) -> Option<TitleBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("title_bar").exact_height(40.0).show(ctx, |ui| {
            let drag_area =
                ui.interact(ui.max_rect(), egui::Id::new("title_bar_drag"), egui::Sense::drag());
            if drag_area.drag_started_by(egui::PointerButton::Primary) {
                tracing::trace!("starting window drag");
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }

            ui.horizontal_centered(|ui| {
                ui.label(theme.heading(ctx, "AI Flashcard Generator").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✕").on_hover_text("Close").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    if ui.button("⚙ Settings").clicked() {
                        action = Some(TitleBarAction::OpenSettings);
                    }
                });
            });
        });

        action
    }
}
