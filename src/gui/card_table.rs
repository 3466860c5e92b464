use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use super::theme::Theme;
use crate::core::Flashcard;

const INDEX_WIDTH: f32 = 28.0;
const ROW_PADDING: f32 = 14.0;

pub fn card_table(ui: &mut egui::Ui, cards: &[Flashcard], theme: &Theme) {
    let ctx = ui.ctx().clone();
    let spacing = ui.spacing().item_spacing.x;
    let text_width = ((ui.available_width() - INDEX_WIDTH - spacing * 3.0) / 2.0).max(80.0);

    // Rows wrap, so each height is measured up front from the laid-out text.
    let body_font = egui::TextStyle::Body.resolve(ui.style());
    let heights: Vec<f32> = cards
        .iter()
        .map(|card| {
            let front = wrapped_height(ui, card.front(), &body_font, text_width);
            let back = wrapped_height(ui, card.back(), &body_font, text_width);
            front.max(back) + ROW_PADDING
        })
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::top_down(egui::Align::LEFT))
        .column(Column::exact(INDEX_WIDTH))
        .column(Column::remainder())
        .column(Column::remainder())
        .header(25.0, |mut header| {
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "#"));
            });
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "Front"));
            });
            header.col(|ui| {
                ui.label(theme.heading(&ctx, "Back"));
            });
        })
        .body(|body| {
            body.heterogeneous_rows(heights.into_iter(), |mut row| {
                let index = row.index();
                let card = &cards[index];
                row.col(|ui| {
                    ui.weak(format!("{}", index + 1));
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(theme.bold(&ctx, card.front())).wrap());
                });
                row.col(|ui| {
                    ui.add(egui::Label::new(card.back()).wrap());
                });
            });
        });
}

fn wrapped_height(ui: &egui::Ui, text: &str, font: &egui::FontId, width: f32) -> f32 {
    ui.fonts(|fonts| {
        fonts.layout(text.to_owned(), font.clone(), egui::Color32::PLACEHOLDER, width).size().y
    })
}
