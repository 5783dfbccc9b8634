use crate::model::Command;
use crate::ui::helpers::{CORRECT_GREEN, WRONG_RED, big_list_button};
use crate::ui::layout::{centered_panel, content_width};
use crate::view_models::ResultsView;
use egui::{Context, RichText, ScrollArea};

pub fn ui_results(view: &ResultsView, ctx: &Context) -> Option<Command> {
    let max_width = 600.0;

    centered_panel(ctx, 700.0, max_width, |ui| {
        let width = content_width(ui, max_width);
        let mut command = None;

        ui.heading("Quiz complete!");
        ui.add_space(10.0);
        ui.label(RichText::new(view.score_label()).size(40.0).strong());
        ui.label(view.percentage_label());
        ui.add_space(16.0);

        ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
            for row in &view.rows {
                ui.horizontal_wrapped(|ui| {
                    ui.label(row.icon());
                    ui.label(RichText::new(row.title()).strong());
                });
                if let Some((yours, correct)) = &row.correction {
                    ui.label(RichText::new(format!("Your answer: {yours}")).color(WRONG_RED));
                    ui.label(RichText::new(format!("Correct answer: {correct}")).color(CORRECT_GREEN));
                }
                ui.separator();
            }
        });

        ui.add_space(12.0);
        if big_list_button(ui, "Back to week selection", width, 36.0, true) {
            command = Some(Command::Reset);
        }

        command
    })
}
