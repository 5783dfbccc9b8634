use crate::model::Command;
use crate::ui::helpers::{CORRECT_GREEN, WRONG_RED, big_list_button, option_button};
use crate::ui::layout::{centered_panel, content_width};
use crate::view_models::{AnswerFeedback, QuestionView};
use egui::{Context, ProgressBar, RichText};

pub fn ui_quiz(view: &QuestionView, ctx: &Context) -> Option<Command> {
    let max_width = 650.0;
    let estimated_h = 260.0 + 48.0 * view.options.len() as f32;

    centered_panel(ctx, estimated_h, max_width, |ui| {
        let width = content_width(ui, max_width);
        let mut command = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new(view.week_label()).strong());
            ui.separator();
            ui.label(view.position_label());
            ui.separator();
            ui.label(view.score_label());
        });
        ui.add(ProgressBar::new(view.progress).desired_width(width).show_percentage());
        ui.add_space(12.0);

        ui.label(RichText::new(&view.text).heading());
        ui.add_space(12.0);

        for option in &view.options {
            if option_button(ui, option, width, view.answered) {
                command = Some(Command::SelectOption(option.index));
            }
            ui.add_space(6.0);
        }

        if let Some(feedback) = &view.feedback {
            ui.add_space(8.0);
            let color = match feedback {
                AnswerFeedback::Correct => CORRECT_GREEN,
                AnswerFeedback::Incorrect { .. } => WRONG_RED,
            };
            ui.label(RichText::new(feedback.headline()).strong().color(color));
            if let Some(detail) = feedback.detail() {
                ui.label(detail);
            }
            ui.add_space(10.0);
            if big_list_button(ui, view.next_label(), width, 36.0, true) {
                command = Some(Command::Advance);
            }
        }

        command
    })
}
