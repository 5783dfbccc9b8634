use crate::model::{Command, Scope};
use crate::ui::helpers::{big_list_button, two_line_button};
use crate::ui::layout::{centered_panel, content_width};
use crate::view_models::ScopeMenuView;
use egui::{Color32, Context, RichText, ScrollArea};

pub fn ui_scope_menu(view: &ScopeMenuView, ctx: &Context) -> Option<Command> {
    let max_width = 420.0;
    let button_h = 40.0;
    let estimated_h = 200.0 + (48.0 + 8.0) * view.weeks.len() as f32;

    centered_panel(ctx, estimated_h, max_width, |ui| {
        let width = content_width(ui, max_width);
        let mut command = None;

        ui.heading("Choose what to practice");
        ui.add_space(16.0);

        for notice in view.skipped_label().iter().chain(&view.notice) {
            ui.label(RichText::new(notice).color(Color32::YELLOW).strong());
            ui.add_space(8.0);
        }

        let enabled = view.full_run_enabled();
        if big_list_button(ui, view.all_label(), width, button_h, enabled) {
            command = Some(Command::ChooseScope(Scope::All));
        }
        ui.add_space(6.0);
        if big_list_button(ui, "🔀 Random order", width, button_h, enabled) {
            command = Some(Command::ChooseScope(Scope::Random));
        }

        ui.add_space(16.0);
        if view.weeks.is_empty() {
            ui.label("No questions available.");
            return command;
        }
        ui.label("Or pick a single week:");
        ui.add_space(8.0);

        ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
            for week in &view.weeks {
                if two_line_button(ui, &week.label(), &week.count_label(), width) {
                    command = Some(Command::ChooseScope(Scope::Week(week.week)));
                }
                ui.add_space(8.0);
            }
        });

        command
    })
}
