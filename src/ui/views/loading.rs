use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 200.0, 400.0, |ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("Loading questions…").heading());
        ui.add_space(20.0);
        ui.add(Spinner::new());
    });
}
