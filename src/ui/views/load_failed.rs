use crate::error::LoadError;
use crate::ui::helpers::WRONG_RED;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText};

/// Terminal screen: nothing to click, the page has to be reloaded.
pub fn ui_load_failed(err: &LoadError, ctx: &Context) {
    centered_panel(ctx, 260.0, 480.0, |ui| {
        ui.add_space(30.0);
        ui.label(RichText::new("⚠").size(56.0));
        ui.add_space(12.0);
        ui.label(
            RichText::new("Failed to Load Questions")
                .heading()
                .strong()
                .color(WRONG_RED),
        );
        ui.add_space(10.0);
        ui.label(err.to_string());
    });
}
