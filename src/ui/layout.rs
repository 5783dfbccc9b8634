use egui::{CentralPanel, Context, Frame, Ui, Visuals};

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centered vertically and horizontally, at most `max_width` wide.
/// `est_height` is the expected content height used for vertical centering.
pub fn centered_panel<R>(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui) -> R,
) -> R {
    CentralPanel::default()
        .show(ctx, |ui| {
            let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
            ui.add_space(extra);
            let result = ui
                .vertical_centered(|ui| {
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            let w = ui.available_width().min(max_width);
                            ui.set_width(w);
                            inner(ui)
                        })
                        .inner
                })
                .inner;
            ui.add_space(extra);
            result
        })
        .inner
}

/// Usable content width inside a `centered_panel`.
pub fn content_width(ui: &Ui, max_width: f32) -> f32 {
    ui.available_width().min(max_width)
}
