// src/ui/helpers.rs
use crate::view_models::{OptionMark, OptionView};
use egui::{Button, Color32, RichText, Ui, Vec2};

pub const CORRECT_GREEN: Color32 = Color32::from_rgb(34, 197, 94);
pub const WRONG_RED: Color32 = Color32::from_rgb(239, 68, 68);

pub fn big_list_button(ui: &mut Ui, label: impl Into<RichText>, width: f32, height: f32, enabled: bool) -> bool {
    let text: RichText = label.into();
    ui.add_enabled(enabled, Button::new(text).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Week button with the week on the first line and its size on the second.
pub fn two_line_button(ui: &mut Ui, title: &str, subtitle: &str, width: f32) -> bool {
    let label = RichText::new(format!("{title}\n{subtitle}")).strong();
    big_list_button(ui, label, width, 48.0, true)
}

/// One answer option. Disabled once the question is answered, coloured by
/// its mark.
pub fn option_button(ui: &mut Ui, option: &OptionView, width: f32, answered: bool) -> bool {
    let mut button = Button::new(option.label()).min_size(Vec2::new(width, 40.0));
    button = match option.mark {
        OptionMark::Plain => button,
        OptionMark::Correct => button.fill(CORRECT_GREEN),
        OptionMark::Incorrect => button.fill(WRONG_RED),
    };
    ui.add_enabled(!answered, button).clicked()
}
