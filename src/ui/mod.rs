mod helpers;
pub mod layout;
pub mod views;

use crate::app::{AppState, QuizApp};
use eframe::{App, Frame};
use egui::Context;
use layout::bottom_panel;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_load_result();

        // Theme toggle
        bottom_panel(ctx);

        // Each screen renders from a view model and reports at most one command
        let command = match &self.state {
            AppState::AwaitingLoad => {
                views::loading::ui_loading(ctx);
                None
            }
            AppState::LoadFailed(err) => {
                views::load_failed::ui_load_failed(err, ctx);
                None
            }
            AppState::ScopeSelection => {
                views::scope_menu::ui_scope_menu(&self.scope_menu_view(), ctx)
            }
            AppState::InSession(session) if session.is_finished() => self
                .results_view()
                .and_then(|view| views::results::ui_results(&view, ctx)),
            AppState::InSession(_) => self
                .question_view()
                .and_then(|view| views::quiz::ui_quiz(&view, ctx)),
        };

        if let Some(command) = command {
            self.dispatch(command);
            ctx.request_repaint();
        }
    }
}
