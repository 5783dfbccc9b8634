use super::*;
use crate::model::{Command, Scope};
use crate::scope::working_list;
use crate::session::SessionPhase;

impl QuizApp {
    /// Single entry point for user intents. Commands that make no sense in
    /// the current state are dropped.
    pub fn dispatch(&mut self, command: Command) {
        self.dispatch_with_rng(command, &mut rand::thread_rng());
    }

    /// Same as [`QuizApp::dispatch`] with a caller-supplied shuffle source.
    pub fn dispatch_with_rng<R: rand::Rng + ?Sized>(&mut self, command: Command, rng: &mut R) {
        match command {
            Command::ChooseScope(scope) => self.choose_scope(scope, rng),
            Command::SelectOption(index) => self.select_option(index),
            Command::Advance => self.advance(),
            Command::Reset => self.reset(),
        }
    }

    fn choose_scope<R: rand::Rng + ?Sized>(&mut self, scope: Scope, rng: &mut R) {
        if !matches!(self.state, AppState::ScopeSelection) {
            log::debug!("ignoring scope choice outside of scope selection");
            return;
        }

        match QuizSession::new(working_list(&self.store, scope, rng)) {
            Ok(session) => {
                log::info!("starting {} with {} questions", scope.label(), session.total());
                self.message.clear();
                self.state = AppState::InSession(session);
            }
            Err(err) => {
                log::warn!("cannot start {}: {err}", scope.label());
                self.message = format!("{}: {err}.", scope.label());
            }
        }
    }

    fn select_option(&mut self, index: usize) {
        let AppState::InSession(session) = &mut self.state else {
            log::debug!("ignoring option {index}: no session");
            return;
        };
        match session.select_option(index) {
            Some(record) => log::debug!(
                "question {} answered {}",
                session.current_index() + 1,
                if record.is_correct { "correctly" } else { "incorrectly" }
            ),
            None => log::debug!("ignoring option {index}: question already answered"),
        }
    }

    fn advance(&mut self) {
        let AppState::InSession(session) = &mut self.state else {
            log::debug!("ignoring advance: no session");
            return;
        };
        match session.advance() {
            Some(SessionPhase::Finished) => log::info!(
                "session finished: {}/{} ({}%)",
                session.score(),
                session.total(),
                session.percentage()
            ),
            Some(_) => {}
            None => log::debug!("ignoring advance: current question not answered"),
        }
    }

    /// Discards the session and goes back to the scope screen.
    fn reset(&mut self) {
        match self.state {
            AppState::InSession(_) | AppState::ScopeSelection => {
                self.state = AppState::ScopeSelection;
                self.message.clear();
            }
            AppState::AwaitingLoad | AppState::LoadFailed(_) => {
                log::debug!("ignoring reset before questions are loaded");
            }
        }
    }
}
