use crate::data::QuestionStore;
use crate::error::LoadError;
use crate::loader::LoadResult;
use crate::session::QuizSession;
use std::sync::mpsc::Receiver;

pub mod actions;
pub mod updates;
pub mod view_models;

// View models built by `view_models.rs`
pub use crate::view_models::{AnswerFeedback, QuestionView, ResultsView, ReviewRow, ScopeMenuView, WeekInfo};

/// Where the app is. A running session lives inside `InSession`.
#[derive(Debug, Default)]
pub enum AppState {
    #[default]
    AwaitingLoad,
    LoadFailed(LoadError),
    ScopeSelection,
    InSession(QuizSession),
}

pub struct QuizApp {
    pub state: AppState,
    pub store: QuestionStore,
    /// Shown on the scope screen, e.g. when a scope turned out empty.
    pub message: String,
    pending_load: Option<Receiver<LoadResult>>,
}

impl QuizApp {
    /// App waiting for the question document on `rx`.
    pub fn loading(rx: Receiver<LoadResult>) -> Self {
        Self {
            state: AppState::AwaitingLoad,
            store: QuestionStore::default(),
            message: String::new(),
            pending_load: Some(rx),
        }
    }

    /// App with the questions already in hand, at the scope screen.
    pub fn with_store(store: QuestionStore) -> Self {
        let mut app = Self {
            state: AppState::AwaitingLoad,
            store: QuestionStore::default(),
            message: String::new(),
            pending_load: None,
        };
        app.finish_load(Ok(store));
        app
    }

    pub fn session(&self) -> Option<&QuizSession> {
        match &self.state {
            AppState::InSession(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }
}
