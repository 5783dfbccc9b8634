pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod model;
pub mod scope;
pub mod session;
pub mod ui;
pub mod view_models;

pub use app::{AppState, QuizApp};
pub use data::QuestionStore;
pub use model::{AnswerRecord, Command, Question, Scope};
pub use session::{QuizSession, SessionPhase};
