use super::*;
use std::sync::mpsc::TryRecvError;

impl QuizApp {
    /// Picks up the loader's result if it has arrived. Called every frame.
    pub fn poll_load_result(&mut self) {
        let Some(rx) = self.pending_load.as_ref() else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(LoadError::Disconnected),
        };
        self.pending_load = None;
        self.finish_load(result);
    }

    pub(crate) fn finish_load(&mut self, result: LoadResult) {
        if !matches!(self.state, AppState::AwaitingLoad) {
            log::debug!("ignoring load result outside of AwaitingLoad");
            return;
        }

        match result {
            Ok(store) => {
                log::info!(
                    "loaded {} questions in {} weeks ({} skipped)",
                    store.len(),
                    store.weeks().len(),
                    store.skipped()
                );
                self.store = store;
                self.state = AppState::ScopeSelection;
            }
            Err(err) => {
                log::error!("failed to load questions: {err}");
                self.state = AppState::LoadFailed(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_questions;
    use std::sync::mpsc::channel;

    #[test]
    fn waits_until_result_arrives() {
        let (tx, rx) = channel();
        let mut app = QuizApp::loading(rx);
        app.poll_load_result();
        assert!(matches!(app.state, AppState::AwaitingLoad));
        assert!(app.is_loading());

        tx.send(parse_questions(
            r#"[{"week": 1, "question": "Q", "options": ["a", "b"], "correctAnswer": 0}]"#,
        ))
        .unwrap();
        app.poll_load_result();
        assert!(matches!(app.state, AppState::ScopeSelection));
        assert!(!app.is_loading());
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn load_error_is_terminal() {
        let (tx, rx) = channel();
        let mut app = QuizApp::loading(rx);
        tx.send(Err(LoadError::HttpStatus {
            url: "questions.json".into(),
            status: 404,
        }))
        .unwrap();
        app.poll_load_result();
        assert!(matches!(
            app.state,
            AppState::LoadFailed(LoadError::HttpStatus { status: 404, .. })
        ));
    }

    #[test]
    fn dropped_loader_counts_as_failure() {
        let (tx, rx) = channel::<LoadResult>();
        drop(tx);
        let mut app = QuizApp::loading(rx);
        app.poll_load_result();
        assert!(matches!(app.state, AppState::LoadFailed(LoadError::Disconnected)));
    }

    #[test]
    fn skipped_count_reaches_the_store() {
        let (tx, rx) = channel();
        let mut app = QuizApp::loading(rx);
        tx.send(parse_questions(
            r#"[{"week": 1, "question": "Q", "options": ["a", "b"], "correctAnswer": 0},
                {"week": 1, "question": "bad", "options": ["a"], "correctAnswer": 0}]"#,
        ))
        .unwrap();
        app.poll_load_result();
        assert_eq!(app.store.skipped(), 1);
        assert!(app.message.is_empty());
    }
}
