use super::*;
use crate::view_models::{OptionMark, OptionView};

impl QuizApp {
    pub fn scope_menu_view(&self) -> ScopeMenuView {
        ScopeMenuView {
            total: self.store.len(),
            weeks: self
                .store
                .week_counts()
                .into_iter()
                .map(|(week, question_count)| WeekInfo {
                    week,
                    question_count,
                })
                .collect(),
            skipped: self.store.skipped(),
            notice: (!self.message.is_empty()).then(|| self.message.clone()),
        }
    }

    /// The current question, while a session is running and not finished.
    pub fn question_view(&self) -> Option<QuestionView> {
        let session = self.session().filter(|s| !s.is_finished())?;
        let question = session.current_question();
        let selected = session.pending_selection();

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let mark = match selected {
                    None => OptionMark::Plain,
                    Some(_) if index == question.correct_answer => OptionMark::Correct,
                    Some(pick) if pick == index => OptionMark::Incorrect,
                    Some(_) => OptionMark::Plain,
                };
                OptionView {
                    index,
                    text: text.clone(),
                    mark,
                }
            })
            .collect();

        let feedback = session.last_answer().map(|record| {
            if record.is_correct {
                AnswerFeedback::Correct
            } else {
                AnswerFeedback::Incorrect {
                    correct_text: record.correct_text().to_owned(),
                }
            }
        });

        Some(QuestionView {
            week: question.week,
            number: session.current_index() + 1,
            total: session.total(),
            text: question.question.clone(),
            options,
            progress: session.progress(),
            score: session.score(),
            answered: selected.is_some(),
            feedback,
            is_last: session.current_index() + 1 == session.total(),
        })
    }

    /// Final tally and review list, once the session is finished.
    pub fn results_view(&self) -> Option<ResultsView> {
        let session = self.session().filter(|s| s.is_finished())?;
        let rows = session
            .answer_log()
            .iter()
            .enumerate()
            .map(|(i, record)| ReviewRow {
                number: i + 1,
                question: record.question.clone(),
                is_correct: record.is_correct,
                correction: (!record.is_correct).then(|| {
                    (
                        record.selected_text().to_owned(),
                        record.correct_text().to_owned(),
                    )
                }),
            })
            .collect();

        Some(ResultsView {
            score: session.score(),
            total: session.total(),
            percentage: session.percentage(),
            rows,
        })
    }
}
