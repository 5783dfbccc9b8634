use crate::error::SessionError;
use crate::model::{AnswerRecord, Question};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    QuestionActive,
    QuestionAnswered,
    Finished,
}

/// One run through a working list.
///
/// `answer_log.len()` equals `current_index` until the current question is
/// answered, and `current_index + 1` afterwards.
#[derive(Clone, Debug)]
pub struct QuizSession {
    working_list: Vec<Question>,
    current_index: usize,
    score: usize,
    answer_log: Vec<AnswerRecord>,
    pending_selection: Option<usize>,
    finished: bool,
}

impl QuizSession {
    pub fn new(working_list: Vec<Question>) -> Result<Self, SessionError> {
        if working_list.is_empty() {
            return Err(SessionError::EmptyWorkingList);
        }
        Ok(Self {
            working_list,
            current_index: 0,
            score: 0,
            answer_log: Vec::new(),
            pending_selection: None,
            finished: false,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        if self.finished {
            SessionPhase::Finished
        } else if self.pending_selection.is_some() {
            SessionPhase::QuestionAnswered
        } else {
            SessionPhase::QuestionActive
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_question(&self) -> &Question {
        &self.working_list[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn total(&self) -> usize {
        self.working_list.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn pending_selection(&self) -> Option<usize> {
        self.pending_selection
    }

    pub fn answer_log(&self) -> &[AnswerRecord] {
        &self.answer_log
    }

    pub fn working_list(&self) -> &[Question] {
        &self.working_list
    }

    /// The record written for the current question, once it is answered.
    pub fn last_answer(&self) -> Option<&AnswerRecord> {
        self.pending_selection.and(self.answer_log.last())
    }

    /// Records an answer for the current question.
    ///
    /// Only the first selection counts; later ones, selections after the
    /// run finished and out-of-range indices return `None`.
    pub fn select_option(&mut self, index: usize) -> Option<AnswerRecord> {
        if self.phase() != SessionPhase::QuestionActive {
            return None;
        }
        let question = self.current_question();
        if index >= question.options.len() {
            return None;
        }

        let record = AnswerRecord::new(question, index);
        if record.is_correct {
            self.score += 1;
        }
        self.pending_selection = Some(index);
        self.answer_log.push(record.clone());
        Some(record)
    }

    /// Moves past an answered question. Returns the phase reached, or `None`
    /// when the current question has not been answered yet.
    pub fn advance(&mut self) -> Option<SessionPhase> {
        if self.phase() != SessionPhase::QuestionAnswered {
            return None;
        }
        if self.current_index + 1 < self.working_list.len() {
            self.current_index += 1;
            self.pending_selection = None;
        } else {
            self.finished = true;
        }
        Some(self.phase())
    }

    /// `round(score / total * 100)`, rounding halves up.
    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.total())
    }

    /// Progress through the list in `[0, 1]`, counting the current question.
    pub fn progress(&self) -> f32 {
        (self.current_index + 1) as f32 / self.total() as f32
    }
}

/// Integer half-up rounding of `score / total * 100`; 0 when `total` is 0.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let rounded = (score * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
