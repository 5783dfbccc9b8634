// src/view_models.rs

use crate::model::option_letter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekInfo {
    pub week: i64,
    pub question_count: usize,
}

impl WeekInfo {
    pub fn label(&self) -> String {
        format!("Week {}", self.week)
    }

    pub fn count_label(&self) -> String {
        match self.question_count {
            1 => "1 question".to_owned(),
            n => format!("{n} questions"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopeMenuView {
    pub total: usize,
    pub weeks: Vec<WeekInfo>,
    /// Records of the question document dropped at load time.
    pub skipped: usize,
    pub notice: Option<String>,
}

impl ScopeMenuView {
    pub fn skipped_label(&self) -> Option<String> {
        match self.skipped {
            0 => None,
            1 => Some("1 malformed question was skipped.".to_owned()),
            n => Some(format!("{n} malformed questions were skipped.")),
        }
    }

    pub fn all_label(&self) -> String {
        format!("Practice all {} questions in order", self.total)
    }

    /// "All" and "random" only make sense with something to practice.
    pub fn full_run_enabled(&self) -> bool {
        self.total > 0
    }
}

/// What to say after the current question was answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    Incorrect { correct_text: String },
}

impl AnswerFeedback {
    pub fn headline(&self) -> &'static str {
        match self {
            AnswerFeedback::Correct => "✓ Correct!",
            AnswerFeedback::Incorrect { .. } => "✗ Incorrect",
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            AnswerFeedback::Correct => None,
            AnswerFeedback::Incorrect { correct_text } => {
                Some(format!("The correct answer is: {correct_text}"))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Plain,
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub text: String,
    pub mark: OptionMark,
}

impl OptionView {
    pub fn letter(&self) -> char {
        option_letter(self.index)
    }

    pub fn label(&self) -> String {
        format!("{}   {}", self.letter(), self.text)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub week: i64,
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<OptionView>,
    /// Share of the run reached, counting the current question.
    pub progress: f32,
    pub score: usize,
    pub answered: bool,
    pub feedback: Option<AnswerFeedback>,
    pub is_last: bool,
}

impl QuestionView {
    pub fn week_label(&self) -> String {
        format!("Week {}", self.week)
    }

    pub fn position_label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    pub fn score_label(&self) -> String {
        format!("Score: {} / {}", self.score, self.total)
    }

    pub fn next_label(&self) -> &'static str {
        if self.is_last { "See results" } else { "Next" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRow {
    pub number: usize,
    pub question: String,
    pub is_correct: bool,
    /// Set only for wrong answers: (your answer, correct answer).
    pub correction: Option<(String, String)>,
}

impl ReviewRow {
    pub fn title(&self) -> String {
        format!("Q{}: {}", self.number, self.question)
    }

    pub fn icon(&self) -> &'static str {
        if self.is_correct { "✅" } else { "❌" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsView {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub rows: Vec<ReviewRow>,
}

impl ResultsView {
    pub fn score_label(&self) -> String {
        format!("{} / {}", self.score, self.total)
    }

    pub fn percentage_label(&self) -> String {
        format!("Score: {}%", self.percentage)
    }
}
