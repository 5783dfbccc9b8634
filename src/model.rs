use serde::Deserialize;

/// One multiple-choice question as it appears in the question document.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub week: i64,
    pub question: String,
    pub options: Vec<String>,
    /// 0-based index into `options`.
    pub correct_answer: usize,
}

impl Question {
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer
    }

    pub fn correct_option(&self) -> &str {
        self.options
            .get(self.correct_answer)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Which questions a run goes through, and in what order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    Week(i64),
    All,
    Random,
}

impl Scope {
    pub fn label(&self) -> String {
        match self {
            Scope::Week(week) => format!("Week {week}"),
            Scope::All => "All questions".to_owned(),
            Scope::Random => "Random order".to_owned(),
        }
    }
}

/// Snapshot of one answered question, kept for the results review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question: String,
    pub options: Vec<String>,
    pub selected: usize,
    pub correct: usize,
    pub is_correct: bool,
}

impl AnswerRecord {
    pub fn new(question: &Question, selected: usize) -> Self {
        Self {
            question: question.question.clone(),
            options: question.options.clone(),
            selected,
            correct: question.correct_answer,
            is_correct: question.is_correct(selected),
        }
    }

    pub fn selected_text(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn correct_text(&self) -> &str {
        self.options
            .get(self.correct)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// User intents produced by the screens and consumed by `QuizApp::dispatch`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ChooseScope(Scope),
    SelectOption(usize),
    Advance,
    Reset,
}

/// Letter shown next to an option: A, B, C, ...
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| char::from(b'A' + i))
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_deserializes_camel_case_fields() {
        let json = r#"{"week": 2, "question": "Q?", "options": ["a", "b"], "correctAnswer": 1}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.week, 2);
        assert_eq!(q.correct_answer, 1);
        assert_eq!(q.correct_option(), "b");
    }

    #[test]
    fn answer_record_flags_wrong_pick() {
        let q = Question {
            week: 1,
            question: "2 + 2".into(),
            options: vec!["3".into(), "4".into(), "5".into()],
            correct_answer: 1,
        };
        let record = AnswerRecord::new(&q, 2);
        assert!(!record.is_correct);
        assert_eq!(record.selected_text(), "5");
        assert_eq!(record.correct_text(), "4");
    }

    #[test]
    fn option_letters_follow_alphabet() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(26), '?');
    }
}
