// src/data.rs

use crate::error::LoadError;
use crate::model::Question;
use std::collections::BTreeMap;

/// Read-only question bank, filled once from the question document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionStore {
    questions: Vec<Question>,
    skipped: usize,
}

impl QuestionStore {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            skipped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// How many records of the document were dropped as malformed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Distinct week numbers, ascending.
    pub fn weeks(&self) -> Vec<i64> {
        self.week_counts().into_keys().collect()
    }

    /// Week number -> number of questions in that week, ascending by week.
    pub fn week_counts(&self) -> BTreeMap<i64, usize> {
        let mut counts = BTreeMap::new();
        for q in &self.questions {
            *counts.entry(q.week).or_insert(0) += 1;
        }
        counts
    }

    /// Questions of one week, in document order.
    pub fn in_week(&self, week: i64) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.week == week)
            .cloned()
            .collect()
    }
}

/// Parses the question document, skipping records that cannot be used.
///
/// The document itself must be a JSON array; anything else is a load error.
pub fn parse_questions(text: &str) -> Result<QuestionStore, LoadError> {
    let document: serde_json::Value = serde_json::from_str(text)?;
    let serde_json::Value::Array(records) = document else {
        return Err(LoadError::NotAnArray);
    };

    let mut questions = Vec::with_capacity(records.len());
    let mut skipped = 0;
    for (i, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Question>(record) {
            Ok(q) => match validate(&q) {
                Ok(()) => questions.push(q),
                Err(reason) => {
                    log::warn!("skipping question #{}: {reason}", i + 1);
                    skipped += 1;
                }
            },
            Err(err) => {
                log::warn!("skipping question #{}: {err}", i + 1);
                skipped += 1;
            }
        }
    }

    Ok(QuestionStore { questions, skipped })
}

fn validate(q: &Question) -> Result<(), String> {
    if q.question.trim().is_empty() {
        return Err("empty question text".to_owned());
    }
    if q.options.len() < 2 {
        return Err(format!("needs at least 2 options, has {}", q.options.len()));
    }
    if q.correct_answer >= q.options.len() {
        return Err(format!(
            "correctAnswer {} is out of range for {} options",
            q.correct_answer,
            q.options.len()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(week: i64, text: &str) -> Question {
        Question {
            week,
            question: text.to_owned(),
            options: vec!["yes".into(), "no".into()],
            correct_answer: 0,
        }
    }

    #[test]
    fn weeks_are_distinct_and_numerically_sorted() {
        let store = QuestionStore::new(vec![q(10, "a"), q(2, "b"), q(10, "c"), q(1, "d")]);
        assert_eq!(store.weeks(), vec![1, 2, 10]);
        assert_eq!(store.week_counts().get(&10), Some(&2));
    }

    #[test]
    fn in_week_keeps_document_order() {
        let store = QuestionStore::new(vec![q(1, "a"), q(2, "b"), q(1, "c")]);
        let texts: Vec<_> = store.in_week(1).into_iter().map(|q| q.question).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn week_groups_cover_every_question_once() {
        let store = QuestionStore::new(vec![q(3, "a"), q(1, "b"), q(3, "c"), q(2, "d"), q(1, "e")]);
        let mut regrouped: Vec<Question> = store
            .weeks()
            .into_iter()
            .flat_map(|w| store.in_week(w))
            .collect();
        let mut original = store.questions().to_vec();
        regrouped.sort_by(|a, b| a.question.cmp(&b.question));
        original.sort_by(|a, b| a.question.cmp(&b.question));
        assert_eq!(regrouped, original);
    }

    #[test]
    fn parse_skips_malformed_records() {
        let text = r#"[
            {"week": 1, "question": "ok", "options": ["a", "b"], "correctAnswer": 1},
            {"week": 1, "question": "out of range", "options": ["a", "b"], "correctAnswer": 2},
            {"week": 1, "question": "one option", "options": ["a"], "correctAnswer": 0},
            {"week": 2, "options": ["a", "b"], "correctAnswer": 0},
            {"week": 2, "question": "  ", "options": ["a", "b"], "correctAnswer": 0}
        ]"#;
        let store = parse_questions(text).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.skipped(), 4);
        assert_eq!(store.questions()[0].question, "ok");
    }

    #[test]
    fn negative_weeks_load_and_sort_first() {
        let text = r#"[
            {"week": 2, "question": "later", "options": ["a", "b"], "correctAnswer": 0},
            {"week": -1, "question": "warm-up", "options": ["a", "b"], "correctAnswer": 1},
            {"week": 0, "question": "intro", "options": ["a", "b"], "correctAnswer": 0}
        ]"#;
        let store = parse_questions(text).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.skipped(), 0);
        assert_eq!(store.weeks(), vec![-1, 0, 2]);
        assert_eq!(store.in_week(-1)[0].question, "warm-up");
    }

    #[test]
    fn parse_rejects_non_array_document() {
        let err = parse_questions(r#"{"questions": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::NotAnArray));
    }

    #[test]
    fn parse_rejects_broken_json() {
        let err = parse_questions("[{").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn empty_document_gives_empty_store() {
        let store = parse_questions("[]").unwrap();
        assert!(store.is_empty());
        assert!(store.weeks().is_empty());
    }
}
