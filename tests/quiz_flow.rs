use rand::SeedableRng;
use rand::rngs::StdRng;
use week_quiz::data::parse_questions;
use week_quiz::{AppState, Command, QuestionStore, QuizApp, Scope, SessionPhase};

const FIVE_QUESTIONS: &str = r#"[
    {"week": 1, "question": "W1 first",  "options": ["a", "b"], "correctAnswer": 0},
    {"week": 1, "question": "W1 second", "options": ["a", "b", "c"], "correctAnswer": 2},
    {"week": 2, "question": "W2 first",  "options": ["a", "b"], "correctAnswer": 1},
    {"week": 2, "question": "W2 second", "options": ["a", "b"], "correctAnswer": 0},
    {"week": 2, "question": "W2 third",  "options": ["a", "b"], "correctAnswer": 1}
]"#;

fn app() -> QuizApp {
    QuizApp::with_store(parse_questions(FIVE_QUESTIONS).unwrap())
}

fn answer_current(app: &mut QuizApp, correctly: bool) {
    let question = app.session().unwrap().current_question();
    let pick = if correctly {
        question.correct_answer
    } else {
        (question.correct_answer + 1) % question.options.len()
    };
    app.dispatch(Command::SelectOption(pick));
    app.dispatch(Command::Advance);
}

#[test]
fn single_week_run_all_correct() {
    let mut app = app();
    app.dispatch(Command::ChooseScope(Scope::Week(1)));

    let texts: Vec<_> = app
        .session()
        .unwrap()
        .working_list()
        .iter()
        .map(|q| q.question.clone())
        .collect();
    assert_eq!(texts, vec!["W1 first", "W1 second"]);

    answer_current(&mut app, true);
    answer_current(&mut app, true);

    let session = app.session().unwrap();
    assert_eq!(session.phase(), SessionPhase::Finished);
    assert_eq!(session.score(), 2);
    assert_eq!(session.percentage(), 100);

    let results = app.results_view().unwrap();
    assert_eq!(results.rows.len(), 2);
    assert!(results.rows.iter().all(|r| r.is_correct && r.correction.is_none()));
}

#[test]
fn all_in_order_with_one_mistake() {
    let store = parse_questions(FIVE_QUESTIONS).unwrap();
    let three = QuestionStore::new(store.questions()[..3].to_vec());
    let mut app = QuizApp::with_store(three);
    app.dispatch(Command::ChooseScope(Scope::All));

    answer_current(&mut app, true);
    answer_current(&mut app, false);
    answer_current(&mut app, true);

    let session = app.session().unwrap();
    assert!(session.is_finished());
    assert_eq!(session.score(), 2);
    assert_eq!(session.answer_log().len(), 3);
    assert_eq!(session.percentage(), 67);

    let results = app.results_view().unwrap();
    assert_eq!(results.percentage_label(), "Score: 67%");
    assert!(results.rows[1].correction.is_some());
}

#[test]
fn repeated_selection_never_double_scores() {
    let mut app = app();
    app.dispatch(Command::ChooseScope(Scope::All));
    for _ in 0..5 {
        app.dispatch(Command::SelectOption(0));
    }
    let session = app.session().unwrap();
    assert_eq!(session.score(), 1);
    assert_eq!(session.answer_log().len(), 1);
}

#[test]
fn random_run_covers_every_question_once() {
    let mut app = app();
    let mut rng = StdRng::seed_from_u64(99);
    app.dispatch_with_rng(Command::ChooseScope(Scope::Random), &mut rng);

    let mut texts: Vec<_> = app
        .session()
        .unwrap()
        .working_list()
        .iter()
        .map(|q| q.question.clone())
        .collect();
    texts.sort();
    let mut expected: Vec<_> = app.store.questions().iter().map(|q| q.question.clone()).collect();
    expected.sort();
    assert_eq!(texts, expected);
}

#[test]
fn advance_past_the_end_stays_finished() {
    let mut app = app();
    app.dispatch(Command::ChooseScope(Scope::Week(1)));
    answer_current(&mut app, false);
    answer_current(&mut app, false);
    app.dispatch(Command::Advance);
    app.dispatch(Command::SelectOption(0));

    let session = app.session().unwrap();
    assert!(session.is_finished());
    assert_eq!(session.current_index(), 1);
    assert_eq!(session.answer_log().len(), 2);
    assert_eq!(session.percentage(), 0);
}

#[test]
fn reset_after_finish_leaves_nothing_behind() {
    let mut app = app();
    app.dispatch(Command::ChooseScope(Scope::Week(2)));
    for _ in 0..3 {
        answer_current(&mut app, true);
    }
    assert!(app.session().unwrap().is_finished());

    app.dispatch(Command::Reset);
    assert!(matches!(app.state, AppState::ScopeSelection));
    assert!(app.session().is_none());
    assert!(app.question_view().is_none());
    assert!(app.results_view().is_none());

    app.dispatch(Command::ChooseScope(Scope::Week(1)));
    let session = app.session().unwrap();
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.score(), 0);
    assert!(session.answer_log().is_empty());
}
