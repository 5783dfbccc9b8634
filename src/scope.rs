use crate::data::QuestionStore;
use crate::model::{Question, Scope};
use rand::Rng;

/// Builds the ordered list of questions a session will go through.
///
/// The store is never reordered; `Random` works on a copy.
pub fn working_list<R: Rng + ?Sized>(store: &QuestionStore, scope: Scope, rng: &mut R) -> Vec<Question> {
    match scope {
        Scope::Week(week) => store.in_week(week),
        Scope::All => store.questions().to_vec(),
        Scope::Random => shuffle(store.questions(), rng),
    }
}

/// Fisher-Yates shuffle into a new vector, the same walk as
/// `rand::seq::SliceRandom::shuffle` performs in place.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
