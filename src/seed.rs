use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{
    answer::Answer, question::Question, question_answer::QuestionAnswer, quiz::Quiz,
    quiz_attempt::QuizAttempt,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Serializable contents of a catalog: the layout of seed files and of the
/// snapshot printed by the `quizzy` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
    #[serde(default)]
    pub attempts: Vec<QuizAttempt>,
    #[serde(default)]
    pub selections: Vec<QuestionAnswer>,
}

impl CatalogSeed {
    pub fn snapshot(catalog: &Catalog) -> Self {
        Self {
            quizzes: catalog.quizzes().cloned().collect(),
            attempts: catalog.attempts().cloned().collect(),
            selections: catalog.selections().copied().collect(),
        }
    }

    pub fn into_catalog(self) -> Catalog {
        let mut catalog = Catalog::new();
        for quiz in self.quizzes {
            catalog.insert_quiz(quiz);
        }
        for attempt in self.attempts {
            catalog.insert_attempt(attempt);
        }
        for selection in self.selections {
            catalog.record_selection(selection);
        }
        catalog
    }
}

pub fn load_seed(path: &Path) -> Result<Catalog> {
    let raw = std::fs::read_to_string(path)?;
    let seed: CatalogSeed = serde_json::from_str(&raw)?;

    info!(
        path = %path.display(),
        quizzes = seed.quizzes.len(),
        attempts = seed.attempts.len(),
        "seed file loaded"
    );
    Ok(seed.into_catalog())
}

/// Built-in catalog used when no seed file is configured.
pub fn sample_catalog() -> Catalog {
    let general = Quiz::new(1, "General Knowledge").with_questions(vec![
        Question::new(1, "What is the capital of France?").with_answers(vec![
            Answer::new(1, 1, "Berlin").at(1),
            Answer::new(2, 1, "Paris").correct(true).at(2),
            Answer::new(3, 1, "Madrid").at(3),
        ]),
        Question::new(2, "How many continents are there?").with_answers(vec![
            Answer::new(4, 2, "Five").at(1),
            Answer::new(5, 2, "Seven").correct(true).at(2),
        ]),
    ]);

    let rust = Quiz::new(2, "Rust Basics").with_questions(vec![
        Question::new(3, "Which keyword declares an immutable binding?").with_answers(vec![
            Answer::new(6, 3, "let").correct(true).at(1),
            Answer::new(7, 3, "mut").at(2),
            Answer::new(8, 3, "static").at(3),
        ]),
        Question::new(4, "Can a value have two mutable borrows at once?").with_answers(vec![
            Answer::new(9, 4, "Yes").at(1),
            Answer::new(10, 4, "No").correct(true).at(2),
        ]),
        Question::new(5, "Which trait enables `{:?}` formatting?").with_answers(vec![
            Answer::new(11, 5, "Display").at(1),
            Answer::new(12, 5, "Debug").correct(true).at(2),
        ]),
    ]);

    let mut catalog = Catalog::new();
    catalog.insert_quiz(general);
    catalog.insert_quiz(rust);
    catalog
}
