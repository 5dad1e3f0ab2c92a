use serde::{Deserialize, Serialize};

/// A candidate response option belonging to a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: u64,
    pub question_id: u64,
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub position: u32,
}

impl Answer {
    pub fn new(id: u64, question_id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            question_id,
            text: text.into(),
            is_correct: false,
            position: 0,
        }
    }

    pub fn correct(mut self, is_correct: bool) -> Self {
        self.is_correct = is_correct;
        self
    }

    pub fn at(mut self, position: u32) -> Self {
        self.position = position;
        self
    }
}
