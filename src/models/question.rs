use super::answer::Answer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            answers: Vec::new(),
        }
    }

    pub fn with_answers(mut self, answers: impl IntoIterator<Item = Answer>) -> Self {
        self.answers.extend(answers);
        self
    }

    pub fn answer(&self, answer_id: u64) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == answer_id)
    }
}
