use super::question::Question;
use serde::{Deserialize, Serialize};

/// A named collection of questions. The quiz owns its questions; attempts
/// and selections refer back to it by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            questions: Vec::new(),
        }
    }

    pub fn with_questions(mut self, questions: impl IntoIterator<Item = Question>) -> Self {
        self.questions.extend(questions);
        self
    }

    pub fn question(&self, question_id: u64) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }
}
