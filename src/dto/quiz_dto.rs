use crate::models::{answer::Answer, question::Question, quiz::Quiz};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: u64,
    pub name: String,
    pub total_questions: usize,
}

impl From<&Quiz> for QuizSummary {
    fn from(quiz: &Quiz) -> Self {
        Self {
            id: quiz.id,
            name: quiz.name.clone(),
            total_questions: quiz.questions.len(),
        }
    }
}

/// An answer option as shown to someone taking the quiz. Correctness is
/// left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayableAnswer {
    pub id: u64,
    pub text: String,
    pub position: u32,
}

impl From<&Answer> for PlayableAnswer {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id,
            text: answer.text.clone(),
            position: answer.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayableQuestion {
    pub id: u64,
    pub text: String,
    pub answers: Vec<PlayableAnswer>,
}

impl From<&Question> for PlayableQuestion {
    fn from(question: &Question) -> Self {
        let mut answers: Vec<PlayableAnswer> =
            question.answers.iter().map(PlayableAnswer::from).collect();
        answers.sort_by_key(|a| (a.position, a.id));

        Self {
            id: question.id,
            text: question.text.clone(),
            answers,
        }
    }
}

pub fn playable_questions(quiz: &Quiz) -> Vec<PlayableQuestion> {
    quiz.questions.iter().map(PlayableQuestion::from).collect()
}
