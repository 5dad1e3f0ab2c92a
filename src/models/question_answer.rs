use super::{answer::Answer, question::Question, quiz_attempt::QuizAttempt};
use serde::{Deserialize, Serialize};

/// Records which answer was picked for a question within an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub attempt_id: u64,
    pub question_id: u64,
    pub answer_id: u64,
}

impl QuestionAnswer {
    pub fn new(attempt_id: u64, question_id: u64, answer_id: u64) -> Self {
        Self {
            attempt_id,
            question_id,
            answer_id,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResolvedQuestionAnswer<'a> {
    pub selection: &'a QuestionAnswer,
    pub attempt: &'a QuizAttempt,
    pub question: &'a Question,
    pub answer: &'a Answer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::from_rfc3339;

    #[test]
    fn ids_are_set_independently() {
        let mut selection = QuestionAnswer::new(1, 2, 3);
        assert_eq!(
            (selection.attempt_id, selection.question_id, selection.answer_id),
            (1, 2, 3)
        );

        selection.question_id = 20;
        assert_eq!(
            (selection.attempt_id, selection.question_id, selection.answer_id),
            (1, 20, 3)
        );
    }

    #[test]
    fn resolved_references_do_not_interfere() {
        let selection = QuestionAnswer::new(1, 2, 3);
        let attempt = QuizAttempt::start(1, 9, from_rfc3339("2024-01-01T00:00:00Z").unwrap());
        let question = Question::new(2, "Pick one");
        let answer = Answer::new(3, 2, "This one");
        let other_answer = Answer::new(4, 2, "That one");

        let mut resolved = ResolvedQuestionAnswer {
            selection: &selection,
            attempt: &attempt,
            question: &question,
            answer: &answer,
        };
        resolved.answer = &other_answer;

        assert_eq!(resolved.attempt.id, 1);
        assert_eq!(resolved.question.id, 2);
        assert_eq!(resolved.answer.id, 4);
        assert_eq!(resolved.selection.answer_id, 3);
    }
}
