pub mod memory;

pub use memory::Catalog;

use crate::error::{Error, Result};
use crate::models::{
    answer::Answer,
    question::Question,
    question_answer::{QuestionAnswer, ResolvedQuestionAnswer},
    quiz::Quiz,
    quiz_attempt::{QuizAttempt, ResolvedAttempt},
};

/// Read-only lookup of records by id. Records hold foreign-key ids only;
/// anything that needs the related record goes through a directory.
pub trait Directory {
    fn quiz(&self, id: u64) -> Option<&Quiz>;
    fn attempt(&self, id: u64) -> Option<&QuizAttempt>;
    fn question(&self, id: u64) -> Option<&Question>;
    fn answer(&self, id: u64) -> Option<&Answer>;
}

pub fn resolve_attempt<'a, D>(dir: &'a D, attempt: &'a QuizAttempt) -> Result<ResolvedAttempt<'a>>
where
    D: Directory + ?Sized,
{
    let quiz = dir
        .quiz(attempt.quiz_id)
        .ok_or_else(|| Error::not_found("quiz", attempt.quiz_id))?;
    Ok(ResolvedAttempt { attempt, quiz })
}

/// Resolves a selection through its attempt, so the question comes from the
/// attempt's quiz and the answer from that question even when ids repeat
/// elsewhere in the directory.
pub fn resolve_question_answer<'a, D>(
    dir: &'a D,
    selection: &'a QuestionAnswer,
) -> Result<ResolvedQuestionAnswer<'a>>
where
    D: Directory + ?Sized,
{
    let attempt = dir
        .attempt(selection.attempt_id)
        .ok_or_else(|| Error::not_found("attempt", selection.attempt_id))?;
    let quiz = dir
        .quiz(attempt.quiz_id)
        .ok_or_else(|| Error::not_found("quiz", attempt.quiz_id))?;
    let question = quiz.question(selection.question_id).ok_or_else(|| {
        Error::NotFound(format!(
            "question {} is not part of quiz {}",
            selection.question_id, quiz.id
        ))
    })?;
    let answer = question.answer(selection.answer_id).ok_or_else(|| {
        Error::NotFound(format!(
            "answer {} is not an option of question {}",
            selection.answer_id, question.id
        ))
    })?;

    Ok(ResolvedQuestionAnswer {
        selection,
        attempt,
        question,
        answer,
    })
}
