use crate::catalog::{Catalog, Directory};
use crate::dto::attempt_dto::{AttemptSummary, StartAttemptResponse};
use crate::dto::quiz_dto::playable_questions;
use crate::error::{Error, Result};
use crate::models::question_answer::QuestionAnswer;
use crate::models::quiz_attempt::QuizAttempt;
use crate::utils::time::Clock;
use tracing::{debug, info};

pub struct AttemptService<'a, C: Clock> {
    catalog: &'a mut Catalog,
    clock: C,
}

impl<'a, C: Clock> AttemptService<'a, C> {
    pub fn new(catalog: &'a mut Catalog, clock: C) -> Self {
        Self { catalog, clock }
    }

    pub fn catalog(&self) -> &Catalog {
        &*self.catalog
    }

    pub fn start_attempt(&mut self, quiz_id: u64) -> Result<StartAttemptResponse> {
        let questions = match self.catalog.quiz(quiz_id) {
            Some(quiz) => playable_questions(quiz),
            None => return Err(Error::not_found("quiz", quiz_id)),
        };

        let attempt_id = self.catalog.next_attempt_id()?;
        let start_time = self.clock.now();
        self.catalog
            .insert_attempt(QuizAttempt::start(attempt_id, quiz_id, start_time));

        info!(attempt_id, quiz_id, "quiz attempt started");

        Ok(StartAttemptResponse {
            attempt_id,
            quiz_id,
            start_time,
            questions,
        })
    }

    /// Records the answer picked for a question. Answering the same question
    /// again replaces the earlier pick.
    pub fn record_answer(
        &mut self,
        attempt_id: u64,
        question_id: u64,
        answer_id: u64,
    ) -> Result<QuestionAnswer> {
        let attempt = self
            .catalog
            .attempt(attempt_id)
            .ok_or_else(|| Error::not_found("attempt", attempt_id))?;
        if attempt.is_finished() {
            return Err(Error::Conflict(format!(
                "attempt {} has already been submitted",
                attempt_id
            )));
        }

        let quiz = self
            .catalog
            .quiz(attempt.quiz_id)
            .ok_or_else(|| Error::not_found("quiz", attempt.quiz_id))?;
        let question = quiz.question(question_id).ok_or_else(|| {
            Error::NotFound(format!(
                "question {} is not part of quiz {}",
                question_id, quiz.id
            ))
        })?;
        if question.answer(answer_id).is_none() {
            return Err(Error::NotFound(format!(
                "answer {} is not an option of question {}",
                answer_id, question_id
            )));
        }

        let selection = QuestionAnswer::new(attempt_id, question_id, answer_id);
        if let Some(previous) = self.catalog.record_selection(selection) {
            debug!(attempt_id, question_id, previous = previous.answer_id, answer_id, "answer replaced");
        }

        Ok(selection)
    }

    pub fn finish_attempt(&mut self, attempt_id: u64) -> Result<AttemptSummary> {
        let attempt = self
            .catalog
            .attempt_mut(attempt_id)
            .ok_or_else(|| Error::not_found("attempt", attempt_id))?;
        attempt.finish(self.clock.now())?;

        info!(attempt_id, "quiz attempt finished");
        self.summarize(attempt_id)
    }

    pub fn summarize(&self, attempt_id: u64) -> Result<AttemptSummary> {
        summarize(&*self.catalog, attempt_id)
    }
}

pub fn summarize(catalog: &Catalog, attempt_id: u64) -> Result<AttemptSummary> {
    let attempt = catalog
        .attempt(attempt_id)
        .ok_or_else(|| Error::not_found("attempt", attempt_id))?;
    let resolved = crate::catalog::resolve_attempt(catalog, attempt)?;

    Ok(AttemptSummary {
        attempt_id,
        quiz_id: resolved.quiz.id,
        quiz_name: resolved.quiz.name.clone(),
        start_time: attempt.start_time,
        end_time: attempt.end_time,
        total_questions: resolved.quiz.questions.len(),
        answered_questions: catalog.selections_for_attempt(attempt_id).count(),
        finished: attempt.is_finished(),
    })
}
