use super::Directory;
use crate::error::{Error, Result};
use crate::models::{
    answer::Answer, question::Question, question_answer::QuestionAnswer, quiz::Quiz,
    quiz_attempt::QuizAttempt,
};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// In-memory index of quizzes, attempts and recorded selections.
///
/// Quizzes own their questions and answers, so the catalog keeps reverse
/// indexes from question and answer ids back to their owners. Ids are
/// expected to be unique per kind across the whole catalog. When they are
/// not, every owner stays indexed and lookups by bare id return the most
/// recently indexed one; removing it falls back to the next.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    quizzes: BTreeMap<u64, Quiz>,
    attempts: BTreeMap<u64, QuizAttempt>,
    selections: BTreeMap<(u64, u64), QuestionAnswer>,
    index: OwnerIndex,
}

/// Owners per id, oldest first.
#[derive(Debug, Clone, Default)]
struct OwnerIndex {
    questions: HashMap<u64, Vec<u64>>,
    answers: HashMap<u64, Vec<(u64, u64)>>,
}

impl OwnerIndex {
    fn add_question(&mut self, quiz_id: u64, question: &Question) {
        let owners = self.questions.entry(question.id).or_default();
        owners.retain(|&q| q != quiz_id);
        if let Some(&other) = owners.last() {
            warn!(question_id = question.id, other_quiz = other, quiz_id, "question id shared with another quiz");
        }
        owners.push(quiz_id);

        for answer in &question.answers {
            if answer.question_id != question.id {
                debug!(answer_id = answer.id, question_id = question.id, "answer carries a different question_id than its parent");
            }
            let owner = (quiz_id, question.id);
            let owners = self.answers.entry(answer.id).or_default();
            owners.retain(|&o| o != owner);
            if let Some(&(other_quiz, other_question)) = owners.last() {
                warn!(
                    answer_id = answer.id,
                    other_quiz,
                    other_question,
                    quiz_id,
                    question_id = question.id,
                    "answer id shared with another question"
                );
            }
            owners.push(owner);
        }
    }

    fn remove_question(&mut self, quiz_id: u64, question: &Question) {
        remove_owner(&mut self.questions, question.id, &quiz_id);
        for answer in &question.answers {
            remove_owner(&mut self.answers, answer.id, &(quiz_id, question.id));
        }
    }

    fn quiz_of(&self, question_id: u64) -> Option<u64> {
        self.questions.get(&question_id)?.last().copied()
    }

    fn question_of(&self, answer_id: u64) -> Option<(u64, u64)> {
        self.answers.get(&answer_id)?.last().copied()
    }
}

fn remove_owner<T: PartialEq>(index: &mut HashMap<u64, Vec<T>>, id: u64, owner: &T) {
    if let Some(owners) = index.get_mut(&id) {
        owners.retain(|o| o != owner);
        if owners.is_empty() {
            index.remove(&id);
        }
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a quiz by id, returning the replaced quiz.
    pub fn insert_quiz(&mut self, quiz: Quiz) -> Option<Quiz> {
        let previous = self.remove_quiz(quiz.id);

        for question in &quiz.questions {
            self.index.add_question(quiz.id, question);
        }

        debug!(quiz_id = quiz.id, questions = quiz.questions.len(), "quiz indexed");
        self.quizzes.insert(quiz.id, quiz);
        previous
    }

    /// Removes a quiz and its questions from the index. Attempts and
    /// selections that point at it are kept and stop resolving.
    pub fn remove_quiz(&mut self, quiz_id: u64) -> Option<Quiz> {
        let quiz = self.quizzes.remove(&quiz_id)?;
        for question in &quiz.questions {
            self.index.remove_question(quiz_id, question);
        }
        Some(quiz)
    }

    pub fn questions_for_quiz(&self, quiz_id: u64) -> Result<&[Question]> {
        self.quizzes
            .get(&quiz_id)
            .map(|q| q.questions.as_slice())
            .ok_or_else(|| Error::not_found("quiz", quiz_id))
    }

    pub fn add_question(&mut self, quiz_id: u64, question: Question) -> Result<()> {
        let quiz = self
            .quizzes
            .get_mut(&quiz_id)
            .ok_or_else(|| Error::not_found("quiz", quiz_id))?;
        if quiz.question(question.id).is_some() {
            return Err(Error::Conflict(format!(
                "quiz {} already has question {}",
                quiz_id, question.id
            )));
        }

        self.index.add_question(quiz_id, &question);
        debug!(quiz_id, question_id = question.id, "question added");
        quiz.questions.push(question);
        Ok(())
    }

    /// Replaces the question with the same id in the quiz, returning the old one.
    pub fn update_question(&mut self, quiz_id: u64, question: Question) -> Result<Question> {
        let quiz = self
            .quizzes
            .get_mut(&quiz_id)
            .ok_or_else(|| Error::not_found("quiz", quiz_id))?;
        let slot = quiz
            .questions
            .iter_mut()
            .find(|q| q.id == question.id)
            .ok_or_else(|| {
                Error::NotFound(format!("question {} is not part of quiz {}", question.id, quiz_id))
            })?;

        self.index.remove_question(quiz_id, slot);
        self.index.add_question(quiz_id, &question);
        Ok(std::mem::replace(slot, question))
    }

    pub fn remove_question(&mut self, quiz_id: u64, question_id: u64) -> Result<Question> {
        let quiz = self
            .quizzes
            .get_mut(&quiz_id)
            .ok_or_else(|| Error::not_found("quiz", quiz_id))?;
        let pos = quiz
            .questions
            .iter()
            .position(|q| q.id == question_id)
            .ok_or_else(|| {
                Error::NotFound(format!("question {} is not part of quiz {}", question_id, quiz_id))
            })?;

        let removed = quiz.questions.remove(pos);
        self.index.remove_question(quiz_id, &removed);
        debug!(quiz_id, question_id, "question removed");
        Ok(removed)
    }

    pub fn insert_attempt(&mut self, attempt: QuizAttempt) -> Option<QuizAttempt> {
        self.attempts.insert(attempt.id, attempt)
    }

    pub(crate) fn attempt_mut(&mut self, id: u64) -> Option<&mut QuizAttempt> {
        self.attempts.get_mut(&id)
    }

    /// Stores a selection. A selection for the same attempt and question
    /// replaces the earlier one, which is returned.
    pub fn record_selection(&mut self, selection: QuestionAnswer) -> Option<QuestionAnswer> {
        self.selections
            .insert((selection.attempt_id, selection.question_id), selection)
    }

    pub fn quizzes(&self) -> impl Iterator<Item = &Quiz> {
        self.quizzes.values()
    }

    pub fn attempts(&self) -> impl Iterator<Item = &QuizAttempt> {
        self.attempts.values()
    }

    pub fn selections(&self) -> impl Iterator<Item = &QuestionAnswer> {
        self.selections.values()
    }

    pub fn attempts_for_quiz(&self, quiz_id: u64) -> impl Iterator<Item = &QuizAttempt> {
        self.attempts.values().filter(move |a| a.quiz_id == quiz_id)
    }

    pub fn selections_for_attempt(&self, attempt_id: u64) -> impl Iterator<Item = &QuestionAnswer> {
        self.selections
            .range((attempt_id, u64::MIN)..=(attempt_id, u64::MAX))
            .map(|(_, s)| s)
    }

    pub fn quiz_for_question(&self, question_id: u64) -> Option<&Quiz> {
        self.index
            .quiz_of(question_id)
            .and_then(|quiz_id| self.quizzes.get(&quiz_id))
    }

    /// One past the highest attempt id, starting at 1.
    pub fn next_attempt_id(&self) -> Result<u64> {
        match self.attempts.keys().next_back() {
            None => Ok(1),
            Some(id) => id
                .checked_add(1)
                .ok_or_else(|| Error::Conflict("attempt ids exhausted".to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

impl Directory for Catalog {
    fn quiz(&self, id: u64) -> Option<&Quiz> {
        self.quizzes.get(&id)
    }

    fn attempt(&self, id: u64) -> Option<&QuizAttempt> {
        self.attempts.get(&id)
    }

    fn question(&self, id: u64) -> Option<&Question> {
        self.quiz_for_question(id)?.question(id)
    }

    fn answer(&self, id: u64) -> Option<&Answer> {
        let (quiz_id, question_id) = self.index.question_of(id)?;
        self.quizzes.get(&quiz_id)?.question(question_id)?.answer(id)
    }
}
