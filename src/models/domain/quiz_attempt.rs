use serde::{Deserialize, Serialize};

use crate::models::domain::lesson::QuizQuestion;

/// Transient per-session state of a learner working through one quiz.
/// Never persisted; leaving the lesson discards the attempt, and a fresh
/// attempt starts from `QuizAttempt::start`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizAttempt {
    selections: Vec<Option<u32>>, // parallel to the quiz's questions
    state: AttemptState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum AttemptState {
    Unanswered,
    Answered,
    Submitted,
}

/// Computed exactly once, at the Submitted transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScore {
    pub score: usize,
    pub total: usize,
    pub all_correct: bool,
}

impl QuizAttempt {
    pub fn start(question_count: usize) -> Self {
        QuizAttempt {
            selections: vec![None; question_count],
            state: AttemptState::Unanswered,
        }
    }

    pub fn state(&self) -> AttemptState {
        self.state
    }

    pub fn selections(&self) -> &[Option<u32>] {
        &self.selections
    }

    pub fn all_answered(&self) -> bool {
        !self.selections.is_empty() && self.selections.iter().all(|s| s.is_some())
    }

    /// Record (or overwrite) the selection for one question. Rejected as a
    /// no-op once the attempt is Submitted, or if the question index is out
    /// of range.
    pub fn select(mut self, question_index: usize, option_index: u32) -> Self {
        if self.state == AttemptState::Submitted || question_index >= self.selections.len() {
            return self;
        }

        self.selections[question_index] = Some(option_index);
        self.state = AttemptState::Answered;
        self
    }

    /// Global submit. Rejected as a no-op (score `None`) unless every question
    /// has a selection and the attempt is not already Submitted, so the score
    /// is produced at most once per attempt.
    pub fn submit(mut self, questions: &[QuizQuestion]) -> (Self, Option<QuizScore>) {
        if self.state == AttemptState::Submitted || !self.all_answered() {
            return (self, None);
        }

        let total = questions.len();
        let score = questions
            .iter()
            .zip(self.selections.iter())
            .filter(|(question, selected)| **selected == Some(question.correct_index))
            .count();

        self.state = AttemptState::Submitted;
        (
            self,
            Some(QuizScore {
                score,
                total,
                all_correct: score == total,
            }),
        )
    }
}
