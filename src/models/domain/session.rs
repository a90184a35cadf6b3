use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz::Quiz;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuizPhase {
    NotStarted,
    Timing,
    Submitted,
}

/// Per-session quiz lifecycle state. The presentation layer re-runs the whole
/// flow on every interaction, so this is rebuilt from the session store each
/// time instead of living in call-stack state.
///
/// The only transitions are NotStarted → Timing → Submitted; installing a new
/// quiz resets everything, from any phase.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizSession {
    pub quiz: Option<Quiz>,
    /// Question id → selected option (1-based). Overwritten on re-selection.
    pub user_answers: HashMap<u32, u8>,
    pub phase: QuizPhase,
    pub started_at: Option<DateTime<Utc>>,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self {
            quiz: None,
            user_answers: HashMap::new(),
            phase: QuizPhase::NotStarted,
            started_at: None,
            submitted_at: None,
        }
    }
}

/// Error cases for illegal transitions; mapped to `AppError` at the service
/// boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionTransitionError {
    NoQuiz,
    AlreadyStarted,
    NotTiming,
    UnknownQuestion(u32),
    OptionOutOfRange(u8),
}

impl std::fmt::Display for SessionTransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionTransitionError::NoQuiz => write!(f, "no quiz has been generated"),
            SessionTransitionError::AlreadyStarted => {
                write!(f, "the quiz has already been started")
            }
            SessionTransitionError::NotTiming => {
                write!(f, "the quiz is not currently in progress")
            }
            SessionTransitionError::UnknownQuestion(id) => {
                write!(f, "question {} does not exist in this quiz", id)
            }
            SessionTransitionError::OptionOutOfRange(option) => {
                write!(f, "option {} is out of range", option)
            }
        }
    }
}

impl From<SessionTransitionError> for crate::errors::AppError {
    fn from(err: SessionTransitionError) -> Self {
        use crate::errors::AppError;

        match err {
            SessionTransitionError::UnknownQuestion(_) => AppError::NotFound(err.to_string()),
            SessionTransitionError::OptionOutOfRange(_) => {
                AppError::ValidationError(err.to_string())
            }
            _ => AppError::InvalidState(err.to_string()),
        }
    }
}

impl QuizSession {
    /// Replace the quiz and unconditionally drop all prior progress. Answers,
    /// phase and timestamps never leak from one quiz to the next.
    pub fn install_quiz(&mut self, quiz: Quiz) {
        self.quiz = Some(quiz);
        self.user_answers.clear();
        self.phase = QuizPhase::NotStarted;
        self.started_at = None;
        self.submitted_at = None;
    }

    /// Begin the timed run. Valid only once per quiz, before any submit.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), SessionTransitionError> {
        if self.quiz.is_none() {
            return Err(SessionTransitionError::NoQuiz);
        }
        if self.phase != QuizPhase::NotStarted {
            return Err(SessionTransitionError::AlreadyStarted);
        }

        self.phase = QuizPhase::Timing;
        self.started_at = Some(now);
        Ok(())
    }

    /// Record an answer while timing. Re-selecting overwrites the previous
    /// choice for that question.
    pub fn select_answer(
        &mut self,
        question_id: u32,
        option: u8,
    ) -> Result<(), SessionTransitionError> {
        if self.phase != QuizPhase::Timing {
            return Err(SessionTransitionError::NotTiming);
        }

        let quiz = self.quiz.as_ref().ok_or(SessionTransitionError::NoQuiz)?;
        let question = quiz
            .question_by_id(question_id)
            .ok_or(SessionTransitionError::UnknownQuestion(question_id))?;
        if option < 1 || option as usize > question.options.len() {
            return Err(SessionTransitionError::OptionOutOfRange(option));
        }

        self.user_answers.insert(question_id, option);
        Ok(())
    }

    /// Stop the clock and move to the terminal Submitted phase. Unanswered
    /// questions are allowed and will grade as incorrect.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<(), SessionTransitionError> {
        if self.phase != QuizPhase::Timing {
            return Err(SessionTransitionError::NotTiming);
        }

        self.phase = QuizPhase::Submitted;
        self.submitted_at = Some(now);
        Ok(())
    }
}
