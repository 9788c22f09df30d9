use std::fmt;
use thiserror::Error;

use crate::model::{Letter, QuizSummary};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionStateError {
    #[error("quiz has no letters")]
    Empty,

    #[error("every letter in the quiz has already been answered")]
    Exhausted,
}

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub score: usize,
}

/// One attempt at the quiz: a fixed letter sequence, a cursor, and a score.
///
/// Keeps `score <= position <= letters.len()`. The sequence is set once at
/// construction; only [`QuizSession::record`] moves the cursor.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    letters: Vec<Letter>,
    position: usize,
    score: usize,
}

impl QuizSession {
    /// Start a session over `letters`, in the order given.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::Empty` if no letters are provided.
    pub fn new(letters: Vec<Letter>) -> Result<Self, SessionStateError> {
        if letters.is_empty() {
            return Err(SessionStateError::Empty);
        }
        Ok(Self {
            letters,
            position: 0,
            score: 0,
        })
    }

    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letter waiting for an answer, if any.
    #[must_use]
    pub fn current(&self) -> Option<Letter> {
        self.letters.get(self.position).copied()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.letters.len()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.letters.len(),
            answered: self.position,
            remaining: self.letters.len().saturating_sub(self.position),
            score: self.score,
        }
    }

    #[must_use]
    pub fn summary(&self) -> QuizSummary {
        QuizSummary::new(self.score, self.letters.len())
    }

    /// Record the outcome for the current letter and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::Exhausted` if no letter is pending.
    pub fn record(&mut self, correct: bool) -> Result<(), SessionStateError> {
        if self.is_exhausted() {
            return Err(SessionStateError::Exhausted);
        }
        if correct {
            self.score += 1;
        }
        self.position += 1;
        Ok(())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("letters_len", &self.letters.len())
            .field("position", &self.position)
            .field("score", &self.score)
            .finish()
    }
}
