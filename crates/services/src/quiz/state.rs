use cipher_core::model::{Letter, QuizSummary};

/// Which screen a quiz is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizState {
    /// Welcome screen; no letters loaded.
    #[default]
    Idle,
    /// A letter is waiting for an answer.
    InProgress,
    /// An answer was just judged and its feedback is on display.
    AwaitingNext,
    /// Every letter has been answered.
    Complete,
}

impl QuizState {
    /// True while a letter could still be pending.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, QuizState::InProgress | QuizState::AwaitingNext)
    }
}

/// What the next screen should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Letter(Letter),
    Complete(QuizSummary),
}
