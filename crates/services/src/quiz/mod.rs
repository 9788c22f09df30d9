mod controller;
mod state;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use controller::QuizController;
pub use state::{Question, QuizState};
