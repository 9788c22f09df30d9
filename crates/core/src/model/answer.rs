use crate::model::Letter;

/// Outcome of checking one answer against the cipher table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    /// Always populated, even when the answer was right, so callers can show it.
    pub correct_answer: Letter,
}

/// Trims surrounding whitespace and uppercases a raw answer.
#[must_use]
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_uppercase()
}
