//! JSON bodies exchanged with an answer service over HTTP.

use cipher_core::model::{AnswerResult, Letter, QuizMode};
use serde::{Deserialize, Serialize};

pub const START_QUIZ_PATH: &str = "/start_quiz";
pub const CHECK_ANSWER_PATH: &str = "/check_answer";

/// Optional body of `POST /start_quiz`; a missing body means the server's default mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartQuizRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<QuizMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartQuizResponse {
    pub letters: Vec<Letter>,
    #[serde(default)]
    pub success: bool,
}

/// Kept as raw strings so a server can answer bad input with its own message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckAnswerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<QuizMode>,
}

impl CheckAnswerRequest {
    /// `{}`: nothing to check at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letter.is_none() && self.answer.is_none() && self.mode.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckAnswerResponse {
    pub correct: bool,
    pub correct_answer: Letter,
    /// English side of the pair that was checked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_letter: Option<Letter>,
    /// The letter that was asked, echoed back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_letter: Option<Letter>,
}

impl CheckAnswerResponse {
    #[must_use]
    pub fn from_result(mode: QuizMode, letter: Letter, result: AnswerResult) -> Self {
        let english_letter = match mode {
            QuizMode::EnglishToAlBhed => letter,
            QuizMode::AlBhedToEnglish => result.correct_answer,
        };
        Self {
            correct: result.correct,
            correct_answer: result.correct_answer,
            english_letter: Some(english_letter),
            question_letter: Some(letter),
        }
    }

    /// The asked letter as echoed by the server, if it says.
    #[must_use]
    pub fn echoed_letter(&self, mode: QuizMode) -> Option<Letter> {
        match mode {
            QuizMode::EnglishToAlBhed => self.question_letter.or(self.english_letter),
            QuizMode::AlBhedToEnglish => self.question_letter,
        }
    }
}

impl From<CheckAnswerResponse> for AnswerResult {
    fn from(value: CheckAnswerResponse) -> Self {
        Self {
            correct: value.correct,
            correct_answer: value.correct_answer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
