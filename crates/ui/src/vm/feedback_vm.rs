use cipher_core::model::AnswerResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub correct_answer: char,
    pub message: String,
}

impl From<AnswerResult> for FeedbackVm {
    fn from(result: AnswerResult) -> Self {
        let correct_answer = result.correct_answer.as_char();
        let message = if result.correct {
            "Correct! Well done.".to_string()
        } else {
            format!("Oops! The correct answer was '{correct_answer}'.")
        };
        Self {
            correct: result.correct,
            correct_answer,
            message,
        }
    }
}
