use async_trait::async_trait;
use rand::rng;
use rand::seq::SliceRandom;

use cipher_core::model::{AnswerResult, Letter, Mapping, QuizMode};

use crate::error::ServiceError;

/// Source of quiz letters and judge of answers.
///
/// Implementations are stateless from the caller's point of view: every call
/// stands on its own.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Letters to quiz, in the order they must be asked.
    async fn begin_session(&self) -> Result<Vec<Letter>, ServiceError>;

    /// Judge `answer` for `letter`. `answer` is compared trimmed and uppercased.
    async fn check_answer(&self, letter: Letter, answer: &str)
    -> Result<AnswerResult, ServiceError>;

    /// Direction the letters are asked in.
    fn mode(&self) -> QuizMode {
        QuizMode::default()
    }
}

/// In-process answer service backed directly by a `Mapping`.
#[derive(Debug, Clone)]
pub struct LocalAnswerService {
    mapping: Mapping,
    inverse: Mapping,
    shuffle: bool,
    mode: QuizMode,
}

impl LocalAnswerService {
    #[must_use]
    pub fn new(mapping: Mapping) -> Self {
        Self {
            inverse: mapping.inverse(),
            mapping,
            shuffle: true,
            mode: QuizMode::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: QuizMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    #[must_use]
    pub fn letters(&self) -> Vec<Letter> {
        self.letters_for(self.mode)
    }

    /// Every question letter for `mode`, shuffled unless shuffling is disabled.
    ///
    /// Unshuffled, English letters come alphabetically and Al Bhed letters come
    /// in the order of the English letters they stand for.
    #[must_use]
    pub fn letters_for(&self, mode: QuizMode) -> Vec<Letter> {
        let mut letters: Vec<Letter> = match mode {
            QuizMode::EnglishToAlBhed => Letter::all().collect(),
            QuizMode::AlBhedToEnglish => self.mapping.pairs().map(|(_, cipher)| cipher).collect(),
        };
        if self.shuffle {
            letters.shuffle(&mut rng());
        }
        letters
    }

    #[must_use]
    pub fn check(&self, letter: Letter, answer: &str) -> AnswerResult {
        self.check_for(self.mode, letter, answer)
    }

    /// Judge `answer` for a question letter asked in `mode`.
    #[must_use]
    pub fn check_for(&self, mode: QuizMode, letter: Letter, answer: &str) -> AnswerResult {
        match mode {
            QuizMode::EnglishToAlBhed => self.mapping.check(letter, answer),
            QuizMode::AlBhedToEnglish => self.inverse.check(letter, answer),
        }
    }
}

impl Default for LocalAnswerService {
    fn default() -> Self {
        Self::new(Mapping::al_bhed())
    }
}

#[async_trait]
impl AnswerService for LocalAnswerService {
    async fn begin_session(&self) -> Result<Vec<Letter>, ServiceError> {
        Ok(self.letters())
    }

    async fn check_answer(
        &self,
        letter: Letter,
        answer: &str,
    ) -> Result<AnswerResult, ServiceError> {
        Ok(self.check(letter, answer))
    }

    fn mode(&self) -> QuizMode {
        self.mode
    }
}
