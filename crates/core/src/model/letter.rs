use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of symbols in the quiz alphabet.
pub const ALPHABET_LEN: usize = 26;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LetterError {
    #[error("letter is empty")]
    Empty,

    #[error("expected a single letter, got {raw:?}")]
    TooLong { raw: String },

    #[error("{ch:?} is not a letter of the alphabet")]
    NotAlphabetic { ch: char },
}

/// A single uppercase symbol from the fixed `A..=Z` alphabet.
///
/// Serialized as a one-character string so it can travel as-is in JSON payloads.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Letter(u8);

impl Letter {
    /// Creates a `Letter` from a character, uppercasing ASCII lowercase input.
    ///
    /// # Errors
    ///
    /// Returns `LetterError::NotAlphabetic` for anything outside `a..=z` / `A..=Z`.
    pub fn new(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            // Guarded above: the uppercased char is a single ASCII byte.
            Ok(Self(ch.to_ascii_uppercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic { ch })
        }
    }

    /// Caller guarantees `byte` is in `b'A'..=b'Z'`.
    pub(crate) const fn from_ascii_upper(byte: u8) -> Self {
        Self(byte)
    }

    /// Letter at `index` in alphabetical order (`0 => A`).
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index)
            .ok()
            .filter(|i| usize::from(*i) < ALPHABET_LEN)
            .map(|i| Self(b'A' + i))
    }

    /// Zero-based position in the alphabet.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - b'A')
    }

    #[must_use]
    pub fn as_char(self) -> char {
        char::from(self.0)
    }

    /// All 26 letters in alphabetical order.
    pub fn all() -> impl ExactSizeIterator<Item = Letter> + Clone {
        (b'A'..=b'Z').map(Self)
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let Some(ch) = chars.next() else {
            return Err(LetterError::Empty);
        };
        if chars.next().is_some() {
            return Err(LetterError::TooLong {
                raw: trimmed.to_owned(),
            });
        }
        Self::new(ch)
    }
}

impl TryFrom<String> for Letter {
    type Error = LetterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Letter> for String {
    fn from(letter: Letter) -> Self {
        letter.as_char().to_string()
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Debug for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Letter({})", self.as_char())
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
