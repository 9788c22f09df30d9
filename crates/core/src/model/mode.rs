use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the cipher is shown and which side is asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizMode {
    /// Show an English letter, ask for its Al Bhed letter.
    #[default]
    #[serde(rename = "english_to_albhed")]
    EnglishToAlBhed,
    /// Show an Al Bhed letter, ask for the English letter it stands for.
    #[serde(rename = "albhed_to_english")]
    AlBhedToEnglish,
}

impl QuizMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EnglishToAlBhed => "english_to_albhed",
            Self::AlBhedToEnglish => "albhed_to_english",
        }
    }

    /// Name of the alphabet the questions are written in.
    #[must_use]
    pub fn question_alphabet(self) -> &'static str {
        match self {
            Self::EnglishToAlBhed => "English",
            Self::AlBhedToEnglish => "Al Bhed",
        }
    }

    /// Name of the alphabet answers are expected in.
    #[must_use]
    pub fn answer_alphabet(self) -> &'static str {
        match self {
            Self::EnglishToAlBhed => "Al Bhed",
            Self::AlBhedToEnglish => "English",
        }
    }
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_display() {
        for mode in [QuizMode::EnglishToAlBhed, QuizMode::AlBhedToEnglish] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{mode}\""));
            assert_eq!(serde_json::from_str::<QuizMode>(&json).unwrap(), mode);
        }
        assert!(serde_json::from_str::<QuizMode>("\"sideways\"").is_err());
    }

    #[test]
    fn default_asks_for_al_bhed() {
        assert_eq!(QuizMode::default().answer_alphabet(), "Al Bhed");
        assert_eq!(QuizMode::AlBhedToEnglish.question_alphabet(), "Al Bhed");
    }
}
