use thiserror::Error;

use crate::model::answer::{AnswerResult, normalize_answer};
use crate::model::letter::{ALPHABET_LEN, Letter};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MappingError {
    #[error("{target} is the image of both {first} and {second}")]
    NotBijective {
        target: Letter,
        first: Letter,
        second: Letter,
    },
}

/// Al Bhed substitution, indexed by source letter (`A => Y`, `B => P`, ...).
const AL_BHED: &[u8; ALPHABET_LEN] = b"YPLTAVKREZGMSHUBXNCDIJFQOW";

/// A total, bijective substitution table from `Letter` to `Letter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    table: [Letter; ALPHABET_LEN],
}

impl Mapping {
    /// Build a mapping from a table indexed by source letter.
    ///
    /// # Errors
    ///
    /// Returns `MappingError::NotBijective` if two source letters share a target.
    pub fn new(table: [Letter; ALPHABET_LEN]) -> Result<Self, MappingError> {
        let mut seen: [Option<Letter>; ALPHABET_LEN] = [None; ALPHABET_LEN];
        for (source, target) in Letter::all().zip(table) {
            if let Some(first) = seen[target.index()] {
                return Err(MappingError::NotBijective {
                    target,
                    first,
                    second: source,
                });
            }
            seen[target.index()] = Some(source);
        }
        Ok(Self { table })
    }

    /// The fixed Al Bhed cipher used by the quiz.
    #[must_use]
    pub fn al_bhed() -> Self {
        let table = std::array::from_fn(|i| Letter::from_ascii_upper(AL_BHED[i]));
        Self { table }
    }

    /// Cipher letter for `letter`.
    #[must_use]
    pub fn get(&self, letter: Letter) -> Letter {
        self.table[letter.index()]
    }

    /// Check a raw answer for `letter`; the answer is trimmed and uppercased first.
    #[must_use]
    pub fn check(&self, letter: Letter, answer: &str) -> AnswerResult {
        let correct_answer = self.get(letter);
        let normalized = normalize_answer(answer);
        let correct = normalized.chars().eq(std::iter::once(correct_answer.as_char()));
        AnswerResult {
            correct,
            correct_answer,
        }
    }

    /// The reverse substitution: cipher letter back to its source letter.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut table = [Letter::from_ascii_upper(b'A'); ALPHABET_LEN];
        for (source, target) in self.pairs() {
            table[target.index()] = source;
        }
        Self { table }
    }

    /// Source letter that enciphers to `cipher`.
    #[must_use]
    pub fn reverse_get(&self, cipher: Letter) -> Letter {
        self.inverse().get(cipher)
    }

    /// `(source, cipher)` pairs in alphabetical order of the source letter.
    pub fn pairs(&self) -> impl ExactSizeIterator<Item = (Letter, Letter)> + '_ {
        Letter::all().map(|letter| (letter, self.get(letter)))
    }
}

impl Default for Mapping {
    fn default() -> Self {
        Self::al_bhed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    #[test]
    fn al_bhed_matches_known_pairs() {
        let mapping = Mapping::al_bhed();
        assert_eq!(mapping.get(letter('A')), letter('Y'));
        assert_eq!(mapping.get(letter('B')), letter('P'));
        assert_eq!(mapping.get(letter('E')), letter('A'));
        assert_eq!(mapping.get(letter('Z')), letter('W'));
    }

    #[test]
    fn al_bhed_is_a_bijection() {
        let mapping = Mapping::al_bhed();
        let table: [Letter; ALPHABET_LEN] = std::array::from_fn(|i| {
            mapping.get(Letter::from_index(i).unwrap())
        });
        assert_eq!(Mapping::new(table), Ok(mapping));
    }

    #[test]
    fn duplicate_target_is_rejected() {
        let mut table: [Letter; ALPHABET_LEN] =
            std::array::from_fn(|i| Letter::from_index(i).unwrap());
        table[1] = letter('A');
        assert_eq!(
            Mapping::new(table),
            Err(MappingError::NotBijective {
                target: letter('A'),
                first: letter('A'),
                second: letter('B'),
            })
        );
    }

    #[test]
    fn every_letter_checks_against_its_cipher() {
        let mapping = Mapping::al_bhed();
        for (source, cipher) in mapping.pairs() {
            let hit = mapping.check(source, &cipher.to_string());
            assert!(hit.correct, "{source} -> {cipher}");
            assert_eq!(hit.correct_answer, cipher);

            for other in Letter::all().filter(|l| *l != cipher) {
                let miss = mapping.check(source, &other.to_string());
                assert!(!miss.correct);
                assert_eq!(miss.correct_answer, cipher);
            }
        }
    }

    #[test]
    fn inverse_undoes_every_pair() {
        let mapping = Mapping::al_bhed();
        let inverse = mapping.inverse();
        for (source, cipher) in mapping.pairs() {
            assert_eq!(inverse.get(cipher), source);
            assert_eq!(mapping.reverse_get(cipher), source);
        }
        assert_eq!(inverse.get(letter('Y')), letter('A'));
        assert_eq!(inverse.inverse(), mapping);
        assert!(inverse.check(letter('P'), " b").correct);
    }

    #[test]
    fn check_normalizes_answer() {
        let mapping = Mapping::al_bhed();
        assert!(mapping.check(letter('A'), "  y ").correct);
        assert!(!mapping.check(letter('A'), "yy").correct);
        assert!(!mapping.check(letter('A'), "").correct);
    }
}
