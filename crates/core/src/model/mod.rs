mod answer;
mod letter;
mod mapping;
mod mode;
mod session;
mod summary;

pub use answer::{AnswerResult, normalize_answer};
pub use letter::{ALPHABET_LEN, Letter, LetterError};
pub use mapping::{Mapping, MappingError};
pub use mode::QuizMode;
pub use session::{QuizSession, SessionProgress, SessionStateError};
pub use summary::{Performance, QuizSummary};
