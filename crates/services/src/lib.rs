#![forbid(unsafe_code)]

pub mod answer_service;
pub mod error;
pub mod http_answer_service;
pub mod quiz;
pub mod wire;

pub use answer_service::{AnswerService, LocalAnswerService};
pub use error::{QuizError, ServiceError};
pub use http_answer_service::{HttpAnswerConfig, HttpAnswerService};
pub use quiz::{Question, QuizController, QuizState};
