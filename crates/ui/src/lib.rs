pub mod terminal;
pub mod vm;

pub use terminal::{TerminalApp, TerminalConfig};
pub use vm::QuizVm;
