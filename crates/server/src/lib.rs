#![forbid(unsafe_code)]

pub mod app;
pub mod handlers;
pub mod state;

pub use app::{build_app, serve};
pub use state::AppState;
