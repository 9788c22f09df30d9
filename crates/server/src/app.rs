use axum::{Router, routing::post};
use services::wire::{CHECK_ANSWER_PATH, START_QUIZ_PATH};
use tokio::net::TcpListener;

use crate::handlers::{check_answer, start_quiz};
use crate::state::AppState;

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route(START_QUIZ_PATH, post(start_quiz))
        .route(CHECK_ANSWER_PATH, post(check_answer))
        .with_state(state)
}

/// Serve the answer endpoints on `listener` until the server stops.
///
/// # Errors
///
/// Returns the underlying I/O error if the server fails.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "answer service listening");
    axum::serve(listener, build_app(state)).await
}
