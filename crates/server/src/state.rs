use std::sync::Arc;

use services::LocalAnswerService;

#[derive(Clone)]
pub struct AppState {
    pub answers: Arc<LocalAnswerService>,
}

impl AppState {
    #[must_use]
    pub fn new(answers: LocalAnswerService) -> Self {
        Self {
            answers: Arc::new(answers),
        }
    }
}
