use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use services::{Question, QuizController, QuizError, QuizState};

use super::feedback_vm::FeedbackVm;
use super::results_vm::ResultsVm;

const START_FAILED: &str = "Failed to start quiz. Please try again.";
const SUBMIT_FAILED: &str = "Failed to submit answer. Please try again.";

/// A dismissible error message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub letter: char,
    /// "What is 'A' in Al Bhed?"
    pub prompt: String,
    /// 1-based number of this question.
    pub number: usize,
    pub total: usize,
    pub score: usize,
    pub progress_label: String,
    pub progress_percent: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    Quiz(QuestionVm),
    Results(ResultsVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Feedback(FeedbackVm),
    /// The answer was blank; re-prompt without touching the quiz.
    Blank,
    /// The service failed; a notice was raised and the letter is still pending.
    Failed,
    /// Input is disabled right now.
    Ignored,
}

/// Read-only view of the request-in-flight flag.
///
/// Cloned out to whatever draws the screen while a request is outstanding, so
/// it can grey out input without holding the view model.
#[derive(Clone, Debug, Default)]
pub struct InFlightHandle(Arc<AtomicBool>);

impl InFlightHandle {
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Clears the in-flight flag when the request finishes or is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn begin(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Share of the quiz reached, rounded half up.
fn progress_percent(number: usize, total: usize) -> usize {
    let total = total.max(1);
    (number * 200 + total) / (total * 2)
}

/// View-side wrapper around `QuizController`.
///
/// Owns everything the screen needs that is not quiz logic: the request-in-flight
/// flag that disables input, error notices, and the feedback for the last answer.
pub struct QuizVm {
    controller: QuizController,
    in_flight: InFlightHandle,
    notices: Vec<Notice>,
    next_notice_id: u64,
    feedback: Option<FeedbackVm>,
}

impl QuizVm {
    #[must_use]
    pub fn new(controller: QuizController) -> Self {
        Self {
            controller,
            in_flight: InFlightHandle::default(),
            notices: Vec::new(),
            next_notice_id: 0,
            feedback: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.controller.state()
    }

    #[must_use]
    pub fn input_enabled(&self) -> bool {
        !self.in_flight.is_set() && self.controller.state() == QuizState::InProgress
    }

    /// Handle that reads `true` for as long as a start or submit is outstanding.
    #[must_use]
    pub fn in_flight(&self) -> InFlightHandle {
        self.in_flight.clone()
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.retain(|notice| notice.id != id);
    }

    /// Remove and return every pending notice.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&FeedbackVm> {
        self.feedback.as_ref()
    }

    fn push_notice(&mut self, message: &str) {
        self.next_notice_id += 1;
        self.notices.push(Notice {
            id: self.next_notice_id,
            message: message.to_string(),
        });
    }

    /// Start a quiz from the welcome or results screen.
    ///
    /// Returns `false` (and raises a notice on service failure) if it did not start.
    pub async fn start(&mut self) -> bool {
        let result = {
            let _flight = InFlight::begin(&self.in_flight.0);
            self.controller.start().await
        };
        match result {
            Ok(()) => {
                self.feedback = None;
                true
            }
            Err(QuizError::AlreadyInProgress) => false,
            Err(err) => {
                tracing::debug!(error = %err, "start failed");
                self.push_notice(START_FAILED);
                false
            }
        }
    }

    pub async fn submit(&mut self, raw: &str) -> SubmitOutcome {
        if !self.input_enabled() {
            return SubmitOutcome::Ignored;
        }
        let result = {
            let _flight = InFlight::begin(&self.in_flight.0);
            self.controller.submit(raw).await
        };
        match result {
            Ok(answer) => {
                let feedback = FeedbackVm::from(answer);
                self.feedback = Some(feedback.clone());
                SubmitOutcome::Feedback(feedback)
            }
            Err(QuizError::EmptyAnswer) => SubmitOutcome::Blank,
            Err(err) if err.is_retryable() => {
                tracing::debug!(error = %err, "submit failed");
                self.push_notice(SUBMIT_FAILED);
                SubmitOutcome::Failed
            }
            Err(_) => SubmitOutcome::Ignored,
        }
    }

    /// Hide any feedback and resolve what the screen should show now.
    pub fn screen(&mut self) -> Screen {
        self.feedback = None;
        let progress = self.controller.progress();
        let mode = self.controller.mode();
        match self.controller.current_question() {
            Ok(Question::Letter(letter)) => {
                let number = progress.answered + 1;
                Screen::Quiz(QuestionVm {
                    letter: letter.as_char(),
                    prompt: format!("What is '{letter}' in {}?", mode.answer_alphabet()),
                    number,
                    total: progress.total,
                    score: progress.score,
                    progress_label: format!("{number} / {}", progress.total),
                    progress_percent: progress_percent(number, progress.total),
                })
            }
            Ok(Question::Complete(summary)) => Screen::Results(ResultsVm::from(summary)),
            Err(_) => Screen::Welcome,
        }
    }

    pub fn restart(&mut self) {
        self.controller.restart();
        self.feedback = None;
    }
}
