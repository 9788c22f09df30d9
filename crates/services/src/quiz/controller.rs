use std::fmt;
use std::sync::Arc;

use cipher_core::model::{AnswerResult, QuizMode, QuizSession, SessionProgress, normalize_answer};

use super::state::{Question, QuizState};
use crate::answer_service::AnswerService;
use crate::error::{QuizError, ServiceError};

/// Drives one quiz at a time against an `AnswerService`.
///
/// All mutation goes through `&mut self`, so at most one start or submit can be
/// outstanding. Every failed call leaves the session exactly as it was.
pub struct QuizController {
    service: Arc<dyn AnswerService>,
    session: QuizSession,
    state: QuizState,
}

impl QuizController {
    #[must_use]
    pub fn new(service: Arc<dyn AnswerService>) -> Self {
        Self {
            service,
            session: QuizSession::default(),
            state: QuizState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Direction the service asks letters in.
    #[must_use]
    pub fn mode(&self) -> QuizMode {
        self.service.mode()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.session.progress()
    }

    /// Fetch a fresh letter sequence and begin a new quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyInProgress` unless the quiz is idle or complete.
    /// Returns `QuizError::ServiceUnavailable` if the service fails or sends no letters.
    pub async fn start(&mut self) -> Result<(), QuizError> {
        if self.state.is_active() {
            return Err(QuizError::AlreadyInProgress);
        }

        let letters = self.service.begin_session().await.inspect_err(|err| {
            tracing::warn!(error = %err, "failed to start quiz");
        })?;
        let session = QuizSession::new(letters)
            .map_err(|err| ServiceError::Malformed(err.to_string()))?;

        tracing::info!(letters = session.len(), mode = %self.mode(), "quiz started");
        self.session = session;
        self.state = QuizState::InProgress;
        Ok(())
    }

    /// The letter to ask next, or the final tally once every letter is answered.
    ///
    /// Calling this while feedback is on display ends the feedback.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestionPending` if no quiz has been started.
    pub fn current_question(&mut self) -> Result<Question, QuizError> {
        match self.state {
            QuizState::Idle => Err(QuizError::NoQuestionPending),
            QuizState::Complete => Ok(Question::Complete(self.session.summary())),
            QuizState::InProgress | QuizState::AwaitingNext => {
                if let Some(letter) = self.session.current() {
                    self.state = QuizState::InProgress;
                    return Ok(Question::Letter(letter));
                }
                let summary = self.session.summary();
                tracing::info!(
                    score = summary.score(),
                    total = summary.total(),
                    "quiz complete"
                );
                self.state = QuizState::Complete;
                Ok(Question::Complete(summary))
            }
        }
    }

    /// Judge `answer` for the pending letter and advance.
    ///
    /// The answer is trimmed and uppercased. An empty answer never reaches the service.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestionPending` if no letter is waiting.
    /// Returns `QuizError::EmptyAnswer` for a blank answer.
    /// Returns `QuizError::ServiceUnavailable` if the service call fails; the
    /// letter stays pending and may be answered again.
    pub async fn submit(&mut self, answer: &str) -> Result<AnswerResult, QuizError> {
        if !self.state.is_active() {
            return Err(QuizError::NoQuestionPending);
        }
        let Some(letter) = self.session.current() else {
            return Err(QuizError::NoQuestionPending);
        };

        let answer = normalize_answer(answer);
        if answer.is_empty() {
            return Err(QuizError::EmptyAnswer);
        }

        let result = self
            .service
            .check_answer(letter, &answer)
            .await
            .inspect_err(|err| {
                tracing::warn!(%letter, error = %err, "failed to check answer");
            })?;

        self.session
            .record(result.correct)
            .map_err(|_| QuizError::NoQuestionPending)?;
        self.state = QuizState::AwaitingNext;
        tracing::debug!(
            %letter,
            correct = result.correct,
            position = self.session.position(),
            "answer checked"
        );
        Ok(result)
    }

    /// Drop the current quiz and return to the welcome screen.
    pub fn restart(&mut self) {
        self.session = QuizSession::default();
        self.state = QuizState::Idle;
    }
}

impl fmt::Debug for QuizController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizController")
            .field("session", &self.session)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use cipher_core::model::{Letter, Mapping, QuizSummary};

    use super::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    /// Serves a fixed letter list and can be told to fail on demand.
    #[derive(Default)]
    struct ScriptedService {
        letters: Vec<Letter>,
        fail: AtomicBool,
        begin_calls: AtomicUsize,
        check_calls: AtomicUsize,
        answers_seen: Mutex<HashMap<usize, String>>,
    }

    impl ScriptedService {
        fn new(letters: &str) -> Arc<Self> {
            Arc::new(Self {
                letters: letters.chars().map(letter).collect(),
                ..Self::default()
            })
        }

        fn set_failing(&self, fail: bool) {
            self.fail.store(fail, Ordering::SeqCst);
        }

        fn unavailable(&self) -> Result<(), ServiceError> {
            if self.fail.load(Ordering::SeqCst) {
                Err(ServiceError::Malformed("scripted outage".into()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl AnswerService for ScriptedService {
        async fn begin_session(&self) -> Result<Vec<Letter>, ServiceError> {
            self.begin_calls.fetch_add(1, Ordering::SeqCst);
            self.unavailable()?;
            Ok(self.letters.clone())
        }

        async fn check_answer(
            &self,
            letter: Letter,
            answer: &str,
        ) -> Result<AnswerResult, ServiceError> {
            let call = self.check_calls.fetch_add(1, Ordering::SeqCst);
            self.answers_seen
                .lock()
                .unwrap()
                .insert(call, answer.to_string());
            self.unavailable()?;
            Ok(Mapping::al_bhed().check(letter, answer))
        }
    }

    async fn started(letters: &str) -> (Arc<ScriptedService>, QuizController) {
        let service = ScriptedService::new(letters);
        let mut controller = QuizController::new(service.clone());
        controller.start().await.unwrap();
        (service, controller)
    }

    #[tokio::test]
    async fn two_letter_quiz_scores_one_of_two() {
        let (_service, mut controller) = started("AB").await;

        assert_eq!(controller.current_question().unwrap(), Question::Letter(letter('A')));
        let first = controller.submit("Y").await.unwrap();
        assert!(first.correct);
        assert_eq!(controller.session().score(), 1);
        assert_eq!(controller.session().position(), 1);
        assert_eq!(controller.state(), QuizState::AwaitingNext);

        assert_eq!(controller.current_question().unwrap(), Question::Letter(letter('B')));
        let second = controller.submit("Z").await.unwrap();
        assert!(!second.correct);
        assert_eq!(second.correct_answer, letter('P'));
        assert_eq!(controller.session().score(), 1);
        assert_eq!(controller.session().position(), 2);

        assert_eq!(
            controller.current_question().unwrap(),
            Question::Complete(QuizSummary::new(1, 2))
        );
        assert_eq!(controller.state(), QuizState::Complete);
    }

    #[tokio::test]
    async fn blank_answer_is_rejected_without_calling_service() {
        let (service, mut controller) = started("AB").await;

        for blank in ["", "   ", "\t\n"] {
            let err = controller.submit(blank).await.unwrap_err();
            assert!(matches!(err, QuizError::EmptyAnswer));
        }
        assert_eq!(service.check_calls.load(Ordering::SeqCst), 0);
        assert_eq!(controller.session().position(), 0);
        assert_eq!(controller.session().score(), 0);
    }

    #[tokio::test]
    async fn outage_during_submit_leaves_question_pending() {
        let (service, mut controller) = started("AB").await;
        service.set_failing(true);

        let err = controller.submit("Y").await.unwrap_err();
        assert!(matches!(err, QuizError::ServiceUnavailable(_)));
        assert!(err.is_retryable());
        assert_eq!(controller.session().position(), 0);
        assert_eq!(controller.session().score(), 0);
        assert_eq!(controller.state(), QuizState::InProgress);

        service.set_failing(false);
        let retry = controller.submit("Y").await.unwrap();
        assert!(retry.correct);
        assert_eq!(controller.session().position(), 1);
    }

    #[tokio::test]
    async fn answer_is_normalized_before_checking() {
        let (service, mut controller) = started("AA").await;

        let padded = controller.submit("  y ").await.unwrap();
        let plain = controller.submit("Y").await.unwrap();
        assert_eq!(padded, plain);
        assert!(padded.correct);

        let seen = service.answers_seen.lock().unwrap();
        assert_eq!(seen.get(&0).map(String::as_str), Some("Y"));
    }

    #[tokio::test]
    async fn failed_start_stays_idle() {
        let service = ScriptedService::new("AB");
        service.set_failing(true);
        let mut controller = QuizController::new(service.clone());

        let err = controller.start().await.unwrap_err();
        assert!(matches!(err, QuizError::ServiceUnavailable(_)));
        assert_eq!(controller.state(), QuizState::Idle);
        assert!(controller.session().is_empty());
        assert_eq!(service.begin_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_letter_list_is_malformed() {
        let service = ScriptedService::new("");
        let mut controller = QuizController::new(service);

        let err = controller.start().await.unwrap_err();
        assert!(matches!(
            err,
            QuizError::ServiceUnavailable(ServiceError::Malformed(_))
        ));
        assert_eq!(controller.state(), QuizState::Idle);
    }

    #[tokio::test]
    async fn start_is_rejected_mid_quiz() {
        let (service, mut controller) = started("AB").await;
        controller.submit("Y").await.unwrap();

        let err = controller.start().await.unwrap_err();
        assert!(matches!(err, QuizError::AlreadyInProgress));
        assert_eq!(service.begin_calls.load(Ordering::SeqCst), 1);
        assert_eq!(controller.session().position(), 1);
    }

    #[tokio::test]
    async fn current_question_is_stable_until_submit() {
        let (_service, mut controller) = started("KQ").await;

        let first = controller.current_question().unwrap();
        assert_eq!(controller.current_question().unwrap(), first);
        assert_eq!(controller.current_question().unwrap(), first);
    }

    #[tokio::test]
    async fn restart_clears_session_until_next_start() {
        let (_service, mut controller) = started("AB").await;
        controller.submit("Y").await.unwrap();

        controller.restart();
        assert_eq!(controller.state(), QuizState::Idle);
        assert!(controller.session().is_empty());
        assert!(matches!(
            controller.current_question(),
            Err(QuizError::NoQuestionPending)
        ));
        assert!(matches!(
            controller.submit("Y").await,
            Err(QuizError::NoQuestionPending)
        ));

        controller.start().await.unwrap();
        assert_eq!(controller.current_question().unwrap(), Question::Letter(letter('A')));
        assert_eq!(controller.session().score(), 0);
    }

    #[tokio::test]
    async fn completed_quiz_can_start_again() {
        let (service, mut controller) = started("A").await;
        controller.submit("X").await.unwrap();
        assert!(matches!(
            controller.current_question().unwrap(),
            Question::Complete(_)
        ));
        assert!(matches!(
            controller.submit("Y").await,
            Err(QuizError::NoQuestionPending)
        ));

        controller.start().await.unwrap();
        assert_eq!(controller.state(), QuizState::InProgress);
        assert_eq!(service.begin_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn score_never_exceeds_position() {
        let (_service, mut controller) = started("ABCDEFGH").await;
        let answers = ["Y", "x", "L", "T", "b", "V", "K", "r"];
        for answer in answers {
            controller.current_question().unwrap();
            controller.submit(answer).await.unwrap();
            let session = controller.session();
            assert!(session.score() <= session.position());
            assert!(session.position() <= session.len());
        }
        assert_eq!(
            controller.current_question().unwrap(),
            Question::Complete(QuizSummary::new(6, 8))
        );
    }
}
