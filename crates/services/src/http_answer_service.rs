use std::env;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use cipher_core::model::{AnswerResult, Letter, QuizMode};

use crate::answer_service::AnswerService;
use crate::error::ServiceError;
use crate::wire::{
    CHECK_ANSWER_PATH, CheckAnswerRequest, CheckAnswerResponse, START_QUIZ_PATH,
    StartQuizRequest, StartQuizResponse,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct HttpAnswerConfig {
    pub base_url: String,
    /// `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
    pub mode: QuizMode,
}

impl HttpAnswerConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Some(DEFAULT_TIMEOUT),
            mode: QuizMode::default(),
        }
    }

    /// Reads `CIPHER_QUIZ_URL` and `CIPHER_QUIZ_TIMEOUT_SECS`.
    ///
    /// Returns `None` when no URL is configured. A timeout of `0` disables it.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("CIPHER_QUIZ_URL").ok()?;
        if base_url.trim().is_empty() {
            return None;
        }
        let timeout = match env::var("CIPHER_QUIZ_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
        {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => Some(DEFAULT_TIMEOUT),
        };
        Some(Self::new(base_url.trim()).with_timeout(timeout))
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: QuizMode) -> Self {
        self.mode = mode;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Answer service reached over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpAnswerService {
    client: Client,
    config: HttpAnswerConfig,
}

impl HttpAnswerService {
    /// # Errors
    ///
    /// Returns `ServiceError::Http` if the HTTP client cannot be built.
    pub fn new(config: HttpAnswerConfig) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &HttpAnswerConfig {
        &self.config
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::HttpStatus(status));
    }
    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|err| ServiceError::Malformed(err.to_string()))
}

#[async_trait]
impl AnswerService for HttpAnswerService {
    async fn begin_session(&self) -> Result<Vec<Letter>, ServiceError> {
        let url = self.config.url(START_QUIZ_PATH);
        let mode = self.config.mode;
        tracing::debug!(%url, %mode, "requesting quiz letters");

        let payload = StartQuizRequest { mode: Some(mode) };
        let response = self.client.post(url).json(&payload).send().await?;
        let body: StartQuizResponse = decode(response).await?;

        if body.letters.is_empty() {
            return Err(ServiceError::Malformed("no letters in quiz".into()));
        }
        Ok(body.letters)
    }

    async fn check_answer(
        &self,
        letter: Letter,
        answer: &str,
    ) -> Result<AnswerResult, ServiceError> {
        let url = self.config.url(CHECK_ANSWER_PATH);
        let mode = self.config.mode;
        let payload = CheckAnswerRequest {
            letter: Some(letter.to_string()),
            answer: Some(answer.to_string()),
            mode: Some(mode),
        };

        let response = self.client.post(url).json(&payload).send().await?;
        let body: CheckAnswerResponse = decode(response).await?;

        if let Some(echoed) = body.echoed_letter(mode)
            && echoed != letter
        {
            return Err(ServiceError::Malformed(format!(
                "checked {echoed} but asked for {letter}"
            )));
        }
        Ok(body.into())
    }

    fn mode(&self) -> QuizMode {
        self.config.mode
    }
}
