use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cipher_core::model::{Letter, QuizMode};
use services::AnswerService;
use services::wire::{
    CheckAnswerRequest, CheckAnswerResponse, ErrorResponse, StartQuizRequest, StartQuizResponse,
};

use crate::state::AppState;

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn invalid_letter(mode: QuizMode) -> &'static str {
    match mode {
        QuizMode::EnglishToAlBhed => "Invalid letter",
        QuizMode::AlBhedToEnglish => "Invalid Al Bhed letter",
    }
}

/// The body is optional; without one the server's configured mode applies.
pub async fn start_quiz(
    State(state): State<AppState>,
    payload: Result<Json<StartQuizRequest>, JsonRejection>,
) -> Json<StartQuizResponse> {
    let mode = payload
        .ok()
        .and_then(|Json(request)| request.mode)
        .unwrap_or(state.answers.mode());
    let letters = state.answers.letters_for(mode);
    tracing::debug!(letters = letters.len(), %mode, "issued quiz letters");
    Json(StartQuizResponse {
        letters,
        success: true,
    })
}

pub async fn check_answer(
    State(state): State<AppState>,
    payload: Result<Json<CheckAnswerRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) if !request.is_empty() => request,
        Ok(_) => return bad_request("No data provided"),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected answer payload");
            return bad_request("No data provided");
        }
    };

    let mode = request.mode.unwrap_or(state.answers.mode());
    let raw_letter = request.letter.unwrap_or_default();
    let Ok(letter) = raw_letter.parse::<Letter>() else {
        tracing::debug!(letter = %raw_letter, %mode, "rejected unknown letter");
        return bad_request(invalid_letter(mode));
    };

    let answer = request.answer.unwrap_or_default();
    let result = state.answers.check_for(mode, letter, &answer);
    Json(CheckAnswerResponse::from_result(mode, letter, result)).into_response()
}
