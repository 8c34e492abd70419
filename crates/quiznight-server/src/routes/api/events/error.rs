use crate::routes::error::{bad_gateway, client_error, server_error};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use quiznight_core::question_gen::error::QuestionGenError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum EventError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Forbidden(&'static str),

    #[error("participants are not enabled for this event")]
    ParticipantsDisabled,

    #[error("this question was already answered")]
    AlreadyAnswered,

    #[error(transparent)]
    Database(#[from] DbErr),

    #[error("question generation is not configured")]
    GenerationDisabled,

    #[error(transparent)]
    Generation(#[from] QuestionGenError),

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        match self {
            EventError::Validation(message) => client_error(StatusCode::BAD_REQUEST, message),
            EventError::NotFound(message) => client_error(StatusCode::NOT_FOUND, message),
            EventError::Forbidden(message) => client_error(StatusCode::FORBIDDEN, message),
            EventError::ParticipantsDisabled => {
                client_error(StatusCode::FORBIDDEN, "participants are not enabled for this event")
            }
            EventError::AlreadyAnswered => client_error(StatusCode::CONFLICT, "this question was already answered"),
            EventError::Database(error) => server_error(&error),
            EventError::GenerationDisabled => {
                client_error(StatusCode::SERVICE_UNAVAILABLE, "question generation is not configured")
            }
            EventError::Generation(error) => bad_gateway("question generation", &error),
            EventError::Serialize(error) => server_error(&error),
        }
    }
}
