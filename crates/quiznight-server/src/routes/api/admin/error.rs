use crate::routes::error::{client_error, server_error};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum AdminError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Database(#[from] DbErr),

    /// Role deletion reports storage failures as 400 with the raw message.
    /// Every other delete endpoint maps them to 500; the asymmetry is part
    /// of the published API.
    #[error("{0}")]
    RoleInUse(DbErr),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            AdminError::Validation(message) => client_error(StatusCode::BAD_REQUEST, message),
            AdminError::NotFound(message) => client_error(StatusCode::NOT_FOUND, message),
            AdminError::Database(error) => server_error(&error),
            AdminError::RoleInUse(error) => client_error(StatusCode::BAD_REQUEST, error.to_string()),
        }
    }
}
