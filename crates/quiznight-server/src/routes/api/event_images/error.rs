use crate::routes::api::events::error::EventError;
use crate::routes::error::{bad_gateway, client_error, server_error};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use quiznight_core::unsplash::error::UnsplashError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum ImageError {
    #[error("{0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Database(#[from] DbErr),

    #[error("image search is not configured")]
    Disabled,

    #[error(transparent)]
    Unsplash(#[from] UnsplashError),

    #[error(transparent)]
    Event(#[from] EventError),
}

impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        match self {
            ImageError::NotFound(message) => client_error(StatusCode::NOT_FOUND, message),
            ImageError::Database(error) => server_error(&error),
            ImageError::Disabled => client_error(StatusCode::SERVICE_UNAVAILABLE, "image search is not configured"),
            ImageError::Unsplash(error) => bad_gateway("unsplash", &error),
            ImageError::Event(error) => error.into_response(),
        }
    }
}
