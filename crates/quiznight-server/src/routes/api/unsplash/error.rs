use crate::routes::error::{bad_gateway, client_error};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use quiznight_core::unsplash::error::UnsplashError;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum UnsplashRouteError {
    #[error("image search is not configured")]
    Disabled,

    #[error("unknown category")]
    UnknownCategory,

    #[error(transparent)]
    Unsplash(#[from] UnsplashError),
}

impl IntoResponse for UnsplashRouteError {
    fn into_response(self) -> Response {
        match self {
            UnsplashRouteError::Disabled => {
                client_error(StatusCode::SERVICE_UNAVAILABLE, "image search is not configured")
            }
            UnsplashRouteError::UnknownCategory => client_error(StatusCode::NOT_FOUND, "unknown category"),
            UnsplashRouteError::Unsplash(error) => bad_gateway("unsplash", &error),
        }
    }
}
