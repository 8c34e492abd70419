use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnsplashError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("unsplash returned status {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}
