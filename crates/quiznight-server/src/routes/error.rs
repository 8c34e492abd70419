use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_derive::Serialize;
use std::borrow::Cow;
use utoipa::ToSchema;

/// The JSON error envelope every endpoint shares.
///
/// Client errors carry a specific `error`; server errors keep the body
/// generic (the specifics go to the log and to sentry) except in debug
/// builds, where `details` carries the underlying error for development.
/// The request id travels in the `x-request-id` response header.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    pub(crate) error: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) details: Option<String>,
}

pub(crate) fn client_error<E: Into<Cow<'static, str>>>(status: StatusCode, error: E) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.into(),
            details: None,
        }),
    )
        .into_response()
}

pub(crate) fn server_error<E: std::error::Error + 'static>(error: &E) -> Response {
    tracing::error!(error = error as &dyn std::error::Error, "request failed");
    let details = cfg!(debug_assertions).then(|| error.to_string());
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: Cow::Borrowed("internal server error"),
            details,
        }),
    )
        .into_response()
}

pub(crate) fn bad_gateway<E: std::error::Error + 'static>(upstream: &'static str, error: &E) -> Response {
    tracing::error!(error = error as &dyn std::error::Error, upstream, "upstream call failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorBody {
            error: Cow::Owned(format!("{upstream} request failed")),
            details: cfg!(debug_assertions).then(|| error.to_string()),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let body = ErrorBody {
            error: Cow::Borrowed("event not found"),
            details: None,
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"event not found"}"#);
    }
}
