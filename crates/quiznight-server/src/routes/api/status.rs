use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_derive::Serialize;
use utoipa::ToSchema;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(get_status)).with_state(())
}

#[derive(Serialize, ToSchema)]
pub(crate) struct Status {
    status: &'static str,
    version: &'static str,
}

#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = OK, body = Status, description = "Service is up"),
    ),
    tag = "util"
)]
pub(crate) async fn get_status() -> impl IntoResponse {
    Json(Status {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
