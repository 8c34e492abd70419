use crate::permissions::extract;
use crate::{AppConfig, routes};
use axum::{Extension, Router};
use http::{Method, header};
use protect_axum::GrantsLayer;
use quiznight_core::session::SessionStore;
use quiznight_core::unsplash::UnsplashClient;
use sea_orm::DatabaseConnection;
use sentry_tower::NewSentryLayer;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

#[cfg(test)]
mod tests;

pub fn create_app(
    app_config: AppConfig,
    sessions: Arc<SessionStore>,
    pool: DatabaseConnection,
    unsplash: Option<UnsplashClient>,
    origins: &[String],
) -> anyhow::Result<Router> {
    let parsed_origins = origins
        .iter()
        .map(|origin| origin.parse())
        .collect::<Result<Vec<_>, _>>()?;

    // CORS for the auth routes - the browser has no credentials yet when it
    // registers or logs in, but needs them to carry the session cookie back.
    let login_cors = CorsLayer::new()
        .allow_origin(parsed_origins.clone())
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::COOKIE, header::ORIGIN])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let api_cors = CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_headers([header::ACCEPT, header::CONTENT_TYPE, header::COOKIE, header::ORIGIN])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let api = Router::new()
        .nest("/status", routes::api::status::create_router())
        .nest(
            "/admin",
            routes::api::admin::create_router().layer(GrantsLayer::with_extractor(extract)),
        )
        .nest("/v2/events", routes::api::events::create_router())
        .nest("/orm/events", routes::api::events::reads::orm_router())
        .nest("/event-images", routes::api::event_images::create_router())
        .nest("/unsplash", routes::api::unsplash::create_router())
        .layer(api_cors);

    let app = Router::new()
        .merge(routes::swagger::create_router())
        .nest(
            "/api",
            Router::new()
                .nest("/auth", routes::login::create_router().layer(login_cors))
                .merge(api),
        )
        .layer(
            // Router layers run bottom to top, ServiceBuilder layers top to
            // bottom.
            ServiceBuilder::new()
                .layer(NewSentryLayer::new_from_top())
                .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(Extension(app_config))
                .layer(Extension(sessions))
                .layer(Extension(pool))
                .layer(Extension(unsplash)),
        )
        .with_state(());

    Ok(app)
}
