use axum::Router;
use axum::routing::{get, post, put};

pub(crate) mod error;
pub(crate) mod roles;
pub(crate) mod users;

/// Everything nested here sits behind the admin grants layer attached in
/// `app.rs`; there is no path sniffing anywhere else.
pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .nest(
            "/users",
            Router::new()
                .route("/", get(users::list_users).post(users::create_user))
                .route("/{user_id}", get(users::get_user).delete(users::delete_user))
                .route("/{user_id}/role", put(users::change_user_role))
                .route("/{user_id}/promote", post(users::promote_to_admin)),
        )
        .nest(
            "/roles",
            Router::new()
                .route("/", get(roles::list_roles).post(roles::create_role))
                .route("/{role_id}", get(roles::get_role).delete(roles::delete_role)),
        )
        .with_state(())
}
