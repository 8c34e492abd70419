use super::api;
use super::login;

use axum::Router;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::status::get_status,
        login::register,
        login::login,
        login::logout,
        login::change_password,
        login::whoami,
        api::admin::users::list_users,
        api::admin::users::create_user,
        api::admin::users::get_user,
        api::admin::users::delete_user,
        api::admin::users::change_user_role,
        api::admin::users::promote_to_admin,
        api::admin::roles::list_roles,
        api::admin::roles::create_role,
        api::admin::roles::get_role,
        api::admin::roles::delete_role,
        api::events::create_event,
        api::events::list_my_events,
        api::events::get_event,
        api::events::get_event_by_slug,
        api::events::update_event,
        api::events::delete_event,
        api::events::create_question,
        api::events::delete_question,
        api::events::generate_questions,
        api::events::create_team,
        api::events::delete_team,
        api::events::create_participant,
        api::events::delete_participant,
        api::events::move_participant,
        api::events::set_participant_active,
        api::events::create_fun_fact,
        api::events::delete_fun_fact,
        api::events::set_fun_fact_active,
        api::events::reads::get_teams_raw,
        api::events::reads::get_teams_orm,
        api::events::reads::get_participants_raw,
        api::events::reads::get_participants_orm,
        api::events::reads::get_questions_raw,
        api::events::reads::get_questions_orm,
        api::events::reads::get_fun_facts_raw,
        api::events::reads::get_fun_facts_orm,
        api::events::responses::join_event,
        api::events::responses::submit_response,
        api::events::responses::my_responses,
        api::events::responses::get_leaderboard,
        api::event_images::get_image_for_question,
        api::event_images::select_image,
        api::event_images::remove_image,
        api::event_images::track_usage,
        api::event_images::cleanup_expired,
        api::unsplash::search,
        api::unsplash::get_photo,
        api::unsplash::featured,
        api::unsplash::categories,
        api::unsplash::category_photos,
        api::unsplash::track_download,
    ),
    modifiers(&SecurityAddon),
    tags()
)]
struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        // we can unwrap safely, since there already are components registered.
        let components = openapi.components.as_mut().expect("components not registered");
        components.add_security_scheme(
            "session",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("sessionId"))),
        );
    }
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        // RapiDoc points at the document SwaggerUi already serves.
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
}
