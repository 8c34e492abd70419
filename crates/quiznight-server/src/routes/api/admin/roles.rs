use crate::permissions::Permission;
use crate::routes::api::admin::error::AdminError;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use http::StatusCode;
use protect_axum::protect;
use quiznight_db::{role, user};
use quiznight_model::role::Role;
use quiznight_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;
use serde_derive::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/admin/roles",
    responses(
        (status = OK, body = Vec<Role>, description = "All roles with their user counts"),
    ),
    tag = "admin",
    security(("session" = []))
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn list_roles(Extension(conn): Extension<DatabaseConnection>) -> Result<impl IntoResponse, AdminError> {
    let roles = role::Query::get_roles(&conn).await?;

    let mut role_models: Vec<Role> = Vec::with_capacity(roles.len());
    for role in roles {
        let user_count = user::Query::count_by_role(&conn, role.id).await?;
        role_models.push((role, user_count).into_model());
    }
    Ok(Json(role_models))
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateRolePayload {
    name: String,
    description: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/admin/roles",
    request_body = CreateRolePayload,
    responses(
        (status = CREATED, body = Role, description = "Role created"),
        (status = BAD_REQUEST, description = "Name is missing"),
    ),
    tag = "admin",
    security(("session" = []))
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn create_role(
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<CreateRolePayload>,
) -> Result<impl IntoResponse, AdminError> {
    if payload.name.trim().is_empty() {
        return Err(AdminError::Validation("name is required"));
    }

    let created = role::Mutation::create_role(&conn, payload.name.trim(), payload.description.as_deref()).await?;
    tracing::info!(role = %created.name, "created role");

    let role: Role = (created, 0).into_model();
    Ok((StatusCode::CREATED, Json(role)))
}

#[utoipa::path(
    get,
    path = "/api/admin/roles/{role_id}",
    responses(
        (status = OK, body = Role),
        (status = NOT_FOUND, description = "No such role"),
    ),
    tag = "admin",
    security(("session" = []))
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn get_role(
    Extension(conn): Extension<DatabaseConnection>,
    Path(role_id): Path<Uuid>,
) -> Result<impl IntoResponse, AdminError> {
    let role = role::Query::find_role_by_id(&conn, role_id)
        .await?
        .ok_or(AdminError::NotFound("role not found"))?;
    let user_count = user::Query::count_by_role(&conn, role.id).await?;
    let role: Role = (role, user_count).into_model();
    Ok(Json(role))
}

#[utoipa::path(
    delete,
    path = "/api/admin/roles/{role_id}",
    responses(
        (status = NO_CONTENT, description = "Role deleted; assigned users fall back to no role"),
        (status = BAD_REQUEST, description = "The storage layer rejected the delete"),
        (status = NOT_FOUND, description = "No such role"),
    ),
    tag = "admin",
    security(("session" = []))
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn delete_role(
    Extension(conn): Extension<DatabaseConnection>,
    Path(role_id): Path<Uuid>,
) -> Result<impl IntoResponse, AdminError> {
    role::Query::find_role_by_id(&conn, role_id)
        .await?
        .ok_or(AdminError::NotFound("role not found"))?;

    role::Mutation::delete(&conn, role_id)
        .await
        .map_err(AdminError::RoleInUse)?;
    tracing::debug!(%role_id, "role deleted");
    Ok(StatusCode::NO_CONTENT)
}
