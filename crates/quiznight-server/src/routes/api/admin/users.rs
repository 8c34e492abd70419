use crate::permissions::Permission;
use crate::routes::api::admin::error::AdminError;
use axum::extract::Path;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use http::StatusCode;
use protect_axum::protect;
use quiznight_core::password;
use quiznight_db::{role, user};
use quiznight_model::user::User;
use quiznight_model_tools::convert::IntoModel;
use sea_orm::DatabaseConnection;
use serde_derive::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = OK, body = Vec<User>, description = "All users with their roles"),
    ),
    tag = "admin",
    security(("session" = []))
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn list_users(Extension(conn): Extension<DatabaseConnection>) -> Result<impl IntoResponse, AdminError> {
    let users: Vec<User> = user::Query::get_users(&conn)
        .await?
        .into_iter()
        .map(IntoModel::into_model)
        .collect();
    Ok(Json(users))
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct CreateUserPayload {
    username: String,
    email: String,
    password: String,
    full_name: String,
    role_id: Option<Uuid>,
}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = CreateUserPayload,
    responses(
        (status = CREATED, body = User, description = "User created"),
        (status = BAD_REQUEST, description = "A required field is missing"),
    ),
    tag = "admin",
    security(("session" = []))
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn create_user(
    Extension(conn): Extension<DatabaseConnection>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AdminError> {
    if [&payload.username, &payload.email, &payload.password, &payload.full_name]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(AdminError::Validation(
            "username, email, password and full_name are required",
        ));
    }

    if let Some(role_id) = payload.role_id {
        role::Query::find_role_by_id(&conn, role_id)
            .await?
            .ok_or(AdminError::NotFound("role not found"))?;
    }

    let password_hash =
        password::hash_password(&payload.password).map_err(|error| sea_orm::DbErr::Custom(error.to_string()))?;

    let created = user::Mutation::create_user(
        &conn,
        payload.username.trim(),
        payload.email.trim(),
        &password_hash,
        payload.full_name.trim(),
        payload.role_id,
    )
    .await?;

    tracing::info!(user_id = %created.id, "admin created user");

    let user: User = user::Query::find_user_by_id(&conn, created.id)
        .await?
        .ok_or(AdminError::NotFound("user not found"))?
        .into_model();
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/admin/users/{user_id}",
    responses(
        (status = OK, body = User),
        (status = NOT_FOUND, description = "No such user"),
    ),
    tag = "admin",
    security(("session" = []))
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn get_user(
    Extension(conn): Extension<DatabaseConnection>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AdminError> {
    let user: User = user::Query::find_user_by_id(&conn, user_id)
        .await?
        .ok_or(AdminError::NotFound("user not found"))?
        .into_model();
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/admin/users/{user_id}",
    responses(
        (status = NO_CONTENT, description = "User deleted"),
        (status = NOT_FOUND, description = "No such user"),
    ),
    tag = "admin",
    security(("session" = []))
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn delete_user(
    Extension(conn): Extension<DatabaseConnection>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AdminError> {
    user::Query::find_user_by_id(&conn, user_id)
        .await?
        .ok_or(AdminError::NotFound("user not found"))?;

    user::Mutation::delete(&conn, user_id).await?;
    tracing::debug!(%user_id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ChangeRolePayload {
    role_id: Uuid,
}

#[utoipa::path(
    put,
    path = "/api/admin/users/{user_id}/role",
    request_body = ChangeRolePayload,
    responses(
        (status = OK, body = User, description = "Role reassigned"),
        (status = NOT_FOUND, description = "User or role missing"),
    ),
    tag = "admin",
    security(("session" = []))
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn change_user_role(
    Extension(conn): Extension<DatabaseConnection>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<ChangeRolePayload>,
) -> Result<impl IntoResponse, AdminError> {
    user::Query::find_user_by_id(&conn, user_id)
        .await?
        .ok_or(AdminError::NotFound("user not found"))?;
    let role = role::Query::find_role_by_id(&conn, payload.role_id)
        .await?
        .ok_or(AdminError::NotFound("role not found"))?;

    let updated = user::Mutation::set_role(&conn, user_id, Some(role.id)).await?;
    tracing::info!(%user_id, role = %role.name, "changed user role");

    let user: User = (updated, Some(role)).into_model();
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/admin/users/{user_id}/promote",
    responses(
        (status = OK, body = User, description = "User now holds the Admin role"),
        (status = NOT_FOUND, description = "User or the Admin role missing"),
    ),
    tag = "admin",
    security(("session" = []))
)]
#[protect("Permission::Admin", ty = "Permission")]
pub(crate) async fn promote_to_admin(
    Extension(conn): Extension<DatabaseConnection>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AdminError> {
    user::Query::find_user_by_id(&conn, user_id)
        .await?
        .ok_or(AdminError::NotFound("user not found"))?;
    let admin_role = role::Query::find_role_by_name(&conn, "Admin")
        .await?
        .ok_or(AdminError::NotFound("the Admin role does not exist"))?;

    let updated = user::Mutation::set_role(&conn, user_id, Some(admin_role.id)).await?;
    tracing::info!(%user_id, "promoted user to admin");

    let user: User = (updated, Some(admin_role)).into_model();
    Ok(Json(user))
}
