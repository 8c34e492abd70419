use quiznight_entity::role::{self, Entity as Role, Model as RoleModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_role_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<Option<RoleModel>, DbErr> {
        Role::find_by_id(id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "error loading role");
        })
    }

    pub async fn find_role_by_name<C: ConnectionTrait>(conn: &C, name: &str) -> Result<Option<RoleModel>, DbErr> {
        Role::find()
            .filter(role::Column::Name.eq(name))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error loading role by name");
            })
    }

    pub async fn get_roles<C: ConnectionTrait>(conn: &C) -> Result<Vec<RoleModel>, DbErr> {
        Role::find()
            .order_by_asc(role::Column::Name)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to list roles");
            })
    }
}
