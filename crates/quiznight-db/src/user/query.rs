use quiznight_entity::role::Model as RoleModel;
use quiznight_entity::user::{self, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_user_by_id<C: ConnectionTrait>(
        conn: &C,
        id: Uuid,
    ) -> Result<Option<(UserModel, Option<RoleModel>)>, DbErr> {
        User::find_by_id(id)
            .find_also_related(quiznight_entity::role::Entity)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error loading user");
            })
    }

    pub async fn find_user_by_email<C: ConnectionTrait>(
        conn: &C,
        email: &str,
    ) -> Result<Option<(UserModel, Option<RoleModel>)>, DbErr> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .find_also_related(quiznight_entity::role::Entity)
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "error loading user by email");
            })
    }

    pub async fn get_users<C: ConnectionTrait>(conn: &C) -> Result<Vec<(UserModel, Option<RoleModel>)>, DbErr> {
        User::find()
            .find_also_related(quiznight_entity::role::Entity)
            .order_by_asc(user::Column::Username)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to list users");
            })
    }

    pub async fn count_by_role<C: ConnectionTrait>(conn: &C, role_id: Uuid) -> Result<u64, DbErr> {
        use sea_orm::PaginatorTrait;
        User::find()
            .filter(user::Column::RoleId.eq(role_id))
            .count(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to count users for role");
            })
    }
}
