use quiznight_entity::user::{ActiveModel, Entity, Model};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_user<C: ConnectionTrait>(
        conn: &C,
        username: &str,
        email: &str,
        password_hash: &str,
        full_name: &str,
        role_id: Option<Uuid>,
    ) -> Result<Model, DbErr> {
        let user = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            full_name: Set(full_name.to_string()),
            role_id: role_id.map_or(NotSet, |id| Set(Some(id))),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        user.insert(conn).await
    }

    pub async fn set_role<C: ConnectionTrait>(conn: &C, user_id: Uuid, role_id: Option<Uuid>) -> Result<Model, DbErr> {
        let user = ActiveModel {
            id: Unchanged(user_id),
            role_id: Set(role_id),
            ..Default::default()
        };
        user.update(conn).await
    }

    pub async fn set_password_hash<C: ConnectionTrait>(
        conn: &C,
        user_id: Uuid,
        password_hash: &str,
    ) -> Result<Model, DbErr> {
        let user = ActiveModel {
            id: Unchanged(user_id),
            password_hash: Set(password_hash.to_string()),
            ..Default::default()
        };
        user.update(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<(), DbErr> {
        let res = Entity::delete_by_id(user_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete user");
            return Err(error);
        }
        Ok(())
    }
}
