use quiznight_entity::role::{ActiveModel, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_role<C: ConnectionTrait>(
        conn: &C,
        name: &str,
        description: Option<&str>,
    ) -> Result<Model, DbErr> {
        let role = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            description: Set(description.map(std::string::ToString::to_string)),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        role.insert(conn).await
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, role_id: Uuid) -> Result<(), DbErr> {
        let res = Entity::delete_by_id(role_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete role");
            return Err(error);
        }
        Ok(())
    }
}
