use quiznight_entity::fun_fact::{ActiveModel, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_fun_fact<C: ConnectionTrait>(
        conn: &C,
        event_id: Uuid,
        title: &str,
        content: &str,
        order_index: i32,
    ) -> Result<Model, DbErr> {
        let fun_fact = ActiveModel {
            id: Set(Uuid::new_v4()),
            event_id: Set(event_id),
            title: Set(title.to_string()),
            content: Set(content.to_string()),
            order_index: Set(order_index),
            is_active: Set(true),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        fun_fact.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to create fun fact");
        })
    }

    pub async fn set_active<C: ConnectionTrait>(conn: &C, fun_fact_id: Uuid, is_active: bool) -> Result<Model, DbErr> {
        let fun_fact = ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(fun_fact_id),
            is_active: Set(is_active),
            ..Default::default()
        };
        fun_fact.update(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to update fun fact");
        })
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, fun_fact_id: Uuid) -> Result<(), DbErr> {
        let res = Entity::delete_by_id(fun_fact_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete fun fact");
            return Err(error);
        }
        Ok(())
    }
}
