use quiznight_entity::event::{ActiveModel, Entity, Model};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_event<C: ConnectionTrait>(conn: &C, event: ActiveModel) -> Result<Model, DbErr> {
        event.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to create event");
        })
    }

    pub async fn update_event<C: ConnectionTrait>(conn: &C, event: ActiveModel) -> Result<Model, DbErr> {
        event.update(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to update event");
        })
    }

    /// Removes the event; questions, teams, participants and fun facts go
    /// with it through the cascading foreign keys.
    pub async fn delete<C: ConnectionTrait>(conn: &C, event_id: Uuid) -> Result<(), DbErr> {
        let res = Entity::delete_by_id(event_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete event");
            return Err(error);
        }
        Ok(())
    }
}
