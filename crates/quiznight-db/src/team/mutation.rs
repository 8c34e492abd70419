use quiznight_entity::team::{ActiveModel, Entity, Model};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_team<C: ConnectionTrait>(
        conn: &C,
        event_id: Uuid,
        name: &str,
        table_number: Option<i32>,
        max_members: Option<i32>,
    ) -> Result<Model, DbErr> {
        let team = ActiveModel {
            id: Set(Uuid::new_v4()),
            event_id: Set(event_id),
            name: Set(name.to_string()),
            table_number: Set(table_number),
            max_members: Set(max_members),
            created_at: Set(chrono::Utc::now().naive_utc()),
        };
        team.insert(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to create team");
        })
    }

    pub async fn delete<C: ConnectionTrait>(conn: &C, team_id: Uuid) -> Result<(), DbErr> {
        let res = Entity::delete_by_id(team_id).exec(conn).await;
        if let Err(error) = res {
            tracing::error!(error = &error as &dyn Error, "failed to delete team");
            return Err(error);
        }
        Ok(())
    }
}
