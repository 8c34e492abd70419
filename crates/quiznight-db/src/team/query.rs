use quiznight_entity::team::{self, Entity as Team, Model as TeamModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_teams_by_event<C: ConnectionTrait>(conn: &C, event_id: Uuid) -> Result<Vec<TeamModel>, DbErr> {
        Team::find()
            .filter(team::Column::EventId.eq(event_id))
            .order_by_asc(team::Column::Name)
            .order_by_asc(team::Column::Id)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load teams");
            })
    }

    pub async fn find_team_by_id<C: ConnectionTrait>(conn: &C, team_id: Uuid) -> Result<Option<TeamModel>, DbErr> {
        Team::find_by_id(team_id).one(conn).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load team by id");
        })
    }
}
