use quiznight_entity::{participant, response, team};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};
use std::error::Error;
use uuid::Uuid;

pub struct Query;

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct LeaderboardRow {
    pub team_id: Uuid,
    pub team_name: String,
    pub total_points: i64,
    pub correct_answers: i64,
}

impl Query {
    pub async fn get_responses_by_participant<C: ConnectionTrait>(
        conn: &C,
        participant_id: Uuid,
    ) -> Result<Vec<response::Model>, DbErr> {
        response::Entity::find()
            .filter(response::Column::ParticipantId.eq(participant_id))
            .order_by_asc(response::Column::CreatedAt)
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load responses");
            })
    }

    pub async fn find_response<C: ConnectionTrait>(
        conn: &C,
        participant_id: Uuid,
        question_id: Uuid,
    ) -> Result<Option<response::Model>, DbErr> {
        response::Entity::find()
            .filter(response::Column::ParticipantId.eq(participant_id))
            .filter(response::Column::QuestionId.eq(question_id))
            .one(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load response");
            })
    }

    /// Per-team totals across all answered questions of an event. Teams with
    /// no responses yet do not appear; the route layer fills them in.
    pub async fn leaderboard<C: ConnectionTrait>(conn: &C, event_id: Uuid) -> Result<Vec<LeaderboardRow>, DbErr> {
        response::Entity::find()
            .select_only()
            .column_as(team::Column::Id, "team_id")
            .column_as(team::Column::Name, "team_name")
            .column_as(response::Column::Points.sum(), "total_points")
            .column_as(
                Expr::cust("SUM(CASE WHEN \"responses\".\"is_correct\" THEN 1 ELSE 0 END)"),
                "correct_answers",
            )
            .join(JoinType::InnerJoin, response::Relation::Participant.def())
            .join(JoinType::InnerJoin, participant::Relation::Team.def())
            .filter(participant::Column::EventId.eq(event_id))
            .group_by(team::Column::Id)
            .group_by(team::Column::Name)
            .order_by_desc(Expr::cust("\"total_points\""))
            .into_model::<LeaderboardRow>()
            .all(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to compute leaderboard");
            })
    }
}
