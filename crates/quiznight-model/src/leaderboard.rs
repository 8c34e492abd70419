use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct LeaderboardEntry {
    pub team_id: Uuid,
    pub team_name: String,
    pub total_points: i64,
    pub correct_answers: i64,
}
