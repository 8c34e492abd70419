use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A cached external image, bound 1:1 to a question.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct EventImage {
    pub id: Uuid,
    pub question_id: Uuid,
    pub unsplash_id: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(with = "crate::timestamp::unix_seconds_opt", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub expires_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_by_user_id: Option<Uuid>,
    #[serde(with = "crate::timestamp::unix_seconds")]
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
}
