use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum EventStatus {
    Draft,
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub host_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    pub status: EventStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(with = "crate::timestamp::unix_seconds_opt", skip_serializing_if = "Option::is_none", default)]
    #[schema(value_type = Option<String>)]
    pub scheduled_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closing_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_policy: Option<String>,
    pub allow_participants: bool,
    #[serde(with = "crate::timestamp::unix_seconds")]
    #[schema(value_type = String)]
    pub created_at: NaiveDateTime,
    #[serde(with = "crate::timestamp::unix_seconds")]
    #[schema(value_type = String)]
    pub updated_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialize() {
        assert_eq!(r#""draft""#, serde_json::to_string(&EventStatus::Draft).unwrap());
        assert_eq!(r#""cancelled""#, serde_json::to_string(&EventStatus::Cancelled).unwrap());
    }

    #[test]
    fn test_status_display() {
        assert_eq!("draft", EventStatus::Draft.to_string());
        assert_eq!("completed", EventStatus::Completed.to_string());
    }
}
